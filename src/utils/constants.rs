/// Id del bloque JSON con la configuración de la página
pub const PAGE_SETUP_SCRIPT_ID: &str = "configuracion-ui";

// Clases CSS que la UI agrega al markup del servidor
pub const DIALOG_CLASS: &str = "dialogo";
pub const DIALOG_OPEN_CLASS: &str = "dialogo-abierto";
pub const DIALOG_BUTTONS_CLASS: &str = "dialogo-botones";
pub const DIALOG_CONFIRM_CLASS: &str = "dialogo-confirmar";
pub const DIALOG_CLOSE_CLASS: &str = "dialogo-cerrar";
pub const INVALID_DATE_CLASS: &str = "fecha-invalida";

// Marcas de registro (data-registrado-*)
pub const TRIGGER_MARKER: &str = "disparador";
pub const DIALOG_MARKER: &str = "dialogo";
pub const PANEL_MARKER: &str = "panel";
pub const DATE_MARKER: &str = "fecha";
