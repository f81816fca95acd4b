// ============================================================================
// PAGE SETUP - Registros declarativos de diálogos, paneles y campos de fecha
// ============================================================================

use serde::{Deserialize, Serialize};
use crate::config::CONFIG;
use crate::error::UiResult;

/// Qué hace el botón de confirmación de un diálogo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DialogAction {
    /// Navegar a la plantilla del diálogo con el id del disparador
    Navigate {
        id_attribute: String,
        #[serde(default = "default_url_attribute")]
        url_attribute: String,
        #[serde(default = "default_sentinel")]
        sentinel: String,
    },
    /// Enviar un formulario existente en la página
    SubmitForm { form_id: String },
    /// Solo abrir: el cuerpo del diálogo ya trae su propio formulario
    OpenOnly,
}

impl DialogAction {
    pub fn navigate(id_attribute: &str) -> Self {
        DialogAction::Navigate {
            id_attribute: id_attribute.to_string(),
            url_attribute: default_url_attribute(),
            sentinel: default_sentinel(),
        }
    }

    pub fn submit_form(form_id: &str) -> Self {
        DialogAction::SubmitForm {
            form_id: form_id.to_string(),
        }
    }

    pub fn has_confirm_button(&self) -> bool {
        !matches!(self, DialogAction::OpenOnly)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmDialogSpec {
    pub trigger_selector: String,
    pub dialog_selector: String,
    pub action: DialogAction,
}

impl ConfirmDialogSpec {
    pub fn new(trigger_selector: &str, dialog_selector: &str, action: DialogAction) -> Self {
        Self {
            trigger_selector: trigger_selector.to_string(),
            dialog_selector: dialog_selector.to_string(),
            action,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    #[default]
    Blind,
    Fade,
    Instant,
}

impl Transition {
    /// Propiedad CSS que se anima; None si el cambio es inmediato
    pub fn css_property(self) -> Option<&'static str> {
        match self {
            Transition::Blind => Some("max-height"),
            Transition::Fade => Some("opacity"),
            Transition::Instant => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelToggleSpec {
    pub trigger_selector: String,
    pub panel_selector: String,
    #[serde(default)]
    pub transition: Transition,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u32,
}

impl PanelToggleSpec {
    pub fn blind(trigger_selector: &str, panel_selector: &str) -> Self {
        Self {
            trigger_selector: trigger_selector.to_string(),
            panel_selector: panel_selector.to_string(),
            transition: Transition::Blind,
            duration_ms: default_duration_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateTimeFieldSpec {
    pub selector: String,
    #[serde(default = "default_server_format")]
    pub server_format: String,
    #[serde(default = "default_widget_format")]
    pub widget_format: String,
}

impl Default for DateTimeFieldSpec {
    fn default() -> Self {
        Self {
            selector: ".datepicker".to_string(),
            server_format: default_server_format(),
            widget_format: default_widget_format(),
        }
    }
}

/// Todo lo que se registra en una página, en orden
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PageSetup {
    #[serde(default)]
    pub dialogs: Vec<ConfirmDialogSpec>,
    #[serde(default)]
    pub panels: Vec<PanelToggleSpec>,
    #[serde(default)]
    pub datetime_fields: Vec<DateTimeFieldSpec>,
}

impl PageSetup {
    /// Configuración equivalente a los scripts de materias, encuestas y dborrador
    pub fn builtin() -> Self {
        Self {
            dialogs: vec![
                ConfirmDialogSpec::new(
                    "#administrar_materia #borrar_turno",
                    ".borrar_turno_dialogo",
                    DialogAction::navigate("data-turno"),
                ),
                ConfirmDialogSpec::new(
                    "#administrar_materia #borrar_horario",
                    ".borrar_horario_dialogo",
                    DialogAction::navigate("data-horario"),
                ),
                ConfirmDialogSpec::new(
                    "button#borrar_habilitacion",
                    ".borrar_habilitacion_dialogo",
                    DialogAction::navigate("data-habilitacion"),
                ),
                ConfirmDialogSpec::new(
                    "#cambiar_carga_publicada",
                    ".cambiar_carga_publicada_dialogo",
                    DialogAction::submit_form("cambio_de_carga"),
                ),
                ConfirmDialogSpec::new(
                    ".base_opciones #distribuir",
                    "#preguntas_distribucion_algoritmo",
                    DialogAction::OpenOnly,
                ),
                ConfirmDialogSpec::new(
                    ".base_opciones #publicar",
                    "#mandar_a_publicar",
                    DialogAction::OpenOnly,
                ),
            ],
            panels: vec![
                PanelToggleSpec::blind("button#esconder", "#escondible"),
                PanelToggleSpec::blind("#mostrar_agregar_horario", "#agregar_horario"),
            ],
            datetime_fields: vec![DateTimeFieldSpec::default()],
        }
    }

    /// Parsear la configuración embebida en la página
    pub fn from_json(json: &str) -> UiResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_empty(&self) -> bool {
        self.dialogs.is_empty() && self.panels.is_empty() && self.datetime_fields.is_empty()
    }
}

fn default_sentinel() -> String {
    CONFIG.dialog_config.sentinel.clone()
}

fn default_url_attribute() -> String {
    CONFIG.dialog_config.url_attribute.clone()
}

fn default_duration_ms() -> u32 {
    CONFIG.panel_config.transition_duration_ms
}

fn default_server_format() -> String {
    CONFIG.date_config.server_format.clone()
}

fn default_widget_format() -> String {
    CONFIG.date_config.widget_format.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_admin_dialogs() {
        let setup = PageSetup::builtin();
        let navigate: Vec<_> = setup
            .dialogs
            .iter()
            .filter_map(|d| match &d.action {
                DialogAction::Navigate { id_attribute, .. } => Some(id_attribute.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(navigate, vec!["data-turno", "data-horario", "data-habilitacion"]);

        let submit = setup
            .dialogs
            .iter()
            .find(|d| d.trigger_selector == "#cambiar_carga_publicada")
            .unwrap();
        assert_eq!(submit.action, DialogAction::submit_form("cambio_de_carga"));
        assert_eq!(setup.panels[0].transition, Transition::Blind);
        assert_eq!(setup.datetime_fields[0].selector, ".datepicker");
    }

    #[test]
    fn json_setup_fills_defaults() {
        let json = r##"{
            "dialogs": [
                {
                    "trigger_selector": "#borrar_turno",
                    "dialog_selector": ".borrar_turno_dialogo",
                    "action": { "kind": "navigate", "id_attribute": "data-turno" }
                },
                {
                    "trigger_selector": "#publicar",
                    "dialog_selector": "#mandar_a_publicar",
                    "action": { "kind": "open_only" }
                }
            ],
            "panels": [
                { "trigger_selector": "#esconder", "panel_selector": "#escondible", "transition": "fade" }
            ]
        }"##;
        let setup = PageSetup::from_json(json).unwrap();
        assert_eq!(setup.dialogs[0].action, DialogAction::navigate("data-turno"));
        assert!(!setup.dialogs[1].action.has_confirm_button());
        assert_eq!(setup.panels[0].transition, Transition::Fade);
        assert_eq!(setup.panels[0].duration_ms, CONFIG.panel_config.transition_duration_ms);
        assert!(setup.datetime_fields.is_empty());
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = PageSetup::from_json(r#"{ "dialogs": [ { "trigger_selector": 3 } ] }"#).unwrap_err();
        assert!(matches!(err, crate::error::UiError::InvalidConfig(_)));
        assert!(PageSetup::from_json("{}").unwrap().is_empty());
    }
}
