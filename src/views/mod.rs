// ============================================================================
// VIEWS - Enlazan el markup del servidor con los ViewModels (Rust puro)
// ============================================================================

pub mod confirm_dialog;
pub mod panel_toggle;
pub mod datetime_field;

pub use confirm_dialog::register_confirm_dialog;
pub use panel_toggle::register_panel_toggle;
pub use datetime_field::register_datetime_fields;
