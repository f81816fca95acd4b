pub mod url_template;
pub mod setup;

pub use url_template::{EntityId, UrlTemplate};
pub use setup::{ConfirmDialogSpec, DateTimeFieldSpec, DialogAction, PageSetup, PanelToggleSpec, Transition};
