pub mod confirm_dialog_viewmodel;
pub mod panel_viewmodel;
pub mod datetime_field_viewmodel;

pub use confirm_dialog_viewmodel::{ActivationContext, ConfirmDialogViewModel, Outcome};
pub use panel_viewmodel::{PanelViewModel, TransitionPlan};
pub use datetime_field_viewmodel::DateTimeFieldViewModel;
