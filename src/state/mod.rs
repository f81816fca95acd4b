// ============================================================================
// STATE MODULE - Estado con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod visibility;

pub use reactivity::*;
pub use visibility::*;
