// Utils compartidos

pub mod constants;
pub mod i18n;
pub mod js_interop;

pub use constants::*;
pub use i18n::*;
