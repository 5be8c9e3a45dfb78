//! Kernel services.

pub mod locale;

pub use locale::{DocumentAttributes, LocaleService, PREFERRED_LANGUAGE_KEY};
