//! Utilities related to abstract argumentation frameworks.

mod grounded_extension_computer;
pub use grounded_extension_computer::grounded_extension;
