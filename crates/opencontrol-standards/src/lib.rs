//! OpenControl standard documents.
//!
//! Loads named catalogs of compliance controls (NIST-800-53, PCI-DSS, ...)
//! from YAML into a [`StandardsRegistry`] and exposes each standard's
//! controls in natural identifier order (`AC-2` before `AC-10`, `1.1.1`
//! before `AB-2`).

#![deny(unsafe_code)]

pub mod error;
pub mod loader;
pub mod ordering;
pub mod registry;
pub mod standard;

pub use crate::error::{Result, StandardError, StandardErrorKind};
pub use crate::loader::{LoadReport, parse_standard, read_standard};
pub use crate::ordering::natural_cmp;
pub use crate::registry::StandardsRegistry;
pub use crate::standard::{Control, Standard};
