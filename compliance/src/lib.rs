//! Compliance domain core for the Conformance Board.
//!
//! This crate holds the entity model and the pure evaluation logic that maps
//! raw per-field attribute values onto the four-state compliance lattice and
//! rolls those states up across components and fields:
//!
//! - [`Field`], [`Standard`], [`StandardComponent`]: the three loaded tables
//! - [`ComplianceState`]: the `{full, partial, none, unknown}` lattice
//! - [`evaluate`]: per-component evaluation, annotations, and rollups
//! - [`StandardsCatalog`]: the standards↔components join, in file order
//!
//! Everything here is pure data and total functions; no I/O, no rendering.
//!
//! # Example
//!
//! ```
//! use compliance::{aggregate, field_compliance, ComplianceState, Field};
//!
//! let field = Field::new("Item Barcode", "Circulation log")
//!     .with_attribute("Range searching", "limited support");
//!
//! let state = field_compliance(&field, "Range searching");
//! assert_eq!(state, ComplianceState::Partial);
//! assert_eq!(
//!     aggregate(&[ComplianceState::Full, state]),
//!     ComplianceState::Partial,
//! );
//! ```

pub mod catalog;
pub mod evaluate;
pub mod types;

// Re-export main types
pub use catalog::{StandardGroup, StandardsCatalog};
pub use evaluate::{aggregate, compliance_annotation, field_compliance, standard_compliance};
pub use types::{AttributeValue, ComplianceState, Field, Standard, StandardComponent};
