//! Catalog-driven display formatting for digit identifiers.
//!
//! This library turns freeform user-entered identifiers — phone numbers,
//! credit-card numbers, national document numbers — into a canonical
//! digit sequence, then re-renders that sequence into a human-readable,
//! region- and type-specific display form chosen from an ordered catalog
//! of format templates.
//!
//! # Features
//!
//! - **Normalization**: strip raw input down to its digits, keeping `+`
//!   for phone-typed values
//! - **First-match selection**: descriptors filtered by type, exact digit
//!   length, region, and a precompiled shape rule; catalog order breaks ties
//! - **Template rendering**: `#` markers and literal template digits both
//!   act as substitution points, separators copy through
//! - **Graceful fallback**: unmatched input is returned untouched, never
//!   an error
//! - **Custom catalogs**: load JSON descriptor files or build catalogs in
//!   code for testing
//!
//! No checksum validation is performed; the library reshapes digit counts
//! into visual patterns and nothing more.
//!
//! # Architecture
//!
//! - [`domain`]: the formatting pipeline (normalize, match, render)
//! - [`catalog`]: descriptor model, shape-rule compilation, JSON loading
//! - [`formatter`]: service layer tying the pipeline to a catalog
//! - [`error`]: catalog load/validation errors
//!
//! # Quick Start
//!
//! ```
//! use idfmt::format;
//!
//! assert_eq!(
//!     format("0000111122223333", Some("credit-card"), None),
//!     "0000 1111 2222 3333"
//! );
//! assert_eq!(format("911112222", Some("phone"), Some("brazil")), "91111-2222");
//!
//! // Unmatched values come back unchanged
//! assert_eq!(format("00001111222233335555", Some("credit-card"), None),
//!            "00001111222233335555");
//! ```
//!
//! ## Custom catalogs
//!
//! ```
//! use idfmt::{Catalog, Formatter};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::from_json(
//!     r####"[{ "type": "pin", "length": 6, "format": "### ###" }]"####,
//! )?;
//! let formatter = Formatter::new(&catalog);
//!
//! assert_eq!(formatter.format("123456", Some("pin"), None), "123 456");
//! # Ok(())
//! # }
//! ```

// Public API
pub mod catalog;
pub mod domain;
pub mod error;
pub mod formatter;

// Re-exports for convenient access
pub use catalog::{Catalog, FormatDescriptor};
pub use domain::{find_format, normalize, render, PLACEHOLDER};
pub use error::{CatalogError, CatalogResult};
pub use formatter::{format, Formatter};
