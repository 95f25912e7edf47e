//! Formatting service over an explicit catalog, plus built-in entry points.
//!
//! [`Formatter`] borrows an immutable [`Catalog`], making it trivial to
//! test against fabricated catalogs; the free [`format`] function is the
//! convenience path over the catalog bundled with the crate.

use crate::catalog::{Catalog, FormatDescriptor};
use crate::domain::{find_format, normalize, render};

/// Formatting service borrowing an immutable catalog.
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'c> {
    catalog: &'c Catalog,
}

impl<'c> Formatter<'c> {
    /// Creates a formatter over the given catalog.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// Creates a formatter over the catalog bundled with the crate.
    pub fn with_builtin_catalog() -> Formatter<'static> {
        Formatter::new(Catalog::builtin())
    }

    /// Formats `value` into its display form.
    ///
    /// The value is normalized, matched against the catalog, and rendered
    /// through the matched template. When no descriptor matches — wrong
    /// type, unknown length, region mismatch, or a shape the catalog does
    /// not describe — the original `value` is returned untouched, never
    /// the normalized form and never an error.
    pub fn format(&self, value: &str, kind: Option<&str>, region: Option<&str>) -> String {
        let normalized = normalize(value, kind);

        match find_format(self.catalog, &normalized, kind.unwrap_or(""), region) {
            Some(descriptor) => render(descriptor, &normalized),
            None => value.to_string(),
        }
    }

    /// Finds the descriptor `value` would be rendered through, if any.
    ///
    /// `value` is expected to be already normalized.
    pub fn find_format(
        &self,
        value: &str,
        kind: &str,
        region: Option<&str>,
    ) -> Option<&'c FormatDescriptor> {
        find_format(self.catalog, value, kind, region)
    }

    /// Catalog this formatter consults.
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }
}

/// Formats `value` against the catalog bundled with the crate.
///
/// See [`Formatter::format`] for the matching and fallback rules.
///
/// ```
/// use idfmt::format;
///
/// assert_eq!(
///     format("0000111122223333", Some("credit-card"), None),
///     "0000 1111 2222 3333"
/// );
/// assert_eq!(format("11122233300", Some("cpf"), Some("brazil")), "111.222.333-00");
/// ```
pub fn format(value: &str, kind: Option<&str>, region: Option<&str>) -> String {
    Formatter::with_builtin_catalog().format(value, kind, region)
}
