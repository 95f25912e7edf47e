//! Format catalog: an ordered, immutable list of display descriptors.
//!
//! A catalog is constructed once (from JSON via [`loader`], or from
//! descriptors built in code) and never mutated afterward, so it is safe
//! to share across threads without locking. Descriptor order is
//! significant: when several descriptors could describe the same value,
//! the first one in the catalog wins.

pub mod loader;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::PLACEHOLDER;
use crate::error::{CatalogError, CatalogResult};

/// One catalog entry: a display template for a given identifier type,
/// exact digit length, and optional region.
///
/// Type and region tags are stored lower-cased so lookups compare
/// canonical forms only. The shape rule derived from the template is
/// compiled here, once, rather than on every lookup.
#[derive(Debug, Clone)]
pub struct FormatDescriptor {
    kind: String,
    length: usize,
    region: Option<String>,
    template: String,
    shape: Regex,
}

impl FormatDescriptor {
    /// Builds a descriptor, validating that the template's substitution
    /// points (`#` markers plus literal digits) agree with `length`.
    pub fn new(
        kind: &str,
        length: usize,
        region: Option<&str>,
        template: &str,
    ) -> CatalogResult<Self> {
        let found = template
            .chars()
            .filter(|c| *c == PLACEHOLDER || c.is_ascii_digit())
            .count();

        if found != length {
            return Err(CatalogError::PlaceholderMismatch {
                template: template.to_string(),
                expected: length,
                found,
            });
        }

        let shape = compile_shape(template)?;

        Ok(Self {
            kind: kind.to_lowercase(),
            length,
            region: region.map(str::to_lowercase),
            template: template.to_string(),
            shape,
        })
    }

    /// Canonical (lower-case) identifier type this descriptor formats.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Exact digit count a value must have to match.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Canonical (lower-case) region tag, if any.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Display template this descriptor renders into.
    pub fn template(&self) -> &str {
        &self.template
    }

    pub(crate) fn shape(&self) -> &Regex {
        &self.shape
    }
}

/// Ordered, immutable descriptor list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<FormatDescriptor>,
}

impl Catalog {
    /// Builds a catalog from already-constructed descriptors, preserving
    /// their order.
    pub fn from_descriptors(entries: Vec<FormatDescriptor>) -> Self {
        Self { entries }
    }

    /// Returns the catalog bundled with the crate.
    ///
    /// Initialized on first use; subsequent calls are lock-free reads of
    /// the same immutable value.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
            Catalog::from_json(include_str!("../../res/formats.json"))
                .expect("bundled catalog is well formed")
        });
        &BUILTIN
    }

    /// Iterates descriptors in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &FormatDescriptor> {
        self.entries.iter()
    }

    /// Number of descriptors in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the catalog has no descriptors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compiles a template into its anchored shape rule: `#` markers become
/// single-digit matches, literal digits stay literal (constraining the
/// value's shape), separators are dropped.
fn compile_shape(template: &str) -> CatalogResult<Regex> {
    let mut expression = String::with_capacity(template.len() * 2 + 2);
    expression.push('^');

    for ch in template.chars() {
        if ch == PLACEHOLDER {
            expression.push_str(r"\d");
        } else if ch.is_ascii_digit() {
            expression.push(ch);
        }
    }

    expression.push('$');

    Regex::new(&expression).map_err(|source| CatalogError::Shape {
        template: template.to_string(),
        source,
    })
}
