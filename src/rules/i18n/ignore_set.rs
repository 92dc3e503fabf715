//! Attribute names that never need an i18n marker.

use std::collections::HashSet;

/// Built-in attribute names that never carry human-readable copy.
pub const DEFAULT_IGNORED_ATTRIBUTES: &[&str] = &[
    "charset",
    "class",
    "color",
    "colspan",
    "fill",
    "formControlName",
    "height",
    "href",
    "id",
    "lang",
    "routerLink",
    "routerLinkActive",
    "src",
    "stroke",
    "stroke-width",
    "style",
    "svgIcon",
    "tabindex",
    "target",
    "type",
    "viewBox",
    "width",
    "xmlns",
];

/// Built-in defaults merged with the configured `ignoreAttributes`.
///
/// Membership is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet(HashSet<String>);

impl IgnoreSet {
    pub fn resolve(ignore_attributes: &[String]) -> Self {
        let names = DEFAULT_IGNORED_ATTRIBUTES
            .iter()
            .map(|name| name.to_string())
            .chain(ignore_attributes.iter().cloned())
            .collect();
        Self(names)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::resolve(&[])
    }
}
