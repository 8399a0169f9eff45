//! Glass variant configuration
//!
//! A variant set is an ordered list of glass variants, each naming the input
//! subdirectory holding its tiles and an optional stained-glass color. The
//! standard set (regular glass plus sixteen stained colors) ships as a bundled
//! TOML file; an external file with the same shape can replace it.
//!
//! SPDX-FileCopyrightText: 2025 CyberDeco
//! SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::collections::HashSet;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::descriptor;
use crate::error::{Error, Result};

/// Input subdirectory holding the unlabeled glass tiles.
pub const REGULAR_SOURCE_DIR: &str = "aregular";

// Bundled variant set TOML
const GLASS_VARIANTS: &str = include_str!("glass.toml");

/// A single glass variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Display name, used in progress and failure messages
    pub name: String,
    /// Subdirectory of the input directory holding the four tiles
    pub source_dir: String,
    /// Stained-glass color label, `None` for regular glass
    #[serde(default)]
    pub color: Option<String>,
}

impl Variant {
    /// The unlabeled (regular) glass variant
    #[must_use]
    pub fn regular() -> Self {
        Self {
            name: "regular".to_string(),
            source_dir: REGULAR_SOURCE_DIR.to_string(),
            color: None,
        }
    }

    /// A stained-glass variant whose name, source directory and label are all `color`
    #[must_use]
    pub fn stained(color: &str) -> Self {
        Self {
            name: color.to_string(),
            source_dir: color.to_string(),
            color: Some(color.to_string()),
        }
    }

    /// Color label, if any
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    #[must_use]
    pub fn is_stained(&self) -> bool {
        self.color.is_some()
    }

    /// Human-readable label: "standard glass" or "stained glass of color red"
    #[must_use]
    pub fn describe(&self) -> String {
        match self.color() {
            Some(_) => format!("stained glass of color {}", self.name),
            None => "standard glass".to_string(),
        }
    }

    /// Atlas filename, e.g. `glass_red_ctm.png`
    #[must_use]
    pub fn atlas_file_name(&self) -> String {
        descriptor::texture_name(self.color())
    }

    /// Descriptor filename, e.g. `glass_red.png.mcmeta`
    #[must_use]
    pub fn descriptor_file_name(&self) -> String {
        match self.color() {
            Some(color) => format!("glass_{color}.png.mcmeta"),
            None => "glass.png.mcmeta".to_string(),
        }
    }
}

/// Ordered set of variants processed by a batch run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSet {
    #[serde(rename = "variant", default)]
    variants: Vec<Variant>,
}

impl VariantSet {
    /// Build a set from an explicit list
    ///
    /// # Errors
    /// Returns [`Error::InvalidVariantConfig`] if the list fails validation.
    pub fn new(variants: Vec<Variant>) -> Result<Self> {
        let set = Self { variants };
        set.validate()?;
        Ok(set)
    }

    /// The bundled set: regular glass followed by the sixteen stained colors
    ///
    /// # Errors
    /// Returns an error if the bundled TOML does not parse.
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(GLASS_VARIANTS)
    }

    /// The bundled set, optionally restricted to regular glass
    ///
    /// # Panics
    /// Panics if the bundled TOML is invalid (it is a compile-time constant).
    #[must_use]
    pub fn standard(include_stained: bool) -> Self {
        let set = Self::bundled().expect("valid bundled variant set");
        if include_stained {
            set
        } else {
            set.without_stained()
        }
    }

    /// Parse a set from TOML source
    ///
    /// # Errors
    /// Returns [`Error::InvalidVariantConfig`] on parse or validation failure.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let set: Self = toml::from_str(source)?;
        set.validate()?;
        Ok(set)
    }

    /// Load a set from a TOML file
    ///
    /// # Errors
    /// Returns an IO error if the file cannot be read, or
    /// [`Error::InvalidVariantConfig`] if its content is invalid.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source).map_err(|e| match e {
            Error::InvalidVariantConfig(msg) => Error::InvalidVariantConfig(format!(
                "{}: {msg}",
                path.as_ref().display()
            )),
            other => other,
        })
    }

    /// Drop every stained variant, keeping order
    #[must_use]
    pub fn without_stained(mut self) -> Self {
        self.variants.retain(|v| !v.is_stained());
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Variant> {
        self.variants.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    fn validate(&self) -> Result<()> {
        if self.variants.is_empty() {
            return Err(Error::InvalidVariantConfig("no variants defined".to_string()));
        }

        let mut names = HashSet::new();
        let mut outputs = HashSet::new();
        for variant in &self.variants {
            if !names.insert(variant.name.as_str()) {
                return Err(Error::InvalidVariantConfig(format!(
                    "duplicate variant name '{}'",
                    variant.name
                )));
            }
            if !is_single_component(&variant.source_dir) {
                return Err(Error::InvalidVariantConfig(format!(
                    "variant '{}': source_dir must be a single directory name, got '{}'",
                    variant.name, variant.source_dir
                )));
            }
            if let Some(color) = variant.color()
                && !is_resource_name(color)
            {
                return Err(Error::InvalidVariantConfig(format!(
                    "variant '{}': color '{color}' must be non-empty [a-z0-9_]",
                    variant.name
                )));
            }
            // Two variants with the same label would overwrite each other's output
            if !outputs.insert(variant.atlas_file_name()) {
                return Err(Error::InvalidVariantConfig(format!(
                    "variant '{}' writes {} which another variant already writes",
                    variant.name,
                    variant.atlas_file_name()
                )));
            }
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a VariantSet {
    type Item = &'a Variant;
    type IntoIter = std::slice::Iter<'a, Variant>;

    fn into_iter(self) -> Self::IntoIter {
        self.variants.iter()
    }
}

fn is_single_component(dir: &str) -> bool {
    let mut components = Path::new(dir).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn is_resource_name(label: &str) -> bool {
    !label.is_empty()
        && label
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: [&str; 16] = [
        "black", "blue", "brown", "cyan", "gray", "green", "lightblue", "lime", "magenta",
        "orange", "pink", "purple", "red", "silver", "white", "yellow",
    ];

    #[test]
    fn test_bundled_set_order() {
        let set = VariantSet::bundled().unwrap();
        assert_eq!(set.len(), 17);

        let mut iter = set.iter();
        assert_eq!(iter.next(), Some(&Variant::regular()));
        for (variant, color) in iter.zip(COLORS) {
            assert_eq!(variant, &Variant::stained(color));
        }
    }

    #[test]
    fn test_standard_without_stained() {
        let set = VariantSet::standard(false);
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().unwrap().source_dir, "aregular");
    }

    #[test]
    fn test_file_names() {
        let regular = Variant::regular();
        assert_eq!(regular.atlas_file_name(), "glass_ctm.png");
        assert_eq!(regular.descriptor_file_name(), "glass.png.mcmeta");
        assert_eq!(regular.describe(), "standard glass");

        let red = Variant::stained("red");
        assert_eq!(red.atlas_file_name(), "glass_red_ctm.png");
        assert_eq!(red.descriptor_file_name(), "glass_red.png.mcmeta");
        assert_eq!(red.describe(), "stained glass of color red");
    }

    #[test]
    fn test_custom_toml() {
        let set = VariantSet::from_toml_str(
            r#"
            [[variant]]
            name = "clear"
            source_dir = "clear_src"

            [[variant]]
            name = "tinted"
            source_dir = "tinted"
            color = "tinted"
            "#,
        )
        .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.clone().without_stained().len(), 1);
    }

    #[test]
    fn test_rejects_empty_set() {
        let err = VariantSet::from_toml_str("").unwrap_err();
        assert!(matches!(err, Error::InvalidVariantConfig(_)));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let err = VariantSet::new(vec![Variant::stained("red"), Variant::stained("red")]).unwrap_err();
        assert!(err.to_string().contains("duplicate variant name"));
    }

    #[test]
    fn test_rejects_nested_source_dir() {
        let mut variant = Variant::regular();
        variant.source_dir = "../escape".to_string();
        assert!(VariantSet::new(vec![variant]).is_err());
    }

    #[test]
    fn test_rejects_bad_color_label() {
        let mut variant = Variant::stained("red");
        variant.color = Some("Red Glass".to_string());
        assert!(VariantSet::new(vec![variant]).is_err());
    }

    #[test]
    fn test_rejects_colliding_outputs() {
        let mut second = Variant::regular();
        second.name = "regular2".to_string();
        let err = VariantSet::new(vec![Variant::regular(), second]).unwrap_err();
        assert!(err.to_string().contains("glass_ctm.png"));
    }

    #[test]
    fn test_from_missing_file() {
        let err = VariantSet::from_toml_file("/nonexistent/variants.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
