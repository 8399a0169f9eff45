//! CTM descriptor (`.png.mcmeta`) generation
//!
//! Each atlas is paired with a JSON descriptor telling the connected-texture
//! renderer which texture to use and on which render layer:
//!
//! ```json
//! {
//!   "__comment": "Generated using ADudeCalledLeo's MCP2CTMGlass tool",
//!   "ctm": {
//!     "ctm_version": 1,
//!     "type": "CTM",
//!     "layer": "TRANSLUCENT",
//!     "textures": [
//!       "glass_red_ctm.png"
//!     ]
//!   }
//! }
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Provenance string written into every descriptor
pub const PROVENANCE: &str = "Generated using ADudeCalledLeo's MCP2CTMGlass tool";

/// Descriptor schema version
pub const CTM_VERSION: u32 = 1;

/// Render layer the atlas is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RenderLayer {
    /// Alpha-tested, used for regular glass
    Cutout,
    /// Alpha-blended, used for stained glass
    Translucent,
}

/// Connected-texture method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CtmMethod {
    Ctm,
}

/// The `ctm` block of a descriptor. Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtmSection {
    pub ctm_version: u32,
    #[serde(rename = "type")]
    pub method: CtmMethod,
    pub layer: RenderLayer,
    pub textures: Vec<String>,
}

/// A complete `.png.mcmeta` document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtmMetadata {
    #[serde(rename = "__comment")]
    pub comment: String,
    pub ctm: CtmSection,
}

impl CtmMetadata {
    /// Build the descriptor for a variant; `None` is regular glass
    #[must_use]
    pub fn for_color(color: Option<&str>) -> Self {
        let layer = if color.is_some() {
            RenderLayer::Translucent
        } else {
            RenderLayer::Cutout
        };

        Self {
            comment: PROVENANCE.to_string(),
            ctm: CtmSection {
                ctm_version: CTM_VERSION,
                method: CtmMethod::Ctm,
                layer,
                textures: vec![texture_name(color)],
            },
        }
    }

    /// Pretty-printed JSON (two-space indent, no trailing newline)
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Io(e.into()))
    }
}

/// Atlas texture name for a variant: `glass_ctm.png` or `glass_<color>_ctm.png`
#[must_use]
pub fn texture_name(color: Option<&str>) -> String {
    match color {
        Some(color) => format!("glass_{color}_ctm.png"),
        None => "glass_ctm.png".to_string(),
    }
}

/// Write the descriptor for `color` to `output_path`, replacing any existing file
///
/// # Errors
/// Returns [`Error::Write`] if the file cannot be created or written.
pub fn emit<P: AsRef<Path>>(output_path: P, color: Option<&str>) -> Result<()> {
    let output_path = output_path.as_ref();
    let metadata = CtmMetadata::for_color(color);

    let write = || -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(output_path)?);
        serde_json::to_writer_pretty(&mut writer, &metadata)?;
        writer.flush()
    };

    write().map_err(|source| Error::Write {
        path: output_path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Wrote CTM descriptor {}", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_regular_descriptor() {
        let meta = CtmMetadata::for_color(None);
        assert_eq!(meta.ctm.layer, RenderLayer::Cutout);
        assert_eq!(meta.ctm.textures, vec!["glass_ctm.png".to_string()]);
    }

    #[test]
    fn test_stained_descriptor() {
        let meta = CtmMetadata::for_color(Some("red"));
        assert_eq!(meta.ctm.layer, RenderLayer::Translucent);
        assert_eq!(meta.ctm.textures, vec!["glass_red_ctm.png".to_string()]);
    }

    #[test]
    fn test_exact_layout() {
        let json = CtmMetadata::for_color(Some("lightblue")).to_json_pretty().unwrap();
        let expected = r#"{
  "__comment": "Generated using ADudeCalledLeo's MCP2CTMGlass tool",
  "ctm": {
    "ctm_version": 1,
    "type": "CTM",
    "layer": "TRANSLUCENT",
    "textures": [
      "glass_lightblue_ctm.png"
    ]
  }
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_emit_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("glass.png.mcmeta");
        std::fs::write(&path, "stale").unwrap();

        emit(&path, None).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: CtmMetadata = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, CtmMetadata::for_color(None));
        assert!(written.contains("\"layer\": \"CUTOUT\""));
    }

    #[test]
    fn test_emit_into_missing_dir() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("glass_red.png.mcmeta");

        let err = emit(&path, Some("red")).unwrap_err();
        match err {
            Error::Write { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("expected write error, got {other:?}"),
        }
    }
}
