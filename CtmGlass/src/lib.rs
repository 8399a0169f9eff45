//! # `CtmGlass`
//!
//! Builds connected-texture (CTM) glass atlases for resource-pack modding.
//!
//! Each glass variant's source directory holds four tiles (`26.png`, `24.png`,
//! `2.png`, `46.png`). They are stitched into a 2x2 atlas written as
//! `glass[_<color>]_ctm.png`, next to a `glass[_<color>].png.mcmeta` descriptor
//! that tells the CTM renderer which texture and render layer to use.
//!
//! ## Quick Start
//!
//! ### Building a single atlas
//!
//! ```no_run
//! use ctmglass::compose::compose;
//! use ctmglass::descriptor;
//!
//! let atlas = compose("tiles/red")?;
//! atlas.write_png("out/glass_red_ctm.png")?;
//! descriptor::emit("out/glass_red.png.mcmeta", Some("red"))?;
//! # Ok::<(), ctmglass::Error>(())
//! ```
//!
//! ### Running the standard batch
//!
//! ```no_run
//! use ctmglass::prelude::*;
//! use std::path::Path;
//!
//! let variants = VariantSet::standard(true);
//! let result = run_batch(Path::new("tiles"), Path::new("out"), &variants, &|_: &BatchProgress| {});
//! println!("{} written, {} failed", result.success_count, result.error_count);
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `ctmglass` command-line binary

pub mod error;
pub mod batch;
pub mod compose;
pub mod descriptor;
pub mod variant;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::compose::{Atlas, TILE_FILES, compose, compose_tiles};
    pub use crate::descriptor::{CtmMetadata, RenderLayer, emit, texture_name};
    pub use crate::variant::{Variant, VariantSet};
    pub use crate::batch::{
        BatchPhase, BatchProgress, BatchProgressCallback, BatchResult, VariantOutcome, run_batch,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
