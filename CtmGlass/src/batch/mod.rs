//! Batch atlas generation
//!
//! Runs every variant of a [`VariantSet`] in order: stitch the tiles, write the
//! atlas, write the descriptor. A failing variant is recorded and logged, and
//! the run moves on. Files written before a variant failed are left in place.

mod types;

pub use types::{
    BatchPhase, BatchProgress, BatchProgressCallback, BatchResult, VariantOutcome,
};

use std::path::Path;

use crate::compose::compose;
use crate::descriptor;
use crate::error::Result;
use crate::variant::{Variant, VariantSet};

/// Generate atlas and descriptor pairs for every variant in `variants`
///
/// Tiles for each variant are read from `input_dir/<source_dir>`; outputs go
/// straight into `output_dir`, which must already exist.
///
/// # Arguments
/// * `input_dir` - Root directory containing one subdirectory per variant
/// * `output_dir` - Destination for `glass*_ctm.png` and `glass*.png.mcmeta`
/// * `variants` - Variants to process, in order
/// * `progress` - Callback for progress updates
///
/// # Returns
/// Summary of the run. Never fails as a whole.
pub fn run_batch(
    input_dir: &Path,
    output_dir: &Path,
    variants: &VariantSet,
    progress: BatchProgressCallback,
) -> BatchResult {
    let total = variants.len();
    let mut result = BatchResult::default();

    for (i, variant) in variants.iter().enumerate() {
        let current = i + 1;
        let atlas_path = output_dir.join(variant.atlas_file_name());
        let descriptor_path = output_dir.join(variant.descriptor_file_name());

        let report = |phase: BatchPhase| {
            progress(&BatchProgress::with_variant(phase, current, total, &variant.name));
        };

        let error = match process_variant(variant, input_dir, &atlas_path, &descriptor_path, &report) {
            Ok(()) => {
                result.success_count += 1;
                None
            }
            Err(e) => {
                tracing::debug!("Failed to write CTM data for {}: {}", variant.describe(), e);
                result.error_count += 1;
                Some(e.to_string())
            }
        };

        result.outcomes.push(VariantOutcome {
            name: variant.name.clone(),
            label: variant.describe(),
            atlas_path,
            descriptor_path,
            error,
        });
    }

    progress(&BatchProgress::new(BatchPhase::Complete, total, total));

    tracing::info!(
        "Processed {} variants: {} succeeded, {} failed",
        total,
        result.success_count,
        result.error_count
    );

    result
}

/// Stitch, write atlas, write descriptor for one variant
fn process_variant(
    variant: &Variant,
    input_dir: &Path,
    atlas_path: &Path,
    descriptor_path: &Path,
    phase: &dyn Fn(BatchPhase),
) -> Result<()> {
    phase(BatchPhase::Composing);
    let atlas = compose(input_dir.join(&variant.source_dir))?;

    phase(BatchPhase::WritingAtlas);
    atlas.write_png(atlas_path)?;

    phase(BatchPhase::WritingDescriptor);
    descriptor::emit(descriptor_path, variant.color())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    use crate::compose::TILE_FILES;

    fn populate(dir: &Path) {
        std::fs::create_dir_all(dir).unwrap();
        for name in TILE_FILES {
            RgbaImage::from_pixel(2, 2, Rgba([200, 220, 255, 128]))
                .save(dir.join(name))
                .unwrap();
        }
    }

    #[test]
    fn test_regular_only() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        populate(&input.path().join("aregular"));

        let result = run_batch(
            input.path(),
            output.path(),
            &VariantSet::standard(false),
            &|_: &BatchProgress| {},
        );

        assert_eq!(result.success_count, 1);
        assert_eq!(result.error_count, 0);
        assert!(output.path().join("glass_ctm.png").exists());
        assert!(output.path().join("glass.png.mcmeta").exists());
    }

    #[test]
    fn test_failure_does_not_stop_batch() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        populate(&input.path().join("aregular"));
        populate(&input.path().join("blue"));

        let set = VariantSet::new(vec![
            Variant::regular(),
            Variant::stained("black"),
            Variant::stained("blue"),
        ])
        .unwrap();

        let result = run_batch(input.path(), output.path(), &set, &|_: &BatchProgress| {});

        assert_eq!(result.success_count, 2);
        assert_eq!(result.error_count, 1);
        let failed: Vec<_> = result.failures().map(|o| o.name.as_str()).collect();
        assert_eq!(failed, vec!["black"]);
        assert!(result.outcomes[1].error.as_ref().unwrap().contains("26.png"));
        assert!(output.path().join("glass_blue_ctm.png").exists());
        assert!(!output.path().join("glass_black_ctm.png").exists());
    }

    #[test]
    fn test_atlas_kept_when_descriptor_fails() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        populate(&input.path().join("aregular"));
        // A directory squatting on the descriptor path makes File::create fail
        std::fs::create_dir(output.path().join("glass.png.mcmeta")).unwrap();

        let result = run_batch(
            input.path(),
            output.path(),
            &VariantSet::standard(false),
            &|_: &BatchProgress| {},
        );

        assert_eq!(result.error_count, 1);
        assert!(output.path().join("glass_ctm.png").is_file());
    }

    #[test]
    fn test_progress_phases() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        populate(&input.path().join("aregular"));

        let seen = RefCell::new(Vec::new());
        run_batch(
            input.path(),
            output.path(),
            &VariantSet::standard(false),
            &|p: &BatchProgress| {
                seen.borrow_mut()
                    .push((p.phase, p.current, p.total, p.current_variant.clone()));
            },
        );

        let regular = Some("regular".to_string());
        assert_eq!(
            seen.into_inner(),
            vec![
                (BatchPhase::Composing, 1, 1, regular.clone()),
                (BatchPhase::WritingAtlas, 1, 1, regular.clone()),
                (BatchPhase::WritingDescriptor, 1, 1, regular),
                (BatchPhase::Complete, 1, 1, None),
            ]
        );
    }
}
