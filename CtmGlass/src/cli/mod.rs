//! `CtmGlass` CLI - Command-line interface for glass atlas generation

pub mod progress;

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use tracing::Level;

use crate::batch::{BatchPhase, BatchProgress, run_batch};
use crate::variant::VariantSet;
use progress::{DISK, DOCUMENT, PICTURE, print_done, print_failure, print_step, print_substep};

#[derive(Parser)]
#[command(name = "ctmglass", version)]
#[command(about = "CtmGlass: stitch glass tiles into connected-texture atlases", long_about = None)]
struct Cli {
    /// Input directory (one subdirectory of tiles per glass variant)
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for atlases and .png.mcmeta descriptors
    #[arg(short, long)]
    output: PathBuf,

    /// Skip processing stained glass
    #[arg(long = "no-stained", visible_alias = "nostained")]
    no_stained: bool,

    /// Variant set TOML replacing the bundled regular + stained glass set
    #[arg(long, value_name = "FILE")]
    variants: Option<PathBuf>,

    /// Only print failures
    #[arg(short, long)]
    quiet: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Run the `CtmGlass` CLI
///
/// Per-variant failures are reported but do not make the run fail; only
/// argument and variant-set errors do.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let variants = load_variants(cli.variants.as_deref(), !cli.no_stained)?;
    let start = Instant::now();
    let quiet = cli.quiet;

    let report = |p: &BatchProgress| {
        if quiet {
            return;
        }
        let Some(variant) = p
            .current_variant
            .as_deref()
            .and_then(|name| variants.iter().find(|v| v.name == name))
        else {
            return;
        };
        match p.phase {
            BatchPhase::Composing => print_step(
                p.current,
                p.total,
                PICTURE,
                &format!("Processing {}...", variant.describe()),
            ),
            BatchPhase::WritingAtlas => print_substep(DISK, &variant.atlas_file_name()),
            BatchPhase::WritingDescriptor => {
                print_substep(DOCUMENT, &variant.descriptor_file_name());
            }
            BatchPhase::Complete => {}
        }
    };

    let result = run_batch(&cli.input, &cli.output, &variants, &report);

    for outcome in result.failures() {
        print_failure(&format!(
            "Failed to write CTM data for {}: {}",
            outcome.label,
            outcome.error.as_deref().unwrap_or("unknown error")
        ));
    }

    if !quiet {
        println!(
            "{} variants: {} written, {} failed",
            variants.len(),
            result.success_count,
            result.error_count
        );
        print_done(start.elapsed());
    }

    Ok(())
}

/// Bundled set unless a file is given; stained variants dropped when not wanted
fn load_variants(path: Option<&Path>, include_stained: bool) -> anyhow::Result<VariantSet> {
    let set = match path {
        Some(path) => VariantSet::from_toml_file(path)?,
        None => VariantSet::bundled()?,
    };

    let set = if include_stained { set } else { set.without_stained() };
    if set.is_empty() {
        anyhow::bail!("no variants left to process");
    }
    Ok(set)
}
