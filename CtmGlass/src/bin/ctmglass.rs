//! `ctmglass` command-line entry point

fn main() -> anyhow::Result<()> {
    ctmglass::cli::run_cli()
}
