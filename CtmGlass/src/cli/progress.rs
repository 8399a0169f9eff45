//! CLI progress display utilities
//!
//! Step indicators with emojis, in the `[3/17] 🖼️  Processing ...` style.

use std::time::Duration;

use console::{Emoji, style};
use indicatif::HumanDuration;

// =============================================================================
// Emoji Constants (with ASCII fallbacks for terminals without emoji support)
// =============================================================================

/// Picture - for texture/image operations
pub static PICTURE: Emoji<'_, '_> = Emoji("🖼️  ", "");
/// Floppy disk - for writing/saving operations
pub static DISK: Emoji<'_, '_> = Emoji("💾 ", "");
/// Document - for descriptor files
pub static DOCUMENT: Emoji<'_, '_> = Emoji("📄 ", "");
/// Cross - for failures
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "x ");
/// Sparkles - for completion
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

/// Print a step indicator: `[1/17] 🖼️  Message...`
pub fn print_step(current: usize, total: usize, emoji: Emoji, msg: &str) {
    println!(
        "{} {}{}",
        style(format!("[{current}/{total}]")).bold().dim(),
        emoji,
        msg
    );
}

/// Print an indented sub-step under the current step
pub fn print_substep(emoji: Emoji, msg: &str) {
    println!("      {}{}", emoji, style(msg).dim());
}

/// Print a failure line to stderr
pub fn print_failure(msg: &str) {
    eprintln!("{}{}", CROSS, style(msg).red());
}

/// Print completion message: `✨ Done in 2s`
pub fn print_done(elapsed: Duration) {
    println!("{} Done in {}", SPARKLE, HumanDuration(elapsed));
}
