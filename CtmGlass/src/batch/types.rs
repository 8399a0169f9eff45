//! Types for batch progress tracking and results
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::path::PathBuf;

// ============================================================================
// Progress Types
// ============================================================================

/// Progress callback type for batch operations
pub type BatchProgressCallback<'a> = &'a dyn Fn(&BatchProgress);

/// Progress information during a batch run
#[derive(Debug, Clone)]
pub struct BatchProgress {
    /// Current operation phase
    pub phase: BatchPhase,
    /// Current variant number (1-indexed)
    pub current: usize,
    /// Total number of variants
    pub total: usize,
    /// Variant being processed (if applicable)
    pub current_variant: Option<String>,
}

impl BatchProgress {
    /// Create a new progress update
    #[must_use]
    pub fn new(phase: BatchPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            current_variant: None,
        }
    }

    /// Create a progress update naming the variant
    #[must_use]
    pub fn with_variant(
        phase: BatchPhase,
        current: usize,
        total: usize,
        variant: impl Into<String>,
    ) -> Self {
        Self {
            phase,
            current,
            total,
            current_variant: Some(variant.into()),
        }
    }
}

/// Phase of a variant's processing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPhase {
    /// Reading and stitching the four tiles
    Composing,
    /// Encoding the atlas PNG
    WritingAtlas,
    /// Writing the `.png.mcmeta` descriptor
    WritingDescriptor,
    /// All variants processed
    Complete,
}

// ============================================================================
// Result Types
// ============================================================================

/// Outcome of processing one variant
#[derive(Debug, Clone)]
pub struct VariantOutcome {
    /// Variant name
    pub name: String,
    /// Human-readable label ("standard glass", "stained glass of color red")
    pub label: String,
    /// Where the atlas was (or would have been) written
    pub atlas_path: PathBuf,
    /// Where the descriptor was (or would have been) written
    pub descriptor_path: PathBuf,
    /// Failure message, `None` on success
    pub error: Option<String>,
}

impl VariantOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Result of a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    /// Number of variants fully written
    pub success_count: usize,
    /// Number of variants that failed at any step
    pub error_count: usize,
    /// Per-variant outcomes in processing order
    pub outcomes: Vec<VariantOutcome>,
}

impl BatchResult {
    /// Outcomes that failed
    pub fn failures(&self) -> impl Iterator<Item = &VariantOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }
}
