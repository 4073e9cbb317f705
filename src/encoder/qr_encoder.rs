/// Symbol encoder - wires segments, error correction, layout and mask search together
use rayon::prelude::*;
use tracing::debug;

use crate::encoder::config;
use crate::encoder::modes::Segment;
use crate::encoder::penalty;
use crate::encoder::tables::data_codewords;
use crate::error::Result;
use crate::models::{ECLevel, MaskPattern, ModuleGrid, ModuleMatrix, Version};

mod codewords;
mod layout;

pub use codewords::{PAD0, PAD1};

/// Builds one QR symbol from an ordered list of data segments.
///
/// ```
/// use rust_qrgen::{ECLevel, QrEncoder, Version};
///
/// let mut qr = QrEncoder::new(Version::MIN, ECLevel::M);
/// qr.add_segment("HELLO WORLD");
/// qr.build().unwrap();
/// assert_eq!(qr.module_count(), 21);
/// assert!(qr.is_dark(0, 0));
/// ```
#[derive(Debug, Clone)]
pub struct QrEncoder {
    version: Version,
    ec_level: ECLevel,
    segments: Vec<Segment>,
    modules: ModuleMatrix,
    mask: Option<MaskPattern>,
    penalty: Option<u32>,
    codewords: Vec<u8>,
}

impl QrEncoder {
    /// Empty encoder for a fixed version and error correction level
    pub fn new(version: Version, ec_level: ECLevel) -> Self {
        Self {
            version,
            ec_level,
            segments: Vec::new(),
            modules: ModuleMatrix::new(version.size()),
            mask: None,
            penalty: None,
            codewords: Vec::new(),
        }
    }

    /// Append a segment; takes effect on the next build
    pub fn add_segment(&mut self, segment: impl Into<Segment>) {
        self.segments.push(segment.into());
    }

    /// Drop every segment; the last built symbol stays readable until the next build
    pub fn clear_segments(&mut self) {
        self.segments.clear();
    }

    /// Encode the segments, try all eight masks and keep the lowest-scoring symbol.
    ///
    /// Fails with [`crate::EncodeError::CapacityOverflow`] when the segments do
    /// not fit; the previous symbol (if any) is left untouched in that case.
    pub fn build(&mut self) -> Result<()> {
        let codewords = codewords::create_data(self.version, self.ec_level, &self.segments)?;
        let (mask, score) = select_mask(self.version, self.ec_level, &codewords);
        debug!(
            version = self.version.number(),
            level = ?self.ec_level,
            mask = mask.bits(),
            score,
            "selected mask"
        );
        self.finish(codewords, mask, score);
        Ok(())
    }

    /// Encode the segments with a caller-chosen mask, skipping the search
    pub fn build_with_mask(&mut self, mask: MaskPattern) -> Result<()> {
        let codewords = codewords::create_data(self.version, self.ec_level, &self.segments)?;
        let score = evaluate(self.version, self.ec_level, &codewords, mask);
        self.finish(codewords, mask, score);
        Ok(())
    }

    fn finish(&mut self, codewords: Vec<u8>, mask: MaskPattern, score: u32) {
        self.modules = layout::build_matrix(self.version, self.ec_level, &codewords, mask, false);
        self.codewords = codewords;
        self.mask = Some(mask);
        self.penalty = Some(score);
    }

    /// Whether (row, col) is dark; light before the first build
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        self.modules.is_dark(row, col)
    }

    /// Side length in modules (4 * version + 17)
    pub fn module_count(&self) -> usize {
        self.version.size()
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// Segments queued for the next build
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Mask of the last build
    pub fn mask_pattern(&self) -> Option<MaskPattern> {
        self.mask
    }

    /// Lost points of the chosen candidate, scored with format and version cells light
    pub fn penalty_score(&self) -> Option<u32> {
        self.penalty
    }

    /// Interleaved data and EC codewords of the last build
    pub fn codewords(&self) -> &[u8] {
        &self.codewords
    }

    /// Module matrix of the last build
    pub fn modules(&self) -> &ModuleMatrix {
        &self.modules
    }

    /// Bits the current segments need at this version
    pub fn data_bits(&self) -> usize {
        codewords::data_bits(self.version, &self.segments)
    }

    /// Data capacity of this version and level in bits
    pub fn capacity_bits(&self) -> usize {
        data_codewords(self.version, self.ec_level) * 8
    }
}

impl ModuleGrid for QrEncoder {
    fn module_count(&self) -> usize {
        self.version.size()
    }

    fn is_dark(&self, row: usize, col: usize) -> bool {
        self.modules.is_dark(row, col)
    }
}

/// Score one candidate symbol built in test mode
fn evaluate(version: Version, ec_level: ECLevel, data: &[u8], mask: MaskPattern) -> u32 {
    let candidate = layout::build_matrix(version, ec_level, data, mask, true);
    let score = penalty::lost_point(&candidate);
    debug!(mask = mask.bits(), score, "mask candidate");
    score
}

/// Lowest score wins; equal scores go to the lowest mask id
fn select_mask(version: Version, ec_level: ECLevel, data: &[u8]) -> (MaskPattern, u32) {
    let trial = |mask: &MaskPattern| (evaluate(version, ec_level, data, *mask), *mask);

    let best = if config::use_parallel_search(version.number()) {
        MaskPattern::ALL.as_slice().par_iter().map(trial).min()
    } else {
        MaskPattern::ALL.iter().map(trial).min()
    };

    best.map_or((MaskPattern::Pattern0, 0), |(score, mask)| (mask, score))
}

#[cfg(test)]
mod tests;
