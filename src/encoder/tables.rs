use crate::models::{ECLevel, Version};

/// One Reed-Solomon block: `total_count` codewords of which `data_count` carry data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsBlock {
    /// Data plus EC codewords
    pub total_count: usize,
    /// Data codewords
    pub data_count: usize,
}

impl RsBlock {
    /// EC codewords appended to the block
    pub fn ec_count(&self) -> usize {
        self.total_count - self.data_count
    }
}

// Tables from the QR Code specification (Model 2).
// Index: [ec_level][version]
const ECC_CODEWORDS_PER_BLOCK: [[u8; 41]; 4] = [
    [
        0, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        0, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        0, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        0, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[u8; 41]; 4] = [
    [
        0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        0, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        0, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        0, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// Modules left for data and EC codewords after every function pattern, including
/// the remainder bits that do not fill a whole codeword.
pub fn raw_data_modules(version: Version) -> usize {
    let ver = version.number() as usize;
    let mut result = (16 * ver + 128) * ver + 64;
    if ver >= 2 {
        let num_align = ver / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if ver >= 7 {
            result -= 36;
        }
    }
    result
}

/// Codewords (data + EC) a symbol of this version holds
pub fn total_codewords(version: Version) -> usize {
    raw_data_modules(version) / 8
}

/// Ordered RS blocks for a version and level.
///
/// Blocks come in at most two sizes: the first group ("short" blocks) followed by a
/// second group whose blocks each carry one more data codeword.
pub fn rs_blocks(version: Version, ec_level: ECLevel) -> Vec<RsBlock> {
    let idx = ec_level.table_index();
    let ver = version.number() as usize;
    let num_blocks = NUM_ERROR_CORRECTION_BLOCKS[idx][ver] as usize;
    let ec_per_block = ECC_CODEWORDS_PER_BLOCK[idx][ver] as usize;

    let total = total_codewords(version);
    let num_short = num_blocks - total % num_blocks;
    let short_total = total / num_blocks;

    (0..num_blocks)
        .map(|i| {
            let total_count = if i < num_short {
                short_total
            } else {
                short_total + 1
            };
            RsBlock {
                total_count,
                data_count: total_count - ec_per_block,
            }
        })
        .collect()
}

/// Data codeword capacity summed over all blocks
pub fn data_codewords(version: Version, ec_level: ECLevel) -> usize {
    rs_blocks(version, ec_level).iter().map(|b| b.data_count).sum()
}
