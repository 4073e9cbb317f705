//! Module placement: function patterns, format/version info and data zigzag

use crate::encoder::bch::BchEncoder;
use crate::encoder::function_mask::alignment_pattern_positions;
use crate::models::{ECLevel, MaskPattern, ModuleMatrix, Version};

/// Full symbol for `data` under `mask`.
///
/// With `test` set, format and version cells are reserved but left light so
/// candidates differ only in their data modules while they are scored.
pub(super) fn build_matrix(
    version: Version,
    ec_level: ECLevel,
    data: &[u8],
    mask: MaskPattern,
    test: bool,
) -> ModuleMatrix {
    let mut matrix = function_patterns(version, ec_level, mask, test);
    map_data(&mut matrix, data, mask);
    matrix
}

/// Every function module of the symbol, data area left unset
pub(super) fn function_patterns(
    version: Version,
    ec_level: ECLevel,
    mask: MaskPattern,
    test: bool,
) -> ModuleMatrix {
    let size = version.size();
    let mut matrix = ModuleMatrix::new(size);

    setup_finder(&mut matrix, 0, 0);
    setup_finder(&mut matrix, size - 7, 0);
    setup_finder(&mut matrix, 0, size - 7);
    setup_alignment(&mut matrix, version);
    setup_timing(&mut matrix);
    setup_format_info(&mut matrix, ec_level, mask, test);
    if version.number() >= 7 {
        setup_version_info(&mut matrix, version, test);
    }

    matrix
}

/// 7x7 finder with its light separator ring, clipped at the symbol edge
fn setup_finder(matrix: &mut ModuleMatrix, row: usize, col: usize) {
    for r in -1isize..=7 {
        for c in -1isize..=7 {
            let (rr, cc) = (row as isize + r, col as isize + c);
            if rr < 0 || cc < 0 {
                continue;
            }
            let dark = ((0..=6).contains(&r) && (c == 0 || c == 6))
                || ((0..=6).contains(&c) && (r == 0 || r == 6))
                || ((2..=4).contains(&r) && (2..=4).contains(&c));
            matrix.set(rr as usize, cc as usize, dark);
        }
    }
}

/// 5x5 alignment squares; centers already covered by a finder are skipped
fn setup_alignment(matrix: &mut ModuleMatrix, version: Version) {
    let positions = alignment_pattern_positions(version);
    for &row in positions {
        for &col in positions {
            if matrix.is_set(row, col) {
                continue;
            }
            for r in -2isize..=2 {
                for c in -2isize..=2 {
                    let dark = r.abs() == 2 || c.abs() == 2 || (r == 0 && c == 0);
                    matrix.set(
                        (row as isize + r) as usize,
                        (col as isize + c) as usize,
                        dark,
                    );
                }
            }
        }
    }
}

fn setup_timing(matrix: &mut ModuleMatrix) {
    let size = matrix.size();
    for i in 8..size - 8 {
        if !matrix.is_set(i, 6) {
            matrix.set(i, 6, i % 2 == 0);
        }
        if !matrix.is_set(6, i) {
            matrix.set(6, i, i % 2 == 0);
        }
    }
}

/// Both copies of the 15-bit format word, LSB first, plus the fixed dark module
fn setup_format_info(matrix: &mut ModuleMatrix, ec_level: ECLevel, mask: MaskPattern, test: bool) {
    let size = matrix.size();
    let bits = BchEncoder::type_info((ec_level.format_bits() << 3) | mask.bits());

    for i in 0..15 {
        let dark = !test && (bits >> i) & 1 == 1;

        // column 8, top then bottom
        let row = match i {
            0..=5 => i,
            6..=7 => i + 1,
            _ => size - 15 + i,
        };
        matrix.set(row, 8, dark);

        // row 8, right then left (skipping the timing column)
        let col = match i {
            0..=7 => size - 1 - i,
            8 => 7,
            _ => 14 - i,
        };
        matrix.set(8, col, dark);
    }

    matrix.set(size - 8, 8, !test);
}

/// Two transposed 6x3 copies of the 18-bit version word
fn setup_version_info(matrix: &mut ModuleMatrix, version: Version, test: bool) {
    let size = matrix.size();
    let bits = BchEncoder::type_number(version.number());

    for i in 0..18 {
        let dark = !test && (bits >> i) & 1 == 1;
        let (a, b) = (i / 3, i % 3 + size - 11);
        matrix.set(a, b, dark);
        matrix.set(b, a, dark);
    }
}

/// Place `data` MSB first into the unset modules, two columns at a time,
/// alternating upward and downward and skipping the vertical timing column.
/// Modules past the end of `data` carry a zero bit before masking.
pub(super) fn map_data(matrix: &mut ModuleMatrix, data: &[u8], mask: MaskPattern) {
    let size = matrix.size();
    let mut bit_index = 0usize;
    let mut upward = true;
    let mut right = size - 1;

    while right >= 1 {
        if right == 6 {
            right = 5;
        }
        for i in 0..size {
            let row = if upward { size - 1 - i } else { i };
            for col in [right, right - 1] {
                if matrix.is_set(row, col) {
                    continue;
                }
                let bit = data
                    .get(bit_index / 8)
                    .is_some_and(|byte| (byte >> (7 - bit_index % 8)) & 1 == 1);
                matrix.set(row, col, bit ^ mask.is_masked(row, col));
                bit_index += 1;
            }
        }
        upward = !upward;
        if right < 2 {
            break;
        }
        right -= 2;
    }
}
