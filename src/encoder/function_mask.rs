use crate::models::Version;

/// Alignment pattern centers per version (rows and columns use the same list)
const PATTERN_POSITION_TABLE: [&[usize]; 40] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

/// Alignment pattern centers for a given version; empty for version 1.
pub fn alignment_pattern_positions(version: Version) -> &'static [usize] {
    PATTERN_POSITION_TABLE[version.number() as usize - 1]
}

/// Function module mask for a specific QR version.
/// true = function module (not data), false = data module.
pub struct FunctionMask {
    mask: Vec<bool>,
    size: usize,
    version: Version,
}

impl FunctionMask {
    /// Mark every function module of `version`
    pub fn new(version: Version) -> Self {
        let size = version.size();
        let mut fm = Self {
            mask: vec![false; size * size],
            size,
            version,
        };

        // Finder patterns + separators (8x8 areas, clipped to bounds)
        fm.mark_finder_area(0, 0);
        fm.mark_finder_area(size - 7, 0);
        fm.mark_finder_area(0, size - 7);

        // Timing patterns (row 6 and column 6)
        for i in 0..size {
            fm.mark(6, i);
            fm.mark(i, 6);
        }

        // Alignment patterns
        let align = alignment_pattern_positions(version);
        for &row in align {
            for &col in align {
                let in_tl = row <= 8 && col <= 8;
                let in_tr = row <= 8 && col >= size - 9;
                let in_bl = row >= size - 9 && col <= 8;
                if in_tl || in_tr || in_bl {
                    continue;
                }
                for r in row - 2..=row + 2 {
                    for c in col - 2..=col + 2 {
                        fm.mark(r, c);
                    }
                }
            }
        }

        // Format info areas
        for i in 0..9 {
            if i != 6 {
                fm.mark(8, i);
                fm.mark(i, 8);
            }
        }
        for i in 0..8 {
            fm.mark(8, size - 1 - i);
            fm.mark(size - 1 - i, 8);
        }

        // Dark module
        fm.mark(size - 8, 8);

        // Version info (v7+)
        if version.number() >= 7 {
            for i in 0..6 {
                for j in 0..3 {
                    fm.mark(i, size - 11 + j);
                    fm.mark(size - 11 + j, i);
                }
            }
        }

        fm
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn is_function(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.mask[row * self.size + col]
    }

    /// Modules left for data and EC bits
    pub fn data_modules_count(&self) -> usize {
        self.mask.iter().filter(|&&f| !f).count()
    }

    fn mark(&mut self, row: usize, col: usize) {
        if row < self.size && col < self.size {
            self.mask[row * self.size + col] = true;
        }
    }

    fn mark_finder_area(&mut self, row: usize, col: usize) {
        let start_r = row.saturating_sub(1);
        let start_c = col.saturating_sub(1);
        let end_r = (row + 8).min(self.size);
        let end_c = (col + 8).min(self.size);
        for r in start_r..end_r {
            for c in start_c..end_c {
                self.mark(r, c);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::tables::raw_data_modules;

    #[test]
    fn test_alignment_positions() {
        assert!(alignment_pattern_positions(Version::MIN).is_empty());
        assert_eq!(alignment_pattern_positions(Version::new(2).unwrap()), &[6, 18]);
        assert_eq!(
            alignment_pattern_positions(Version::new(7).unwrap()),
            &[6, 22, 38]
        );
    }

    #[test]
    fn test_alignment_table_matches_spacing_rule() {
        for version in Version::new(2).unwrap().up_to_max() {
            let ver = version.number() as usize;
            let positions = alignment_pattern_positions(version);
            let num_align = ver / 7 + 2;
            assert_eq!(positions.len(), num_align);
            assert_eq!(positions[0], 6);
            assert_eq!(*positions.last().unwrap(), version.size() - 7);
            let step = if ver == 32 {
                26
            } else {
                (ver * 4 + num_align * 2 + 1) / (num_align * 2 - 2) * 2
            };
            for w in positions[1..].windows(2) {
                assert_eq!(w[1] - w[0], step, "version {ver}");
            }
        }
    }

    #[test]
    fn test_function_mask_v1() {
        let fm = FunctionMask::new(Version::MIN);
        assert_eq!(fm.size(), 21);
        assert!(fm.is_function(0, 0));
        assert!(fm.is_function(7, 7));
        assert!(fm.is_function(6, 10));
        assert!(fm.is_function(13, 8));
        assert!(!fm.is_function(9, 9));
        assert!(!fm.is_function(20, 20));
        assert_eq!(fm.data_modules_count(), 208);
    }

    #[test]
    fn test_data_modules_match_capacity_formula() {
        for version in Version::MIN.up_to_max() {
            let fm = FunctionMask::new(version);
            assert_eq!(
                fm.data_modules_count(),
                raw_data_modules(version),
                "version {}",
                version.number()
            );
        }
    }
}
