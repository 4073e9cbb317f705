//! Lost-point scoring used to pick a mask pattern. Lower is better.

use crate::models::ModuleGrid;

const N1: u32 = 3;
const N2: u32 = 3;
const N3: u32 = 40;
const N4: u32 = 10;

/// Dark/light sequence resembling a finder pattern followed by a light run
const FINDER_LIKE: [bool; 11] = [
    true, false, true, true, true, false, true, false, false, false, false,
];

/// Sum of all four penalty rules
pub fn lost_point<G: ModuleGrid + ?Sized>(grid: &G) -> u32 {
    adjacent_runs(grid) + uniform_blocks(grid) + finder_like(grid) + dark_balance(grid)
}

/// Rule 1: every row or column run of 5+ same-colored modules scores 3 + (run - 5)
pub fn adjacent_runs<G: ModuleGrid + ?Sized>(grid: &G) -> u32 {
    let n = grid.module_count();
    let mut points = 0;
    for i in 0..n {
        points += run_points((0..n).map(|j| grid.is_dark(i, j)));
        points += run_points((0..n).map(|j| grid.is_dark(j, i)));
    }
    points
}

fn run_points(line: impl Iterator<Item = bool>) -> u32 {
    let mut points = 0;
    let mut prev = None;
    let mut run = 0u32;
    for dark in line {
        if prev == Some(dark) {
            run += 1;
        } else {
            if run >= 5 {
                points += N1 + run - 5;
            }
            prev = Some(dark);
            run = 1;
        }
    }
    if run >= 5 {
        points += N1 + run - 5;
    }
    points
}

/// Rule 2: every 2x2 block of one color scores 3
pub fn uniform_blocks<G: ModuleGrid + ?Sized>(grid: &G) -> u32 {
    let n = grid.module_count();
    let mut points = 0;
    for row in 0..n.saturating_sub(1) {
        for col in 0..n - 1 {
            let dark = grid.is_dark(row, col);
            if grid.is_dark(row, col + 1) == dark
                && grid.is_dark(row + 1, col) == dark
                && grid.is_dark(row + 1, col + 1) == dark
            {
                points += N2;
            }
        }
    }
    points
}

/// Rule 3: every row-wise or column-wise occurrence of 1011101 0000 scores 40
pub fn finder_like<G: ModuleGrid + ?Sized>(grid: &G) -> u32 {
    let n = grid.module_count();
    if n < FINDER_LIKE.len() {
        return 0;
    }
    let mut points = 0;
    for i in 0..n {
        for start in 0..=n - FINDER_LIKE.len() {
            let in_row = FINDER_LIKE
                .iter()
                .enumerate()
                .all(|(k, &dark)| grid.is_dark(i, start + k) == dark);
            if in_row {
                points += N3;
            }
            let in_col = FINDER_LIKE
                .iter()
                .enumerate()
                .all(|(k, &dark)| grid.is_dark(start + k, i) == dark);
            if in_col {
                points += N3;
            }
        }
    }
    points
}

/// Rule 4: 10 points for every full 5% the dark ratio deviates from 50%
pub fn dark_balance<G: ModuleGrid + ?Sized>(grid: &G) -> u32 {
    let n = grid.module_count();
    let total = n * n;
    if total == 0 {
        return 0;
    }
    let dark = grid.dark_count();
    let deviation = (dark * 100).abs_diff(total * 50);
    N4 * (deviation / (total * 5)) as u32
}
