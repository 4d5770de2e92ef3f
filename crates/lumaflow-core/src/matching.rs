//! Block matching between consecutive crops.
//!
//! Exhaustive integer search over a bounded displacement window, scored
//! by Sum of Absolute Differences with branch-and-bound pruning: a
//! candidate's accumulation stops the moment its running cost reaches the
//! best score so far, which can never change the selected minimum.

use ndarray::Array2;

use crate::error::{FlowError, Result};
use crate::frame::Displacement;

/// Find the displacement in `[-radius, radius]^2` that best aligns the
/// previous crop with the current one.
///
/// Cost for a candidate `(dx, dy)` is
/// `SAD = sum |current[y][x] - previous[y - dy][x - dx]|` over the
/// overlap rectangle of the shifted windows; candidates with an empty
/// overlap (only possible when `radius >= side`) are skipped. Ties keep
/// the first minimum in raster scan order (dy outer, dx inner, both
/// ascending), so equal-score results are reproducible.
pub fn match_blocks(
    current: &Array2<u8>,
    previous: &Array2<u8>,
    radius: usize,
) -> Result<Displacement> {
    let (rows, cols) = current.dim();
    let (prev_rows, prev_cols) = previous.dim();
    if rows != prev_rows || cols != prev_cols || rows != cols {
        return Err(FlowError::CropSizeMismatch {
            current: rows,
            previous: prev_rows,
        });
    }

    let side = rows as i32;
    let radius = radius as i32;

    let mut best = Displacement::default();
    let mut best_cost = u64::MAX;

    for dy in -radius..=radius {
        let y_start = dy.max(0);
        let y_end = side + dy.min(0);
        if y_end <= y_start {
            continue;
        }
        for dx in -radius..=radius {
            let x_start = dx.max(0);
            let x_end = side + dx.min(0);
            if x_end <= x_start {
                continue;
            }

            let mut cost = 0u64;
            'candidate: for y in y_start..y_end {
                for x in x_start..x_end {
                    let cur = current[[y as usize, x as usize]];
                    let prev = previous[[(y - dy) as usize, (x - dx) as usize]];
                    cost += u64::from(cur.abs_diff(prev));
                    if cost >= best_cost {
                        break 'candidate;
                    }
                }
            }

            // Strict comparison keeps the earliest candidate on ties; an
            // aborted candidate lands here with cost >= best_cost.
            if cost < best_cost {
                best_cost = cost;
                best = Displacement::new(dx, dy);
            }
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bright_pixel(side: usize, x: usize, y: usize) -> Array2<u8> {
        let mut crop = Array2::zeros((side, side));
        crop[[y, x]] = 255;
        crop
    }

    #[test]
    fn test_identical_crops_prefer_first_scan_candidate() {
        // Every candidate scores zero on uniform input, so the first one
        // in scan order wins.
        let crop = Array2::zeros((20, 20));
        let result = match_blocks(&crop, &crop, 3).unwrap();
        assert_eq!(result, Displacement::new(-3, -3));
    }

    #[test]
    fn test_recovers_single_pixel_shift() {
        let previous = bright_pixel(20, 10, 10);
        let current = bright_pixel(20, 8, 13);
        let result = match_blocks(&current, &previous, 5).unwrap();
        assert_eq!(result, Displacement::new(-2, 3));
    }

    #[test]
    fn test_recovers_shift_at_radius_boundary() {
        let previous = bright_pixel(20, 10, 10);
        let current = bright_pixel(20, 15, 5);
        let result = match_blocks(&current, &previous, 5).unwrap();
        assert_eq!(result, Displacement::new(5, -5));
    }

    #[test]
    fn test_recovers_block_shift() {
        let mut previous = Array2::zeros((30, 30));
        let mut current = Array2::zeros((30, 30));
        for y in 12..16 {
            for x in 12..16 {
                previous[[y, x]] = 200;
                current[[y + 2, x - 1]] = 200;
            }
        }
        let result = match_blocks(&current, &previous, 4).unwrap();
        assert_eq!(result, Displacement::new(-1, 2));
    }

    #[test]
    fn test_zero_shift_beats_partial_alignments() {
        let mut previous = Array2::zeros((16, 16));
        for y in 0..16 {
            for x in 0..16 {
                previous[[y, x]] = ((x * 16 + y * 3) % 251) as u8;
            }
        }
        let current = previous.clone();
        let result = match_blocks(&current, &previous, 4).unwrap();
        assert_eq!(result, Displacement::new(0, 0));
    }

    #[test]
    fn test_empty_overlap_candidates_skipped() {
        // Radius larger than the side: shifts of magnitude >= side have no
        // overlap and must be skipped rather than scored as a zero-cost win.
        let previous = Array2::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
        let current = Array2::from_shape_vec((2, 2), vec![9, 9, 9, 1]).unwrap();
        let result = match_blocks(&current, &previous, 3).unwrap();
        assert_eq!(result, Displacement::new(1, 1));
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let a = Array2::zeros((10, 10));
        let b = Array2::zeros((12, 12));
        assert!(matches!(
            match_blocks(&a, &b, 3),
            Err(FlowError::CropSizeMismatch { .. })
        ));
    }
}
