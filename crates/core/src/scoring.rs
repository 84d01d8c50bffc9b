//! Scoring module - line-clear score rules.
//!
//! Each clear pass starts at `BASE_ROW_SCORE` points for the first row
//! and doubles the per-row award for every additional row cleared in the
//! same pass: 10, 20, 40, 80. The multiplier resets at the next pass.

use crate::types::BASE_ROW_SCORE;

/// Score delta for clearing `rows_cleared` rows in one pass.
pub fn line_clear_score(rows_cleared: usize) -> u32 {
    let mut total = 0;
    let mut row_points = BASE_ROW_SCORE;
    for _ in 0..rows_cleared {
        total += row_points;
        row_points *= 2;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometric_per_pass_scoring() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 10);
        assert_eq!(line_clear_score(2), 30);
        assert_eq!(line_clear_score(3), 70);
        assert_eq!(line_clear_score(4), 150);
    }
}
