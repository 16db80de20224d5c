//! Scoring module - line-clear points, level progression, descent pacing
//!
//! Pure functions only; the game state applies them.

use crate::types::{
    BASE_DROP_MS, DROP_FLOOR_MS, DROP_SPEEDUP_PER_LEVEL_MS, LINES_PER_LEVEL, POINTS_PER_LINE,
};

/// Points for clearing `lines` rows at the given level.
///
/// The single scoring rule: `lines * 100 * level`, using the level in
/// effect when the clear happened (before any level update it triggers).
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    (lines as u32) * POINTS_PER_LINE * level
}

/// Level for a cumulative line count: one tier per 10 lines, starting at 1.
/// Monotone in `total_lines`, so the level never decreases.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Automatic descent period for a level (milliseconds).
///
/// `max(100, 1000 - (level - 1) * 100)`: each level shaves 100ms off the
/// base second, with a 100ms floor from level 10 on.
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_SPEEDUP_PER_LEVEL_MS);
    BASE_DROP_MS.saturating_sub(speedup).max(DROP_FLOOR_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_score() {
        assert_eq!(line_clear_score(0, 1), 0);
        assert_eq!(line_clear_score(1, 1), 100);
        assert_eq!(line_clear_score(4, 1), 400);
        assert_eq!(line_clear_score(2, 3), 600);
        assert_eq!(line_clear_score(4, 10), 4000);
    }

    #[test]
    fn test_level_for_lines() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(19), 2);
        assert_eq!(level_for_lines(20), 3);
        assert_eq!(level_for_lines(100), 11);
    }

    #[test]
    fn test_level_never_decreases() {
        let mut previous = 0;
        for lines in 0..200 {
            let level = level_for_lines(lines);
            assert!(level >= previous);
            previous = level;
        }
    }

    #[test]
    fn test_drop_interval_ms() {
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(2), 900);
        assert_eq!(drop_interval_ms(9), 200);
        assert_eq!(drop_interval_ms(10), 100);

        // Floor holds from level 10 on.
        assert_eq!(drop_interval_ms(11), 100);
        assert_eq!(drop_interval_ms(100), 100);
    }
}
