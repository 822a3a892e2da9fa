//! Focus value quantization.
//!
//! Capture devices only accept focus values that are reachable from the
//! advertised minimum by whole multiples of the advertised step; writing
//! anything else is undefined on the device side. Requested values are
//! therefore validated against `[min, max]` and snapped to the nearest
//! grid point before a write is issued.

use crate::types::FocusRange;
use thiserror::Error;

/// Rejection outcomes for a requested focus value.
///
/// The `Display` text of `OutOfRange` is the exact message shown to the
/// user on the reject path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FocusValueError {
    #[error("Focus value must be between {min} and {max}")]
    OutOfRange { min: i32, max: i32 },
}

/// Snap `value` to the nearest step-aligned point of `range`.
///
/// Rounding is half-up (a value exactly between two grid points snaps to
/// the higher one). When the advertised maximum is itself unaligned,
/// rounding near the top is clamped to the last grid point at or below
/// it, so the result always satisfies both `min <= result <= max` and
/// `(result - min) % step == 0`.
pub fn snap_to_step(value: i32, range: &FocusRange) -> Result<i32, FocusValueError> {
    if value < range.min || value > range.max {
        return Err(FocusValueError::OutOfRange {
            min: range.min,
            max: range.max,
        });
    }

    // 64-bit intermediates: `max - min` may not fit in i32.
    let min = i64::from(range.min);
    let max = i64::from(range.max);
    let step = i64::from(range.step.max(1));

    let offset = i64::from(value) - min;
    let mut steps = (offset + step / 2) / step;

    let last_aligned = (max - min) / step;
    if steps > last_aligned {
        steps = last_aligned;
    }

    Ok((min + steps * step) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: i32, max: i32, step: i32) -> FocusRange {
        FocusRange::new(min, max, step, min)
    }

    #[test]
    fn test_snap_rounds_to_nearest_step() {
        assert_eq!(snap_to_step(52, &range(0, 100, 5)), Ok(50));
        assert_eq!(snap_to_step(53, &range(0, 100, 5)), Ok(55));
        assert_eq!(snap_to_step(50, &range(0, 100, 5)), Ok(50));
    }

    #[test]
    fn test_snap_half_rounds_up() {
        assert_eq!(snap_to_step(5, &range(0, 100, 10)), Ok(10));
        assert_eq!(snap_to_step(15, &range(0, 100, 10)), Ok(20));
    }

    #[test]
    fn test_snap_with_unit_step_is_identity() {
        for v in [0, 1, 128, 255] {
            assert_eq!(snap_to_step(v, &range(0, 255, 1)), Ok(v));
        }
    }

    #[test]
    fn test_snap_clamps_at_unaligned_max() {
        // Grid is 0, 4, 8; 10 itself is not reachable.
        assert_eq!(snap_to_step(10, &range(0, 10, 4)), Ok(8));
        assert_eq!(snap_to_step(9, &range(0, 10, 4)), Ok(8));
    }

    #[test]
    fn test_snap_with_negative_minimum() {
        assert_eq!(snap_to_step(-1, &range(-20, 20, 3)), Ok(-2));
        assert_eq!(snap_to_step(-20, &range(-20, 20, 3)), Ok(-20));
    }

    #[test]
    fn test_snap_rejects_out_of_range() {
        let r = range(10, 50, 10);
        assert_eq!(
            snap_to_step(200, &r),
            Err(FocusValueError::OutOfRange { min: 10, max: 50 })
        );
        assert_eq!(
            snap_to_step(9, &r),
            Err(FocusValueError::OutOfRange { min: 10, max: 50 })
        );
    }

    #[test]
    fn test_out_of_range_message() {
        let err = snap_to_step(200, &range(10, 50, 10)).unwrap_err();
        assert_eq!(err.to_string(), "Focus value must be between 10 and 50");
    }

    #[test]
    fn test_snap_degenerate_single_point_range() {
        assert_eq!(snap_to_step(7, &range(7, 7, 1)), Ok(7));
    }

    #[test]
    fn test_snap_survives_extreme_range() {
        let r = range(i32::MIN, i32::MAX, 1);
        assert_eq!(snap_to_step(0, &r), Ok(0));
        assert_eq!(snap_to_step(i32::MAX, &r), Ok(i32::MAX));
    }
}
