//! Fixed-length period bucketing (no calendar months).
//! - year_index  = 1 + floor(elapsed / YEAR_LENGTH)
//! - month_index = 1 + floor(elapsed / MONTH_LENGTH), continuous across years
//! - current_period_start = start + month_index * MONTH_LENGTH

use crate::constants::{MONTH_LENGTH, YEAR_LENGTH};
use crate::error::DispenserError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeriodTimes {
    pub year_index: u64,
    pub month_index: u64,
    /// Boundary compared against `last_claimed_period_start_time` to detect rollover.
    pub current_period_start: i64,
}

pub fn compute_times(now_ts: i64, start_ts: i64) -> Result<PeriodTimes, DispenserError> {
    if now_ts < start_ts {
        return Err(DispenserError::BeforeStart);
    }
    let elapsed = now_ts
        .checked_sub(start_ts)
        .ok_or(DispenserError::MathOverflow)?;

    let year_index = (elapsed / YEAR_LENGTH) as u64 + 1;
    let month_index = (elapsed / MONTH_LENGTH) as u64 + 1;

    let current_period_start = i64::try_from(month_index)
        .map_err(|_| DispenserError::MathOverflow)?
        .checked_mul(MONTH_LENGTH)
        .ok_or(DispenserError::MathOverflow)?
        .checked_add(start_ts)
        .ok_or(DispenserError::MathOverflow)?;

    Ok(PeriodTimes {
        year_index,
        month_index,
        current_period_start,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 1_700_000_000;

    #[test]
    fn month_length_is_a_truncated_twelfth() {
        assert_eq!(MONTH_LENGTH, 2_628_000);
        assert_eq!(MONTH_LENGTH * 12, YEAR_LENGTH);
    }

    #[test]
    fn first_instant_is_year_one_month_one() {
        let t = compute_times(START, START).unwrap();
        assert_eq!(t.year_index, 1);
        assert_eq!(t.month_index, 1);
        assert_eq!(t.current_period_start, START + MONTH_LENGTH);
    }

    #[test]
    fn month_boundary_is_inclusive() {
        let before = compute_times(START + MONTH_LENGTH - 1, START).unwrap();
        assert_eq!(before.month_index, 1);

        let at = compute_times(START + MONTH_LENGTH, START).unwrap();
        assert_eq!(at.month_index, 2);
        assert_eq!(at.current_period_start, START + 2 * MONTH_LENGTH);
    }

    #[test]
    fn months_continue_across_years() {
        let t = compute_times(START + YEAR_LENGTH, START).unwrap();
        assert_eq!(t.year_index, 2);
        assert_eq!(t.month_index, 13);

        let last_of_year_one = compute_times(START + YEAR_LENGTH - 1, START).unwrap();
        assert_eq!(last_of_year_one.year_index, 1);
        assert_eq!(last_of_year_one.month_index, 12);
    }

    #[test]
    fn rejects_time_before_start() {
        assert!(matches!(
            compute_times(START - 1, START),
            Err(DispenserError::BeforeStart)
        ));
    }

    #[test]
    fn overflowing_period_start_is_reported() {
        assert!(matches!(
            compute_times(i64::MAX, 0),
            Err(DispenserError::MathOverflow)
        ));
    }
}
