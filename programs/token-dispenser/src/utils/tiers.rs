//! Tiered monthly cap.
//!
//! Years 1..=4 ramp through 10%, 25%, 50% and 100% of `monthly_max`. From year 5
//! on the cap is `monthly_max / 2^e` with `e = year / 4`, minus one when the year
//! closes a 4-year block (8, 12, ...).

use crate::constants::{
    YEARS_PER_BLOCK, YEAR_ONE_DIVISOR, YEAR_THREE_DIVISOR, YEAR_TWO_DIVISOR,
};

pub fn cap_for_year(year_index: u64, monthly_max: u64) -> u64 {
    match year_index {
        0 | 1 => monthly_max / YEAR_ONE_DIVISOR,
        2 => monthly_max / YEAR_TWO_DIVISOR,
        3 => monthly_max / YEAR_THREE_DIVISOR,
        4 => monthly_max,
        _ => monthly_max
            .checked_shr(halving_exponent(year_index))
            .unwrap_or(0),
    }
}

fn halving_exponent(year_index: u64) -> u32 {
    let q = year_index / YEARS_PER_BLOCK;
    let e = if year_index % YEARS_PER_BLOCK == 0 { q - 1 } else { q };
    u32::try_from(e).unwrap_or(u32::MAX)
}
