//! Bit manipulation.

use crate::error::{Error, Result};

/// Overwrites bits `low..=high` of `n` with the low bits of `m`. Bits of `m`
/// that do not fit the window are discarded.
pub fn insert_bits(n: u32, m: u32, low: u32, high: u32) -> Result<u32> {
    if low > high || high >= u32::BITS {
        return Err(Error::invalid(format!(
            "bit window {low}..={high} must satisfy low <= high < 32"
        )));
    }
    let width = high - low + 1;
    let ones = u32::MAX >> (u32::BITS - width);
    let window = ones << low;
    Ok((n & !window) | ((m << low) & window))
}
