use crate::types::DutchTerms;
use crate::Error;

/// Dutch auction price at `now`.
///
/// Decays linearly from `start_price` at `start_time` to `end_price` at
/// `start_time + duration`, then holds at `end_price`. The reduction is
/// truncated, so any rounding leaves the price slightly above the line.
pub fn dutch_price(terms: &DutchTerms, now: u64) -> Result<i128, Error> {
    let elapsed = now.saturating_sub(terms.start_time);
    if elapsed >= terms.duration {
        return Ok(terms.end_price);
    }

    let spread = terms
        .start_price
        .checked_sub(terms.end_price)
        .ok_or(Error::ArithmeticOverflow)?;
    let reduction = spread
        .checked_mul(elapsed as i128)
        .and_then(|scaled| scaled.checked_div(terms.duration as i128))
        .ok_or(Error::ArithmeticOverflow)?;

    terms
        .start_price
        .checked_sub(reduction)
        .ok_or(Error::ArithmeticOverflow)
}
