// Primitive value types shared by every receipt module.
//
// Money
// - All amounts are integer minor currency units (cents). Floating point never appears.
// - Division happens only through `mul_div_round`, which rounds half up (toward positive infinity)
//   on exact 128-bit intermediates so the result is deterministic.
//
// Time and identity
// - Timestamps are epoch milliseconds.
// - Identifiers are UUID v7 strings, so they sort by creation time.

use chrono::Utc;
use uuid::Uuid;

pub type Cents = i64;
pub type EpochMillis = i64;

pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}

pub fn now_millis() -> EpochMillis {
    Utc::now().timestamp_millis()
}

/// Computes `value * numerator / denominator` rounded half up.
///
/// Returns 0 when `denominator` is 0. Results outside the `i64` range saturate.
pub fn mul_div_round(value: Cents, numerator: i64, denominator: i64) -> Cents {
    if denominator == 0 {
        return 0;
    }
    // |n| <= 2^126 and |d| <= 2^63, so negating and the quotient below stay within i128.
    let (mut n, mut d) = (value as i128 * numerator as i128, denominator as i128);
    if d < 0 {
        n = -n;
        d = -d;
    }
    // floor(n/d + 1/2) == q + 1 when the remainder is at least half of d
    let (q, r) = (n.div_euclid(d), n.rem_euclid(d));
    let rounded = if r >= d - r { q + 1 } else { q };
    rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}
