use serde_json::Value;

/// Reads a player count sent by a loosely typed client.
///
/// Accepts non-negative integers, including integral floats such as `2.0`.
/// Anything else (negative, fractional, string, null, out of `u32` range)
/// yields `None`.
pub(crate) fn json_count(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok();
    }

    let n = value.as_f64()?;
    if n.is_finite() && n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&n) {
        Some(n as u32)
    } else {
        None
    }
}
