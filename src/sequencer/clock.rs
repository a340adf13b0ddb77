/// Nominal tick used when a host clock reports a zero delta (50 Hz).
pub const NOMINAL_TICK_SECS: f64 = 0.02;

/// Map a host-reported clock delta to a usable advance delta.
///
/// Negative and non-finite deltas collapse to 0 so playback never rewinds. A
/// zero delta is replaced by `fallback`, letting hosts whose clocks report 0
/// on the first tick substitute [`NOMINAL_TICK_SECS`] instead of stalling;
/// pass 0.0 to keep zero a strict no-op.
pub fn sanitize_delta(reported: f64, fallback: f64) -> f64 {
    if !reported.is_finite() || reported < 0.0 {
        0.0
    } else if reported == 0.0 {
        fallback.max(0.0)
    } else {
        reported
    }
}
