use ufmt_macros::uDebug;

/// Conversion from real-world units (eg. mm) to machine ticks.
///
/// The number of ticks per unit is configured by the machine; this type only
/// applies it.
#[derive(Debug, uDebug, PartialEq, Eq, Copy, Clone)]
pub struct TickScale {
    ticks_per_unit: i32,
}

impl TickScale {
    /// Creates a new tick scale.
    pub const fn new(ticks_per_unit: i32) -> Self {
        Self { ticks_per_unit }
    }

    /// Scale of one tick per unit; values are only rounded.
    pub const fn unit() -> Self {
        Self::new(1)
    }

    /// Returns the number of ticks per unit.
    pub fn ticks_per_unit(&self) -> i32 {
        self.ticks_per_unit
    }

    /// Converts a value in units to the nearest whole number of ticks.
    ///
    /// Halves round away from zero. Results outside the `i32` range
    /// saturate, and NaN converts to zero.
    pub fn to_ticks(&self, value: f64) -> i32 {
        round_half_away(value * self.ticks_per_unit as f64)
    }
}

/// Rounds to the nearest integer, with halves rounded away from zero.
pub fn round_half_away(value: f64) -> i32 {
    // `as` truncates toward zero and saturates.
    let truncated = value as i64;
    let fraction = value - truncated as f64;
    let rounded = if fraction >= 0.5 {
        truncated.saturating_add(1)
    } else if fraction <= -0.5 {
        truncated.saturating_sub(1)
    } else {
        truncated
    };
    rounded.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
