//! Raw ADC value re-mapping.
//!
//! Integer mapping follows the Arduino `map()` convention (linear, integer
//! truncation toward zero, no clamping): a raw value above `in_max` maps
//! above `out_max`, which is how out-of-range samples stay detectable after
//! scaling.

/// Linearly map `raw` from `0..=in_max` onto `out_min..=out_max`.
///
/// A zero `in_max` yields `out_min`.
pub fn map_range(raw: u16, in_max: u16, out_min: i32, out_max: i32) -> i32 {
    if in_max == 0 {
        return out_min;
    }
    let span = i64::from(out_max) - i64::from(out_min);
    let scaled = i64::from(raw) * span / i64::from(in_max) + i64::from(out_min);
    scaled.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Floating-point variant of [`map_range`].
pub fn map_float(raw: u16, in_max: u16, min: f32, max: f32) -> f32 {
    if in_max == 0 {
        return min;
    }
    (f32::from(raw) / f32::from(in_max)) * (max - min) + min
}

/// Raw value as a percentage of `in_max` (0 – 100 inside the legal domain).
pub fn percent(raw: u16, in_max: u16) -> i32 {
    map_range(raw, in_max, 0, 100)
}
