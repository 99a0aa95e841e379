/// Round to one decimal place.
///
/// The camera quantizes its zoom factor with this after every wheel step so
/// that repeated small increments cannot accumulate float jitter.
pub fn round_to_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
