//! Number rounding, formatting and input parsing shared by the views.

/// Round to one decimal place, halves away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to one decimal and floor at zero. Never yields `-0.0`.
pub fn round1_non_negative(value: f64) -> f64 {
    let rounded = round1(value);
    if rounded > 0.0 {
        rounded
    } else {
        0.0
    }
}

/// Slider label text: rounded, non-negative, always one decimal (`"12.0"`).
pub fn format_fixed1(value: f64) -> String {
    format!("{:.1}", round1_non_negative(value))
}

/// Output label text: rounded, non-negative, shortest form (`"12"`, `"12.3"`).
pub fn format_short1(value: f64) -> String {
    format!("{}", round1_non_negative(value))
}

/// Parse a numeric input and clamp it into `[min, max]`.
pub fn parse_clamped(input: &str, min: f64, max: f64, field_name: &str) -> Result<f64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }

    match trimmed.parse::<f64>() {
        Ok(val) if val.is_finite() => Ok(val.clamp(min, max)),
        _ => Err(format!("{} must be a valid number", field_name)),
    }
}
