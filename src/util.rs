use crate::error::SeekError;

/// Parsed seek-bar position: total duration in seconds and a percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekPosition {
    pub duration: f64,
    pub percent: f64,
}

impl SeekPosition {
    /// Percent is clamped to `[0, 100]`.
    pub fn new(duration: f64, percent: f64) -> Self {
        Self {
            duration,
            percent: percent.clamp(0.0, 100.0),
        }
    }

    /// Parse the raw control value and duration attribute.
    pub fn parse(value: &str, duration: Option<&str>) -> Result<Self, SeekError> {
        let percent = parse_number("value", Some(value))?;
        let duration = parse_number("duration", duration)?;
        Ok(Self::new(duration, percent))
    }

    pub fn elapsed(&self) -> f64 {
        self.duration * self.percent / 100.0
    }

    pub fn remaining(&self) -> f64 {
        self.duration - self.elapsed()
    }
}

pub fn parse_number(field: &'static str, raw: Option<&str>) -> Result<f64, SeekError> {
    let invalid = || SeekError::InvalidNumber {
        field,
        raw: raw.map(str::to_owned),
    };
    let n: f64 = raw.map(str::trim).ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
    if n.is_finite() {
        Ok(n)
    } else {
        Err(invalid())
    }
}
