use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Formats a ratio as a percent: `0.1234` becomes `"12.34%"`. NaN renders as
/// `"-"`.
pub fn fmtp(number: f64) -> String {
    if number.is_nan() {
        return "-".to_owned();
    }
    format!("{:.2}%", number * 100.0)
}

/// Percent formatting without the `%` suffix: `0.1234` becomes `"12.34"`.
/// NaN renders as `"-"`.
pub fn fmtpn(number: f64) -> String {
    if number.is_nan() {
        return "-".to_owned();
    }
    format!("{:.2}", number * 100.0)
}

/// Plain two-decimal formatting. NaN renders as `"-"`.
pub fn fmtn(number: f64) -> String {
    if number.is_nan() {
        return "-".to_owned();
    }
    format!("{number:.2}")
}

/// Element format applied by the tabular mappers.
///
/// Unlike the scalar helpers above this does not special-case NaN; it formats
/// exactly what it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberFormat {
    /// Fixed-point with the given number of decimal digits.
    Fixed { digits: usize },
    /// Value scaled by 100 with a `%` suffix and the given decimal digits.
    Percent { digits: usize },
}

impl NumberFormat {
    pub fn apply(self, value: f64) -> String {
        match self {
            Self::Fixed { digits } => format!("{value:.digits$}"),
            Self::Percent { digits } => {
                let scaled = value * 100.0;
                format!("{scaled:.digits$}%")
            }
        }
    }
}

impl Display for NumberFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed { digits } => write!(f, ".{digits}f"),
            Self::Percent { digits } => write!(f, ".{digits}%"),
        }
    }
}
