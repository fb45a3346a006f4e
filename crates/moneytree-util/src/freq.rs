use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Calendar period granularity, keyed by the short codes used across the
/// numeric/tabular data ecosystem.
///
/// Codes are matched case-insensitively; `Y` and `A` are both yearly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    #[serde(rename = "B")]
    BusinessDay,
    #[serde(rename = "C")]
    CustomBusinessDay,
    #[serde(rename = "D")]
    Daily,
    #[serde(rename = "W")]
    Weekly,
    #[serde(rename = "M")]
    Monthly,
    #[serde(rename = "BM")]
    BusinessMonthEnd,
    #[serde(rename = "CBM")]
    CustomBusinessMonthEnd,
    #[serde(rename = "MS")]
    MonthStart,
    #[serde(rename = "BMS")]
    BusinessMonthStart,
    #[serde(rename = "CBMS")]
    CustomBusinessMonthStart,
    #[serde(rename = "Q")]
    Quarterly,
    #[serde(rename = "BQ")]
    BusinessQuarterEnd,
    #[serde(rename = "QS")]
    QuarterStart,
    #[serde(rename = "BQS")]
    BusinessQuarterStart,
    #[serde(rename = "Y")]
    Yearly,
    #[serde(rename = "A")]
    Annual,
    #[serde(rename = "BA")]
    BusinessYearEnd,
    #[serde(rename = "AS")]
    YearStart,
    #[serde(rename = "BAS")]
    BusinessYearStart,
    #[serde(rename = "H")]
    Hourly,
    #[serde(rename = "T")]
    Minutely,
    #[serde(rename = "S")]
    Secondly,
    #[serde(rename = "L")]
    Milliseconds,
    #[serde(rename = "U")]
    Microseconds,
}

impl Frequency {
    pub const ALL: [Self; 24] = [
        Self::BusinessDay,
        Self::CustomBusinessDay,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::BusinessMonthEnd,
        Self::CustomBusinessMonthEnd,
        Self::MonthStart,
        Self::BusinessMonthStart,
        Self::CustomBusinessMonthStart,
        Self::Quarterly,
        Self::BusinessQuarterEnd,
        Self::QuarterStart,
        Self::BusinessQuarterStart,
        Self::Yearly,
        Self::Annual,
        Self::BusinessYearEnd,
        Self::YearStart,
        Self::BusinessYearStart,
        Self::Hourly,
        Self::Minutely,
        Self::Secondly,
        Self::Milliseconds,
        Self::Microseconds,
    ];

    /// Looks a period code up case-insensitively. Unknown codes are absent,
    /// not an error.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|freq| freq.as_code() == code)
    }

    pub const fn as_code(self) -> &'static str {
        match self {
            Self::BusinessDay => "B",
            Self::CustomBusinessDay => "C",
            Self::Daily => "D",
            Self::Weekly => "W",
            Self::Monthly => "M",
            Self::BusinessMonthEnd => "BM",
            Self::CustomBusinessMonthEnd => "CBM",
            Self::MonthStart => "MS",
            Self::BusinessMonthStart => "BMS",
            Self::CustomBusinessMonthStart => "CBMS",
            Self::Quarterly => "Q",
            Self::BusinessQuarterEnd => "BQ",
            Self::QuarterStart => "QS",
            Self::BusinessQuarterStart => "BQS",
            Self::Yearly => "Y",
            Self::Annual => "A",
            Self::BusinessYearEnd => "BA",
            Self::YearStart => "AS",
            Self::BusinessYearStart => "BAS",
            Self::Hourly => "H",
            Self::Minutely => "T",
            Self::Secondly => "S",
            Self::Milliseconds => "L",
            Self::Microseconds => "U",
        }
    }

    /// Human-readable period name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BusinessDay => "business day",
            Self::CustomBusinessDay => "custom business day",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::BusinessMonthEnd => "business month end",
            Self::CustomBusinessMonthEnd => "custom business month end",
            Self::MonthStart => "month start",
            Self::BusinessMonthStart => "business month start",
            Self::CustomBusinessMonthStart => "custom business month start",
            Self::Quarterly => "quarterly",
            Self::BusinessQuarterEnd => "business quarter end",
            Self::QuarterStart => "quarter start",
            Self::BusinessQuarterStart => "business quarter start",
            Self::Yearly | Self::Annual => "yearly",
            Self::BusinessYearEnd => "business year end",
            Self::YearStart => "year start",
            Self::BusinessYearStart => "business year start",
            Self::Hourly => "hourly",
            Self::Minutely => "minutely",
            Self::Secondly => "secondly",
            Self::Milliseconds => "milliseconds",
            Self::Microseconds => "microseconds",
        }
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Returns the human-readable name for a period code, or `None` when the code
/// is unrecognized.
pub fn get_freq_name(period: &str) -> Option<&'static str> {
    Frequency::from_code(period).map(Frequency::name)
}
