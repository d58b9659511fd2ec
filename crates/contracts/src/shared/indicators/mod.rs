use serde::{Deserialize, Serialize};

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    /// `symbol` is printed before the amount
    Money { symbol: String },
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

impl IndicatorStatus {
    /// Status implied by a period-over-period change; moves within
    /// ±0.5% count as flat.
    pub fn from_change(change_percent: Option<f64>) -> Self {
        match change_percent {
            Some(pct) if pct > 0.5 => IndicatorStatus::Good,
            Some(pct) if pct < -0.5 => IndicatorStatus::Bad,
            _ => IndicatorStatus::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_change() {
        assert_eq!(IndicatorStatus::from_change(Some(20.1)), IndicatorStatus::Good);
        assert_eq!(IndicatorStatus::from_change(Some(-3.0)), IndicatorStatus::Bad);
        assert_eq!(IndicatorStatus::from_change(Some(0.4)), IndicatorStatus::Neutral);
        assert_eq!(IndicatorStatus::from_change(None), IndicatorStatus::Neutral);
    }
}
