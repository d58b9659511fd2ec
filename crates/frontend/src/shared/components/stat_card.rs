use crate::shared::icons::icon;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

pub fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { symbol } => {
            let cents = (val.abs() * 100.0).round() as i64;
            let sign = if val < 0.0 && cents != 0 { "-" } else { "" };
            format!(
                "{}{}{}.{:02}",
                sign,
                symbol,
                format_thousands(cents / 100),
                cents % 100
            )
        }
        ValueFormat::Number { decimals } => {
            format!("{:.prec$}", val, prec = *decimals as usize)
        }
        ValueFormat::Percent { decimals } => {
            format!("{:.prec$}%", val, prec = *decimals as usize)
        }
        ValueFormat::Integer => format_thousands(val.round() as i64),
    }
}

fn format_thousands(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// "+20.1%" style change text with its CSS modifier
fn format_change(pct: f64) -> (String, &'static str) {
    if pct > 0.5 {
        (format!("+{:.1}%", pct), "stat-card__change stat-card__change--up")
    } else if pct < -0.5 {
        (format!("-{:.1}%", pct.abs()), "stat-card__change stat-card__change--down")
    } else {
        (format!("{:.1}%", pct.abs()), "stat-card__change stat-card__change--flat")
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    value: f64,
    format: ValueFormat,
    status: IndicatorStatus,
    /// Change % relative to previous period
    change_percent: Option<f64>,
    subtitle: Option<String>,
) -> impl IntoView {
    let status_class = match status {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    };

    let change_view = change_percent.map(|pct| {
        let (text, cls) = format_change(pct);
        view! { <span class=cls>{text}</span> }
    });

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {format_value(value, &format)}
                </div>
                <div class="stat-card__footer">
                    {change_view}
                    {subtitle.map(|s| view! { <span class="stat-card__subtitle">{s}</span> })}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd() -> ValueFormat {
        ValueFormat::Money {
            symbol: "$".to_string(),
        }
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_value(45_231.89, &usd()), "$45,231.89");
        assert_eq!(format_value(39.0, &usd()), "$39.00");
        assert_eq!(format_value(-1_250.5, &usd()), "-$1,250.50");
        assert_eq!(format_value(0.0, &usd()), "$0.00");
    }

    #[test]
    fn test_format_integer() {
        assert_eq!(format_value(2_350.0, &ValueFormat::Integer), "2,350");
        assert_eq!(format_value(573.0, &ValueFormat::Integer), "573");
        assert_eq!(format_value(1_234_567.0, &ValueFormat::Integer), "1,234,567");
        assert_eq!(format_value(-1_000.0, &ValueFormat::Integer), "-1,000");
    }

    #[test]
    fn test_format_integer_at_i64_limits() {
        assert_eq!(
            format_value(-1e19, &ValueFormat::Integer),
            "-9,223,372,036,854,775,808"
        );
        assert_eq!(
            format_value(1e19, &ValueFormat::Integer),
            "9,223,372,036,854,775,807"
        );
    }

    #[test]
    fn test_format_number_and_percent() {
        assert_eq!(format_value(7.456, &ValueFormat::Number { decimals: 2 }), "7.46");
        assert_eq!(format_value(12.5, &ValueFormat::Percent { decimals: 1 }), "12.5%");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(20.1).0, "+20.1%");
        assert_eq!(format_change(-4.3).0, "-4.3%");
        assert_eq!(format_change(0.2).0, "0.2%");
        assert!(format_change(-4.3).1.ends_with("--down"));
    }
}
