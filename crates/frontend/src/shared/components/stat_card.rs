use leptos::prelude::*;

/// How a stat card renders its number.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Integer,
    Money,
}

fn format_value(val: f64, fmt: ValueFormat) -> String {
    match fmt {
        ValueFormat::Integer => format_thousands(val as i64),
        ValueFormat::Money => {
            let cents = (val.abs() * 100.0).round() as i64;
            let sign = if val < 0.0 { "-" } else { "" };
            format!(
                "{}${}.{:02}",
                sign,
                format_thousands(cents / 100),
                cents % 100
            )
        }
    }
}

fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
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

/// Dashboard stat card: label, icon and a single number.
///
/// `value` of `None` means the stat has not arrived (or failed) and renders
/// as a dash rather than fake data.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Emoji/icon shown next to the value
    icon: String,
    /// Primary numeric value (None = loading/error)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: ValueFormat,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "—".to_string(),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-4200), "-4,200");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_value(29.97, ValueFormat::Money), "$29.97");
        assert_eq!(format_value(1250.5, ValueFormat::Money), "$1,250.50");
        assert_eq!(format_value(-3.0, ValueFormat::Money), "-$3.00");
    }

    #[test]
    fn test_format_integer() {
        assert_eq!(format_value(42.0, ValueFormat::Integer), "42");
    }
}
