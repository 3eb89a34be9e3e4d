use common::format_signed_percent;
use compute::PeriodChange;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    pub value: AttrValue,
    pub icon: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    /// Change against the previous period, drawn as an arrow badge
    #[prop_or_default]
    pub trend: Option<PeriodChange>,
    /// Set for series where a rise is bad news, such as expenses
    #[prop_or_default]
    pub inverted: bool,
}

/// CSS class and icon for a trend badge.
pub fn trend_style(change: &PeriodChange, inverted: bool) -> (&'static str, &'static str) {
    let icon = if change.is_increase() {
        "fa-arrow-trend-up"
    } else if change.pct.is_zero() {
        "fa-minus"
    } else {
        "fa-arrow-trend-down"
    };
    let good = change.is_increase() != inverted;
    let class = if change.pct.is_zero() {
        "text-base-content/60"
    } else if good {
        "text-success"
    } else {
        "text-error"
    };
    (class, icon)
}

#[function_component(StatisticHeader)]
pub fn statistic_header(props: &Props) -> Html {
    let trend = props.trend.as_ref().map(|change| {
        let (class, icon) = trend_style(change, props.inverted);
        html! {
            <div class={classes!("stat-desc", "flex", "items-center", "gap-1", class)}>
                <i class={classes!("fas", icon)}></i>
                <span>{ format!("{} vs {}", format_signed_percent(change.pct), change.previous_period) }</span>
            </div>
        }
    });

    html! {
        <div class="stats shadow bg-base-100">
            <div class="stat">
                <div class="stat-figure text-primary text-2xl">
                    <i class={classes!("fas", props.icon.to_string())}></i>
                </div>
                <div class="stat-title">{ props.title.clone() }</div>
                <div class="stat-value text-2xl">{ props.value.clone() }</div>
                if let Some(description) = &props.description {
                    <div class="stat-desc">{ description.clone() }</div>
                }
                { for trend }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn change(pct: rust_decimal::Decimal) -> PeriodChange {
        PeriodChange {
            period: "December".to_string(),
            previous_period: "November".to_string(),
            pct,
        }
    }

    #[test]
    fn test_trend_colours() {
        assert_eq!(trend_style(&change(dec!(6.3)), false), ("text-success", "fa-arrow-trend-up"));
        assert_eq!(trend_style(&change(dec!(-2.0)), false), ("text-error", "fa-arrow-trend-down"));
        assert_eq!(trend_style(&change(dec!(6.3)), true), ("text-error", "fa-arrow-trend-up"));
        assert_eq!(trend_style(&change(dec!(0.0)), false), ("text-base-content/60", "fa-minus"));
    }
}
