use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Period granularity the dashboard is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineView {
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl TimelineView {
    /// All views in selector order.
    pub const ALL: [TimelineView; 3] = [
        TimelineView::Monthly,
        TimelineView::Quarterly,
        TimelineView::Yearly,
    ];

    /// Lowercase identifier, also used for parsing.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineView::Monthly => "monthly",
            TimelineView::Quarterly => "quarterly",
            TimelineView::Yearly => "yearly",
        }
    }

    /// Button label in the timeline selector.
    pub fn label(&self) -> &'static str {
        match self {
            TimelineView::Monthly => "Monthly",
            TimelineView::Quarterly => "Quarterly",
            TimelineView::Yearly => "Yearly",
        }
    }

    /// Noun used for a single bucket, e.g. "Profit for the quarter".
    pub fn period_noun(&self) -> &'static str {
        match self {
            TimelineView::Monthly => "month",
            TimelineView::Quarterly => "quarter",
            TimelineView::Yearly => "year",
        }
    }
}

impl fmt::Display for TimelineView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimelineView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" | "month" => Ok(TimelineView::Monthly),
            "quarterly" | "quarter" => Ok(TimelineView::Quarterly),
            "yearly" | "year" => Ok(TimelineView::Yearly),
            other => Err(format!("unknown timeline view: {other}")),
        }
    }
}

/// The view selection state machine.
///
/// Three states, no pending state in between. Every transition is an explicit
/// call to [`ViewSelector::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewSelector {
    current: TimelineView,
}

impl ViewSelector {
    pub fn new(initial: TimelineView) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> TimelineView {
        self.current
    }

    /// Switches to `view`. Returns `true` when the selection actually changed.
    pub fn select(&mut self, view: TimelineView) -> bool {
        let changed = self.current != view;
        self.current = view;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_monthly() {
        assert_eq!(TimelineView::default(), TimelineView::Monthly);
        assert_eq!(ViewSelector::default().current(), TimelineView::Monthly);
    }

    #[test]
    fn test_parse_and_display() {
        for view in TimelineView::ALL {
            assert_eq!(view.to_string().parse::<TimelineView>().unwrap(), view);
        }
        assert_eq!("Quarter".parse::<TimelineView>().unwrap(), TimelineView::Quarterly);
        assert!("weekly".parse::<TimelineView>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&TimelineView::Yearly).unwrap();
        assert_eq!(json, "\"yearly\"");
        let back: TimelineView = serde_json::from_str("\"quarterly\"").unwrap();
        assert_eq!(back, TimelineView::Quarterly);
    }

    #[test]
    fn test_selector_transitions() {
        let mut selector = ViewSelector::default();
        assert!(selector.select(TimelineView::Quarterly));
        assert_eq!(selector.current(), TimelineView::Quarterly);
        assert!(!selector.select(TimelineView::Quarterly));
        assert!(selector.select(TimelineView::Yearly));
        assert!(selector.select(TimelineView::Monthly));
        assert_eq!(selector.current(), TimelineView::Monthly);
    }
}
