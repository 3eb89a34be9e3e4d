pub mod period_select;
pub mod timeline_selector;

pub use period_select::PeriodSelect;
pub use timeline_selector::TimelineSelector;
