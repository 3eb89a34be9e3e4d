pub mod metrics_card;
pub mod statistic_header;

pub use metrics_card::MetricsCard;
pub use statistic_header::StatisticHeader;
