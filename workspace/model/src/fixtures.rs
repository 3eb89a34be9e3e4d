//! Hard-coded datasets shown by the dashboard.

pub mod banking;
pub mod performance;
