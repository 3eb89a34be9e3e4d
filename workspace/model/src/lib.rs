//! Period data store: the static financial collections behind the dashboard,
//! keyed by period granularity.

pub mod error;
pub mod fixtures;
pub mod store;

pub use error::{ModelError, Result};
pub use store::{PeriodDataStore, ViewCollections};
