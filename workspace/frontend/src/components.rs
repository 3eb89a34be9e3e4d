pub mod cards;
pub mod charts;
pub mod filters;
pub mod layout;
pub mod tables;
