pub mod breakdown;
pub mod companies;
pub mod statements;
pub mod summary;
pub mod validate;

pub use breakdown::breakdown;
pub use companies::companies;
pub use statements::statements;
pub use summary::summary;
pub use validate::validate;
