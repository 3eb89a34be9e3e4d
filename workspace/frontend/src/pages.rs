pub mod finance;
pub mod finance_company;
pub mod home;
pub mod login;
pub mod marketing;
pub mod reports;
pub mod settings;
