pub mod expense_breakdown;
pub mod financial_performance;
pub mod statement;

pub use expense_breakdown::ExpenseBreakdownTable;
pub use financial_performance::FinancialPerformanceTable;
pub use statement::{BalanceSheetTable, ProfitLossTable};
