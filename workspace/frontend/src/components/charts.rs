pub mod breakdown;
pub mod cash_flow;
pub mod plotly;
pub mod profit;
pub mod revenue_expenses;

pub use breakdown::BreakdownChart;
pub use cash_flow::CashFlowChart;
pub use profit::ProfitChart;
pub use revenue_expenses::RevenueExpensesChart;
