use common::{format_currency, format_percent, PerformanceTable};
use rust_decimal::Decimal;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub table: PerformanceTable,
    pub currency_symbol: AttrValue,
}

fn amount_class(value: Decimal) -> Classes {
    classes!("text-right", value.is_sign_negative().then_some("text-error"))
}

#[function_component(FinancialPerformanceTable)]
pub fn financial_performance_table(props: &Props) -> Html {
    let money = |value: Decimal| format_currency(value, &props.currency_symbol);
    let totals = &props.table.totals;

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Financial Performance"}</h2>
                <div class="overflow-x-auto">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>{"Period"}</th>
                                <th class="text-right">{"Revenue"}</th>
                                <th class="text-right">{"COGS"}</th>
                                <th class="text-right">{"Gross Profit"}</th>
                                <th class="text-right">{"Operating Expenses"}</th>
                                <th class="text-right">{"Net Income"}</th>
                                <th class="text-right">{"Margin"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for props.table.rows.iter().map(|row| html! {
                                <tr key={row.period.clone()}>
                                    <td class="font-medium">{ row.period.clone() }</td>
                                    <td class="text-right">{ money(row.revenue) }</td>
                                    <td class="text-right">{ money(row.cogs) }</td>
                                    <td class={amount_class(row.gross_profit)}>{ money(row.gross_profit) }</td>
                                    <td class="text-right">{ money(row.operating_expenses) }</td>
                                    <td class={amount_class(row.net_income)}>{ money(row.net_income) }</td>
                                    <td class={amount_class(row.profit_margin_pct)}>{ format_percent(row.profit_margin_pct) }</td>
                                </tr>
                            }) }
                        </tbody>
                        <tfoot>
                            <tr class="font-bold">
                                <td>{"Total"}</td>
                                <td class="text-right">{ money(totals.revenue) }</td>
                                <td class="text-right">{ money(totals.cogs) }</td>
                                <td class={amount_class(totals.gross_profit)}>{ money(totals.gross_profit) }</td>
                                <td class="text-right">{ money(totals.operating_expenses) }</td>
                                <td class={amount_class(totals.net_income)}>{ money(totals.net_income) }</td>
                                <td class={amount_class(totals.profit_margin_pct)}>{ format_percent(totals.profit_margin_pct) }</td>
                            </tr>
                        </tfoot>
                    </table>
                </div>
            </div>
        </div>
    }
}
