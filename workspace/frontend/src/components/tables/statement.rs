use common::{format_currency, BalanceSheet, ProfitLossStatement};
use compute::{balance_sheet_lines, profit_and_loss_lines, StatementLine};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct StatementProps {
    title: AttrValue,
    periods: Vec<String>,
    lines: Vec<StatementLine>,
    currency_symbol: AttrValue,
}

#[function_component(StatementTable)]
fn statement_table(props: &StatementProps) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{ props.title.clone() }</h2>
                if props.periods.is_empty() {
                    <p class="text-base-content/60">{"No statements for this view"}</p>
                } else {
                    <div class="overflow-x-auto">
                        <table class="table table-sm w-full">
                            <thead>
                                <tr>
                                    <th></th>
                                    { for props.periods.iter().map(|p| html! { <th class="text-right">{ p.clone() }</th> }) }
                                </tr>
                            </thead>
                            <tbody>
                                { for props.lines.iter().map(|line| html! {
                                    <tr class={classes!(line.subtotal.then_some("font-semibold bg-base-200"))}>
                                        <td>{ line.label }</td>
                                        { for line.values.iter().map(|value| html! {
                                            <td class={classes!("text-right", value.is_sign_negative().then_some("text-error"))}>
                                                { format_currency(*value, &props.currency_symbol) }
                                            </td>
                                        }) }
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProfitLossProps {
    pub statements: Vec<ProfitLossStatement>,
    pub currency_symbol: AttrValue,
}

#[function_component(ProfitLossTable)]
pub fn profit_loss_table(props: &ProfitLossProps) -> Html {
    let periods: Vec<String> = props.statements.iter().map(|s| s.period.clone()).collect();
    html! {
        <StatementTable
            title="Profit and Loss"
            {periods}
            lines={profit_and_loss_lines(&props.statements)}
            currency_symbol={props.currency_symbol.clone()}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct BalanceSheetProps {
    pub sheets: Vec<BalanceSheet>,
    pub currency_symbol: AttrValue,
}

#[function_component(BalanceSheetTable)]
pub fn balance_sheet_table(props: &BalanceSheetProps) -> Html {
    let periods: Vec<String> = props.sheets.iter().map(|s| s.period.clone()).collect();
    html! {
        <StatementTable
            title="Balance Sheet"
            {periods}
            lines={balance_sheet_lines(&props.sheets)}
            currency_symbol={props.currency_symbol.clone()}
        />
    }
}
