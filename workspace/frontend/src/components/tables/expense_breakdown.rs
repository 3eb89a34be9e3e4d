use common::{format_currency, format_percent, ExpenseCategory};
use compute::expense_shares;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub categories: Vec<ExpenseCategory>,
    pub currency_symbol: AttrValue,
}

#[function_component(ExpenseBreakdownTable)]
pub fn expense_breakdown_table(props: &Props) -> Html {
    let shares = expense_shares(&props.categories);

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Operating Expense Breakdown"}</h2>
                <table class="table w-full">
                    <thead>
                        <tr>
                            <th>{"Category"}</th>
                            <th class="text-right">{"Amount"}</th>
                            <th class="text-right">{"Share"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for props.categories.iter().zip(shares.iter()).map(|(category, share)| html! {
                            <tr key={category.category.clone()}>
                                <td>{ category.category.clone() }</td>
                                <td class="text-right">{ format_currency(category.amount, &props.currency_symbol) }</td>
                                <td class="text-right">
                                    <div class="flex items-center justify-end gap-2">
                                        <progress class="progress progress-primary w-20" value={share.percent.to_string()} max="100"></progress>
                                        { format_percent(share.percent) }
                                    </div>
                                </td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
