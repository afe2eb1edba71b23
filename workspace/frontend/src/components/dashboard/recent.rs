use common::table::RecentForecastItem;
use common::TableContent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub content: Option<TableContent<RecentForecastItem>>,
}

/// Forecasts running out within the week.
#[function_component(RecentForecasts)]
pub fn recent_forecasts(props: &Props) -> Html {
    let body = match &props.content {
        None => html! {},
        Some(TableContent::Placeholder(text)) => html! {
            <p class="text-center text-gray-500 py-4">{*text}</p>
        },
        Some(TableContent::Rows(items)) => html! {
            <ul class="divide-y divide-base-300">
                {for items.iter().map(|item| html! {
                    <li class="forecast-item py-3">
                        <div class="font-semibold">{&item.heading}</div>
                        <div class="text-sm">
                            <span class="text-error font-medium">{format!("{} days remaining", item.days_remaining)}</span>
                            {" · "}
                            <span class="text-gray-500">{format!("Next refill: {}", item.next_refill)}</span>
                        </div>
                    </li>
                })}
            </ul>
        },
    };

    html! { <div id="recentForecasts">{body}</div> }
}
