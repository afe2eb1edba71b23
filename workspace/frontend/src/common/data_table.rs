use common::table::{Badge, FillBar, TableContent};
use yew::prelude::*;

#[derive(Properties)]
pub struct DataTableProps<R: Clone + PartialEq + 'static> {
    pub id: AttrValue,
    pub headers: Vec<&'static str>,
    /// `None` until the first successful load.
    pub content: Option<TableContent<R>>,
    pub render_row: Callback<R, Html>,
}

impl<R: Clone + PartialEq + 'static> PartialEq for DataTableProps<R> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.headers == other.headers && self.content == other.content
    }
}

/// Table whose body is rebuilt from the latest load.
#[function_component(DataTable)]
pub fn data_table<R>(props: &DataTableProps<R>) -> Html
where
    R: Clone + PartialEq + 'static,
{
    log::trace!("Rendering table #{}", props.id);

    let body = match &props.content {
        None => html! {},
        Some(TableContent::Placeholder(text)) => html! {
            <tr>
                <td colspan={props.headers.len().to_string()} class="text-center text-gray-500">{*text}</td>
            </tr>
        },
        Some(TableContent::Rows(rows)) => html! {
            <>{for rows.iter().map(|row| props.render_row.emit(row.clone()))}</>
        },
    };

    html! {
        <div class="overflow-x-auto">
            <table id={props.id.clone()} class="table table-zebra w-full">
                <thead>
                    <tr>
                        {for props.headers.iter().map(|header| html! { <th>{*header}</th> })}
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}

pub fn status_badge(badge: &Badge) -> Html {
    html! { <span class={classes!("status-badge", badge.class)}>{&badge.label}</span> }
}

pub fn fill_bar(bar: &FillBar) -> Html {
    html! {
        <div class="flex items-center gap-2">
            <div class="fill-bar">
                <div
                    class="fill-bar-level"
                    style={format!("width: {}; background-color: {};", bar.width, bar.color)}
                ></div>
            </div>
            <span class="text-sm">{&bar.label}</span>
        </div>
    }
}
