use yew::prelude::*;

use super::navbar::Navbar;
use super::sidebar::Sidebar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    /// When the application was started, shown in the footer.
    pub started_at: AttrValue,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="drawer lg:drawer-open">
            <input id="main-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col min-h-screen bg-base-200 transition-all duration-300">
                <Navbar />
                <main class="flex-1 p-6 overflow-y-auto">
                    { for props.children.iter() }
                </main>
                <footer class="footer footer-center p-4 text-sm text-gray-500">
                    <span id="lastUpdated">{format!("Last updated: {}", props.started_at)}</span>
                </footer>
            </div>
            <Sidebar />
        </div>
    }
}
