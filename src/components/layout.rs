use chrono::Datelike;
use yew::prelude::*;
use crate::config::CONFIG;

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn footer_text(year: i32, app_name: &str) -> String {
    format!("© {} {}", year, app_name)
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_else(current_year)]
    pub year: i32,
}

/// Cabecera y pie fijos; los hijos ocupan el espacio restante
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="layout">
            <header class="app-header">
                <h1>{CONFIG.app_name.clone()}</h1>
            </header>
            <main class="app-main">
                {props.children.clone()}
            </main>
            <footer class="app-footer">
                <p>{footer_text(props.year, &CONFIG.app_name)}</p>
            </footer>
        </div>
    }
}
