use staff_portal::components::App;
use staff_portal::config::CONFIG;

fn main() {
    // Panic hook para ver los panics en la consola del navegador
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 {} starting ({})", CONFIG.app_name, CONFIG.environment);
    log::debug!("GraphQL endpoint: {}", CONFIG.graphql_url);

    yew::Renderer::<App>::new().render();
}
