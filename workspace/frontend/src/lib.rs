use yew::prelude::*;

mod components;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod settings;

use components::forecast::Forecast;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow-sm">
                <span class="text-xl font-semibold px-4">{"Grid Temperature Forecast"}</span>
            </div>
            <main class="container mx-auto max-w-5xl p-4">
                <Forecast />
            </main>
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Tempcast Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
