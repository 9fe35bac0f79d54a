// crates/certilife-app/src/lib.rs
// CertiLife PCO landing page - Leptos WASM frontend (CSR)

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use wasm_bindgen::prelude::*;

mod browser;
mod components;
mod pages;
mod state;

pub use components::*;
pub use pages::*;
pub use state::{provide_presentation_context, use_presentation, Presentation};

// ============================================================================
// WASM Entry Point
// ============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    // Set up better panic messages
    console_error_panic_hook::set_once();

    // Initialize logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("CertiLife landing page starting...");

    // Mount the app
    leptos::mount::mount_to_body(App);
}

// ============================================================================
// App Root
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_presentation_context();

    view! {
        <Title text="CertiLife PCO | 학술대회 디지털 전환 솔루션"/>
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=LandingPage/>
            </Routes>
        </Router>
    }
}
