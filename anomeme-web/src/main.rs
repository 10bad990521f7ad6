//! ANOMEME web terminal
//!
//! Renders the landing page and the social intent terminal from fixture data.

mod demo_data;
mod pages;

use std::rc::Rc;

use anomeme_ui::stores::UiState;
use anomeme_ui::TooltipConfig;
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;
use pages::{Landing, Terminal};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/terminal")]
    Terminal {},
}

#[component]
pub fn App() -> Element {
    let ui = use_store(UiState::default);
    use_context_provider(|| ui);

    let data = use_hook(|| Rc::new(demo_data::load()));
    let tooltip = match &*data {
        Ok(data) => data.tooltip,
        Err(_) => TooltipConfig::default(),
    };
    use_context_provider(|| tooltip);
    use_context_provider(|| data);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen bg-black", Router::<Route> {} }
    }
}

fn configure_logging() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    // Only fails when a subscriber is already installed
    let _ = dioxus::logger::init(level);
}

fn main() {
    configure_logging();
    dioxus::launch(App);
}
