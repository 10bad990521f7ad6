//! Error display component

use dioxus::prelude::*;

/// Terminal-styled error box
#[component]
pub fn ErrorDisplay(title: String, message: String) -> Element {
    rsx! {
        div { class: "h-screen w-screen bg-black flex items-center justify-center p-8",
            div { class: "terminal-panel max-w-xl w-full bg-red-500/10 border border-red-500/40 px-6 py-5 font-mono",
                div { class: "flex items-center gap-2 mb-3",
                    div { class: "w-2 h-2 bg-red-500 rounded-full animate-pulse" }
                    h2 { class: "text-sm font-bold text-red-400 tracking-wider", "{title}" }
                }
                p { class: "text-sm text-white/80 break-words", "{message}" }
            }
        }
    }
}
