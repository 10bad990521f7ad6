use dioxus::prelude::*;

#[component]
pub fn DashboardFooter() -> Element {
    rsx! {
        footer { class: "h-10 border-t border-white/10 bg-black/30 backdrop-blur-xl flex items-center justify-center",
            div { class: "flex items-center gap-2 text-xs text-white/60 font-mono animate-fade-in-up animate-stagger-3",
                span { "Powered by" }
                span { class: "text-red-500 font-semibold tracking-wide animate-subtle-glow", "ANOMA" }
                span { class: "text-white/40", "•" }
                span { class: "text-white/50", "Web3\u{2019}s Intent-Centric OS" }
            }
        }
    }
}
