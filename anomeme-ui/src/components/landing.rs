//! Landing screen shown before the session connects

use dioxus::prelude::*;

use crate::components::icons::{ActivityIcon, ShieldIcon, ZapIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};

/// Readiness lights under the connect button
const STATUS_INDICATORS: &[(&str, &str)] = &[
    ("Protocol Ready", ""),
    ("MEV Protection", "animation-delay-200"),
    ("Intent Engine", "animation-delay-400"),
];

/// Full-screen landing page with the connect call-to-action
#[component]
pub fn LandingView(on_connect: EventHandler<()>) -> Element {
    rsx! {
        div { class: "h-screen w-screen bg-black flex items-center justify-center relative overflow-hidden",
            BackgroundLines {}

            div { class: "relative z-10 text-center space-y-12 animate-fade-in-up",
                div { class: "space-y-6",
                    div { class: "text-6xl font-black anoma-text tracking-wider animate-subtle-glow",
                        "ANOMEME"
                    }
                    div { class: "text-lg text-white/70 font-mono font-light tracking-wide animate-stagger-1",
                        "SOCIAL INTENT TERMINAL"
                    }
                }

                div { class: "flex items-center justify-center gap-12 text-white/60 animate-stagger-2",
                    div { class: "flex items-center gap-2",
                        ZapIcon { class: "w-4 h-4 text-red-500" }
                        span { class: "text-sm font-mono", "Live Signals" }
                    }
                    div { class: "flex items-center gap-2",
                        ShieldIcon { class: "w-4 h-4 text-green-500" }
                        span { class: "text-sm font-mono", "MEV Shield" }
                    }
                    div { class: "flex items-center gap-2",
                        ActivityIcon { class: "w-4 h-4 text-blue-500" }
                        span { class: "text-sm font-mono", "Intent Engine" }
                    }
                }

                div { class: "space-y-4 animate-stagger-3",
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Large,
                        class: Some("group relative border-2 animate-bg-pulse".to_string()),
                        onclick: move |_| on_connect.call(()),
                        div { class: "w-3 h-3 bg-red-500 rounded-full animate-pulse" }
                        span { "CONNECT TO ANOMA" }
                        div { class: "w-3 h-3 bg-red-500 rounded-full animate-pulse animation-delay-500" }
                    }
                    p { class: "text-white/40 text-sm font-mono animate-data-flicker",
                        "Experience the future of memecoin trading"
                    }
                }

                div { class: "flex items-center justify-center gap-8 animate-stagger-4",
                    for (label , delay) in STATUS_INDICATORS {
                        div { class: "flex items-center gap-2",
                            div { class: "w-2 h-2 bg-green-500 rounded-full animate-status-blink {delay}" }
                            span { class: "text-xs text-white/50 font-mono", "{label}" }
                        }
                    }
                }
            }

            CornerDecorations {}

            div { class: "absolute bottom-6 left-1/2 -translate-x-1/2",
                div { class: "flex items-center gap-2 text-white/30 text-xs font-mono",
                    span { "Powered by" }
                    span { class: "text-red-500 font-semibold animate-subtle-glow", "ANOMA" }
                }
            }
        }
    }
}

#[component]
fn BackgroundLines() -> Element {
    rsx! {
        div { class: "absolute inset-0 bg-gradient-to-br from-black via-gray-900 to-black" }
        div { class: "absolute inset-0",
            div { class: "absolute top-20 left-20 w-px h-40 bg-red-500/20 animate-pulse" }
            div { class: "absolute top-40 right-32 w-40 h-px bg-red-500/20 animate-pulse animation-delay-500" }
            div { class: "absolute bottom-32 left-1/3 w-px h-32 bg-white/10 animate-pulse animation-delay-1000" }
            div { class: "absolute bottom-20 right-20 w-32 h-px bg-white/10 animate-pulse animation-delay-1500" }
        }
    }
}

#[component]
fn CornerDecorations() -> Element {
    rsx! {
        div { class: "absolute top-8 left-8 flex flex-col gap-2",
            div { class: "w-8 h-px bg-red-500/30" }
            div { class: "w-px h-8 bg-red-500/30" }
        }
        div { class: "absolute top-8 right-8 flex flex-col gap-2",
            div { class: "w-8 h-px bg-red-500/30 ml-auto" }
            div { class: "w-px h-8 bg-red-500/30 ml-auto" }
        }
        div { class: "absolute bottom-8 left-8 flex flex-col gap-2",
            div { class: "w-px h-8 bg-white/20" }
            div { class: "w-8 h-px bg-white/20" }
        }
        div { class: "absolute bottom-8 right-8 flex flex-col gap-2",
            div { class: "w-px h-8 bg-white/20 ml-auto" }
            div { class: "w-8 h-px bg-white/20" }
        }
    }
}
