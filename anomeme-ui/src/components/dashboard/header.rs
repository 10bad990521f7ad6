//! Dashboard header: brand, session badge, XP and system status lights

use dioxus::prelude::*;

use crate::components::helpers::Tooltip;
use crate::display_types::{HelpText, UserProfile};
use crate::placement::Side;

/// Session badge shows sooner than the other header tooltips
const SESSION_TOOLTIP_DELAY_MS: u64 = 200;

#[component]
pub fn DashboardHeader(profile: UserProfile, help: HelpText) -> Element {
    rsx! {
        header { class: "h-20 border-b border-white/10 bg-black/50 backdrop-blur-xl animate-fade-in-up",
            div { class: "h-full px-8 flex items-center justify-between",
                div { class: "flex items-center gap-6 animate-slide-in-left",
                    Tooltip { content: help.brand, side: Side::Bottom,
                        div { class: "text-3xl font-black anoma-text tracking-wider cursor-pointer animate-subtle-glow",
                            "ANOMEME"
                        }
                    }
                    div { class: "h-8 w-px bg-white/20 animate-stagger-1" }
                    Tooltip { content: help.tagline, side: Side::Bottom,
                        div { class: "text-lg text-white/70 font-mono font-light tracking-wide animate-stagger-2",
                            "SOCIAL INTENT TERMINAL"
                        }
                    }
                }

                div { class: "flex items-center gap-6",
                    Tooltip {
                        content: help.session,
                        side: Side::Bottom,
                        delay_ms: Some(SESSION_TOOLTIP_DELAY_MS),
                        div { class: "flex items-center gap-3 px-4 py-2 bg-white/5 border border-white/10 backdrop-blur-sm",
                            div { class: "w-2 h-2 bg-red-500 rounded-full animate-pulse" }
                            span { class: "text-sm text-white/90 font-mono", "{profile.handle}" }
                        }
                    }
                    Tooltip { content: help.xp, side: Side::Bottom,
                        div { class: "flex items-center gap-2 px-4 py-2 bg-red-500/10 border border-red-500/20 backdrop-blur-sm",
                            span { class: "text-sm accent-text font-mono font-semibold", "⚡ {profile.xp} XP" }
                        }
                    }
                    Tooltip { content: help.system_status, side: Side::Bottom,
                        div { class: "flex items-center gap-1",
                            for stagger in ["", "animate-stagger-1", "animate-stagger-2"] {
                                div { class: "w-3 h-3 bg-green-500 status-active animate-status-blink {stagger}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
