//! Active intent execution status

use dioxus::prelude::*;

use crate::components::helpers::Tooltip;
use crate::components::icons::ActivityIcon;
use crate::components::terminal_panel::{PanelStatus, TerminalPanel};
use crate::display_types::Execution;
use crate::placement::Side;

#[component]
pub fn ExecutionPanel(
    execution: Execution,
    help: String,
    active_intent_help: String,
    mev_shield_help: String,
) -> Element {
    let progress = execution.progress_percent.min(100);
    let shield = if execution.mev_shield_active {
        "ACTIVE"
    } else {
        "OFF"
    };

    rsx! {
        TerminalPanel {
            title: "EXECUTION".to_string(),
            help: Some(help),
            help_side: Side::Top,
            icon: rsx! {
                ActivityIcon { class: "w-4 h-4" }
            },
            status: PanelStatus::Active,
            div { class: "space-y-4",
                div { class: "p-4 bg-green-500/10 border border-green-500/20",
                    div { class: "flex items-center justify-between mb-3",
                        Tooltip { content: active_intent_help, side: Side::Top,
                            span { class: "text-sm font-bold text-white", "{execution.intent_label}" }
                        }
                        span { class: "text-xs success-text font-bold", "{execution.status}" }
                    }
                    Tooltip { content: mev_shield_help, side: Side::Bottom,
                        div { class: "text-xs text-white/70 mb-3 animate-data-flicker",
                            "🛡️ MEV SHIELD: {shield}"
                        }
                    }
                    div { class: "w-full bg-black/20 h-3 overflow-hidden",
                        div {
                            class: "bg-green-500 h-3 animate-progress",
                            style: "width: {progress}%;",
                        }
                    }
                }
                div { class: "space-y-3 text-sm",
                    div { class: "flex justify-between",
                        span { class: "text-white/60", "Gas Used:" }
                        span { class: "text-white", "{execution.gas_used}" }
                    }
                    div { class: "flex justify-between",
                        span { class: "text-white/60", "Slippage:" }
                        span { class: "success-text", "{execution.slippage}" }
                    }
                    div { class: "flex justify-between",
                        span { class: "text-white/60", "Execution Time:" }
                        span { class: "text-white", "{execution.execution_time}" }
                    }
                }
            }
        }
    }
}
