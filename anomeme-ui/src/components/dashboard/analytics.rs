use dioxus::prelude::*;

use crate::components::icons::BarChartIcon;
use crate::components::terminal_panel::{PanelStatus, TerminalPanel};
use crate::display_types::Analytics;
use crate::placement::Side;

#[component]
pub fn AnalyticsPanel(analytics: Analytics, help: String) -> Element {
    rsx! {
        TerminalPanel {
            title: "ANALYTICS".to_string(),
            help: Some(help),
            help_side: Side::Top,
            icon: rsx! {
                BarChartIcon { class: "w-4 h-4" }
            },
            status: PanelStatus::Idle,
            div { class: "space-y-6",
                div { class: "grid grid-cols-2 gap-4 text-center",
                    div {
                        div { class: "text-3xl font-bold success-text animate-count-up",
                            "{analytics.success_rate}"
                        }
                        div { class: "text-sm text-white/60 animate-stagger-1", "SUCCESS" }
                    }
                    div {
                        div { class: "text-3xl font-bold text-white animate-count-up animate-stagger-1",
                            "{analytics.avg_execution}"
                        }
                        div { class: "text-sm text-white/60 animate-stagger-2", "AVG EXEC" }
                    }
                }
                div { class: "space-y-3 text-sm",
                    for stat in analytics.stats {
                        div { key: "{stat.label}", class: "flex justify-between",
                            span { class: "text-white/60", "{stat.label}:" }
                            span { class: "text-white", "{stat.value}" }
                        }
                    }
                }
                div { class: "p-3 bg-yellow-500/10 border border-yellow-500/20 text-center",
                    div { class: "text-sm text-yellow-400 font-bold", "🏆 RANK #{analytics.rank}" }
                }
            }
        }
    }
}
