//! Terminal dashboard view
//!
//! Pure, props-based components. The page loads a `TerminalSnapshot` and owns
//! the modal state; this view only reports button clicks.

mod analytics;
mod execution;
mod footer;
mod header;
mod portfolio;
mod profile;
mod risk;
mod signals;

use dioxus::prelude::*;

use crate::display_types::TerminalSnapshot;

pub use analytics::AnalyticsPanel;
pub use execution::ExecutionPanel;
pub use footer::DashboardFooter;
pub use header::DashboardHeader;
pub use portfolio::PortfolioPanel;
pub use profile::ProfilePanel;
pub use risk::RiskPanel;
pub use signals::SignalsPanel;

/// Three-column terminal layout between the header and footer
#[component]
pub fn DashboardView(
    snapshot: TerminalSnapshot,
    on_create_intent: EventHandler<()>,
    on_open_settings: EventHandler<()>,
) -> Element {
    let TerminalSnapshot {
        profile,
        signals,
        portfolio,
        execution,
        risk,
        analytics,
        help,
    } = snapshot;

    rsx! {
        div { class: "h-screen flex flex-col bg-black text-white",
            DashboardHeader { profile: profile.clone(), help: help.clone() }

            main { class: "flex-1 flex overflow-hidden",
                div { class: "w-80 border-r border-white/10 flex flex-col",
                    SignalsPanel {
                        signals,
                        help: help.signals.clone(),
                        create_intent_help: help.create_intent.clone(),
                        on_create_intent,
                    }
                }

                div { class: "flex-1 flex flex-col",
                    div { class: "h-1/2 flex",
                        div { class: "flex-1 border-r border-white/10",
                            PortfolioPanel { portfolio, help: help.portfolio.clone() }
                        }
                        div { class: "w-80",
                            ExecutionPanel {
                                execution,
                                help: help.execution.clone(),
                                active_intent_help: help.active_intent.clone(),
                                mev_shield_help: help.mev_shield.clone(),
                            }
                        }
                    }
                    div { class: "h-1/2 flex",
                        div { class: "flex-1 border-r border-white/10",
                            RiskPanel {
                                risk,
                                help: help.risk.clone(),
                                score_help: help.risk_score.clone(),
                            }
                        }
                        div { class: "w-80",
                            AnalyticsPanel { analytics, help: help.analytics.clone() }
                        }
                    }
                }

                div { class: "w-80 border-l border-white/10",
                    ProfilePanel {
                        profile,
                        settings_help: help.settings.clone(),
                        on_open_settings,
                    }
                }
            }

            DashboardFooter {}
        }
    }
}
