//! Risk matrix: named checks and the overall score bar

use dioxus::prelude::*;

use crate::components::helpers::Tooltip;
use crate::components::icons::ShieldIcon;
use crate::components::terminal_panel::{PanelStatus, TerminalPanel};
use crate::display_types::{RiskAssessment, RiskLevel};
use crate::placement::Side;

/// Panel status follows the risk level
fn panel_status(level: RiskLevel) -> PanelStatus {
    match level {
        RiskLevel::Low => PanelStatus::Active,
        RiskLevel::Medium => PanelStatus::Warning,
        RiskLevel::High => PanelStatus::Error,
    }
}

fn check_light_class(passed: bool) -> &'static str {
    if passed {
        "bg-green-500 glow-green"
    } else {
        "bg-red-500 glow-red"
    }
}

#[component]
pub fn RiskPanel(risk: RiskAssessment, help: String, score_help: String) -> Element {
    let level = risk.level();
    let score = risk.score.min(100);

    rsx! {
        TerminalPanel {
            title: "RISK MATRIX".to_string(),
            help: Some(help),
            help_side: Side::Top,
            icon: rsx! {
                ShieldIcon { class: "w-4 h-4" }
            },
            status: panel_status(level),
            div { class: "space-y-6",
                div { class: "grid grid-cols-2 gap-4",
                    for check in risk.checks {
                        div { key: "{check.name}", class: "flex items-center gap-3",
                            div { class: "w-4 h-4 {check_light_class(check.passed)}" }
                            span { class: "text-white font-semibold", "{check.name}" }
                        }
                    }
                }
                div { class: "p-4 bg-white/5 border border-white/10",
                    Tooltip { content: score_help, side: Side::Top,
                        div { class: "text-lg font-bold mb-3 {level.text_class()}",
                            "RISK SCORE: {score}/100"
                        }
                    }
                    div { class: "w-full bg-black/20 h-4",
                        div {
                            class: "h-4 {level.bar_class()}",
                            style: "width: {score}%;",
                        }
                    }
                    div { class: "text-sm mt-2 font-semibold {level.text_class()}", "{level.label()}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_status_tracks_level() {
        assert_eq!(panel_status(RiskLevel::from_score(15)), PanelStatus::Active);
        assert_eq!(panel_status(RiskLevel::from_score(50)), PanelStatus::Warning);
        assert_eq!(panel_status(RiskLevel::from_score(95)), PanelStatus::Error);
    }
}
