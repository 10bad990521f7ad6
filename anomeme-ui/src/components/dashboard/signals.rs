//! Live social signal feed

use dioxus::prelude::*;

use crate::components::helpers::Tooltip;
use crate::components::icons::ZapIcon;
use crate::components::terminal_panel::{PanelStatus, TerminalPanel};
use crate::display_types::{SignalStatus, SocialSignal};
use crate::placement::Side;

/// Class set for one signal card, keyed by status
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SignalStyle {
    card: &'static str,
    author: &'static str,
    quote: &'static str,
    metric: &'static str,
    badge: &'static str,
}

fn signal_style(status: SignalStatus) -> SignalStyle {
    match status {
        SignalStatus::Triggered => SignalStyle {
            card: "p-4 bg-red-500/10 border-l-4 border-red-500 animate-slide-in-right animate-bg-pulse",
            author: "text-sm font-bold text-white animate-text-glow",
            quote: "text-sm text-white/90 mb-3 font-medium",
            metric: "success-text animate-count-up",
            badge: "text-red-500 font-bold animate-red-glow",
        },
        SignalStatus::Processing => SignalStyle {
            card: "p-4 bg-yellow-500/5 border-l-4 border-yellow-500/30 animate-yellow-pulse",
            author: "text-sm font-bold text-yellow-400 animate-data-flicker",
            quote: "text-sm text-white/80 mb-3",
            metric: "text-yellow-400 animate-count-up",
            badge: "text-yellow-400 font-mono animate-data-flicker",
        },
        SignalStatus::Scanning => SignalStyle {
            card: "p-4 bg-white/5 border-l-4 border-white/20",
            author: "text-sm font-bold text-white",
            quote: "text-sm text-white/70 mb-3",
            metric: "text-white/60",
            badge: "text-white/40 font-mono",
        },
        SignalStatus::Rejected => SignalStyle {
            card: "p-3 bg-red-500/5 border-l-4 border-red-500/30 opacity-60 animate-rejected-shake",
            author: "text-xs font-bold text-red-400 line-through",
            quote: "text-xs text-white/50 mb-2 line-through opacity-75",
            metric: "text-red-400",
            badge: "text-red-400 font-bold",
        },
    }
}

#[component]
pub fn SignalsPanel(
    signals: Vec<SocialSignal>,
    help: String,
    create_intent_help: String,
    on_create_intent: EventHandler<()>,
) -> Element {
    rsx! {
        TerminalPanel {
            title: "LIVE SIGNALS".to_string(),
            help: Some(help),
            help_side: Side::Bottom,
            icon: rsx! {
                ZapIcon { class: "w-4 h-4" }
            },
            status: PanelStatus::Active,
            is_live: true,
            div { class: "space-y-3",
                for (i , signal) in signals.into_iter().enumerate() {
                    SignalCard { key: "{i}", signal }
                }
            }
            div { class: "mt-8 animate-fade-in-up animate-stagger-3",
                Tooltip {
                    content: create_intent_help,
                    side: Side::Top,
                    class: Some("w-full".to_string()),
                    button {
                        r#type: "button",
                        class: "w-full p-4 bg-red-500/20 border border-red-500/40 hover:bg-red-500/30 transition-all text-white font-bold tracking-wide animate-bg-pulse",
                        onclick: move |_| on_create_intent.call(()),
                        "+ CREATE NEW INTENT"
                    }
                }
            }
        }
    }
}

#[component]
fn SignalCard(signal: SocialSignal) -> Element {
    let style = signal_style(signal.status);

    rsx! {
        div { class: "{style.card} backdrop-blur-sm",
            div { class: "flex items-center justify-between mb-3",
                span { class: style.author, "{signal.author}" }
                span { class: "text-xs text-white/50 font-mono animate-data-flicker", "{signal.age}" }
            }
            p { class: style.quote, "\u{201c}{signal.quote}\u{201d}" }
            div { class: "flex items-center justify-between text-xs",
                span { class: style.metric, "{signal.metric}" }
                div { class: "flex items-center gap-2",
                    if signal.status == SignalStatus::Processing {
                        div { class: "w-3 h-3 border-2 border-yellow-400 border-t-transparent rounded-full animate-processing-spin" }
                    }
                    span { class: style.badge, "{signal.status.label()}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_status_has_distinct_card() {
        let statuses = [
            SignalStatus::Triggered,
            SignalStatus::Processing,
            SignalStatus::Scanning,
            SignalStatus::Rejected,
        ];
        for (i, a) in statuses.iter().enumerate() {
            for b in &statuses[i + 1..] {
                assert_ne!(signal_style(*a).card, signal_style(*b).card);
            }
        }
    }

    #[test]
    fn test_rejected_is_struck_through() {
        let style = signal_style(SignalStatus::Rejected);
        assert!(style.author.contains("line-through"));
        assert!(style.quote.contains("line-through"));
    }
}
