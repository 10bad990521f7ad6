//! Terminal-style panel chrome: titled header, status badge, clock status bar

use dioxus::prelude::*;

use crate::components::helpers::Tooltip;
use crate::placement::Side;
use crate::wasm_utils::sleep_ms;

/// Shown before the first clock tick
const CLOCK_PLACEHOLDER: &str = "--:--:--";

/// Panel health indicator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelStatus {
    Active,
    Warning,
    Error,
    #[default]
    Idle,
}

impl PanelStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PanelStatus::Active => "active",
            PanelStatus::Warning => "warning",
            PanelStatus::Error => "error",
            PanelStatus::Idle => "idle",
        }
    }

    /// Icon color in the header
    pub fn text_class(&self) -> &'static str {
        match self {
            PanelStatus::Active => "text-green-400 glow-green",
            PanelStatus::Warning => "text-orange-400 glow-orange",
            PanelStatus::Error => "text-red-400 glow-red",
            PanelStatus::Idle => "text-gray-400",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            PanelStatus::Active => "bg-green-500/20 text-green-400 border-green-500/50",
            PanelStatus::Warning => "bg-orange-500/20 text-orange-400 border-orange-500/50",
            PanelStatus::Error => "bg-red-500/20 text-red-400 border-red-500/50",
            PanelStatus::Idle => "bg-gray-500/20 text-gray-400 border-gray-500/50",
        }
    }

    pub fn dot_class(&self) -> &'static str {
        match self {
            PanelStatus::Active => "bg-green-500 pulse-glow",
            PanelStatus::Warning => "bg-orange-500 pulse-glow",
            PanelStatus::Error => "bg-red-500 pulse-glow",
            PanelStatus::Idle => "bg-gray-500",
        }
    }
}

fn local_clock() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Bordered panel with a header, scrolling content and a ticking status bar
#[component]
pub fn TerminalPanel(
    title: String,
    /// Tooltip on the title
    #[props(default)]
    help: Option<String>,
    #[props(default)] help_side: Side,
    #[props(default)] icon: Option<Element>,
    #[props(default)] status: PanelStatus,
    #[props(default)] is_live: bool,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let mut clock = use_signal(|| None::<String>);

    // The task lives in this component's scope and stops on unmount
    use_hook(move || {
        spawn(async move {
            loop {
                clock.set(Some(local_clock()));
                sleep_ms(1000).await;
            }
        })
    });

    let clock_text = clock().unwrap_or_else(|| CLOCK_PLACEHOLDER.to_string());
    let extra_class = class.unwrap_or_default();
    let status_upper = status.label().to_uppercase();

    rsx! {
        div { class: "terminal-panel h-full flex flex-col relative scan-lines border border-gray-700/50 bg-black/60 {extra_class}",
            div { class: "flex items-center justify-between p-3 border-b border-gray-700/50",
                div { class: "flex items-center gap-2",
                    if let Some(icon) = icon {
                        div { class: "w-4 h-4 {status.text_class()}", {icon} }
                    }
                    if let Some(help) = help {
                        Tooltip { content: help, side: help_side,
                            h3 { class: "text-sm font-bold text-gray-300 terminal-text", "{title}" }
                        }
                    } else {
                        h3 { class: "text-sm font-bold text-gray-300 terminal-text", "{title}" }
                    }
                }
                div { class: "flex items-center gap-2",
                    if is_live {
                        div { class: "flex items-center gap-1",
                            div { class: "w-2 h-2 rounded-full bg-red-500 animate-pulse" }
                            span { class: "text-xs text-red-400 font-bold", "LIVE" }
                        }
                    }
                    span { class: "text-xs font-mono border px-2 py-0.5 rounded {status.badge_class()}",
                        "{status_upper}"
                    }
                }
            }
            div { class: "flex-1 p-3 overflow-hidden",
                div { class: "h-full overflow-auto custom-scrollbar", {children} }
            }
            div { class: "px-3 py-1 border-t border-gray-700/50 bg-gray-800/50",
                div { class: "flex items-center justify-between text-xs text-gray-500",
                    span { class: "font-mono", "{clock_text}" }
                    div { class: "flex items-center gap-2",
                        div { class: "w-2 h-2 rounded-full {status.dot_class()}" }
                        span { class: "font-mono", "{status.label()}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status_is_idle() {
        assert_eq!(PanelStatus::default(), PanelStatus::Idle);
        assert_eq!(PanelStatus::default().label(), "idle");
    }

    #[test]
    fn test_only_idle_dot_is_static() {
        for status in [PanelStatus::Active, PanelStatus::Warning, PanelStatus::Error] {
            assert!(status.dot_class().contains("pulse-glow"));
        }
        assert!(!PanelStatus::Idle.dot_class().contains("pulse-glow"));
    }

    #[test]
    fn test_clock_format() {
        let clock = local_clock();
        assert_eq!(clock.len(), 8);
        assert_eq!(clock.as_bytes()[2], b':');
        assert_eq!(clock.as_bytes()[5], b':');
    }
}
