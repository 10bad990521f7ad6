//! User profile sidebar with the settings entry point

use dioxus::prelude::*;

use crate::components::helpers::Tooltip;
use crate::components::icons::{SettingsIcon, UserIcon};
use crate::components::terminal_panel::{PanelStatus, TerminalPanel};
use crate::components::utils::short_address;
use crate::display_types::{LabeledValue, UserProfile};
use crate::placement::Side;

#[component]
pub fn ProfilePanel(
    profile: UserProfile,
    settings_help: String,
    on_open_settings: EventHandler<()>,
) -> Element {
    let (wallet_label, wallet_class, status) = if profile.wallet_connected {
        ("CONNECTED", "success-text", PanelStatus::Active)
    } else {
        ("DISCONNECTED", "text-red-400", PanelStatus::Warning)
    };
    let address = short_address(&profile.wallet_address);

    rsx! {
        TerminalPanel {
            title: "USER PROFILE".to_string(),
            icon: rsx! {
                UserIcon { class: "w-4 h-4" }
            },
            status,
            div { class: "space-y-6",
                div { class: "p-4 bg-green-500/10 border border-green-500/20",
                    div { class: "flex justify-between items-center mb-2",
                        span { class: "text-white/60", "WALLET:" }
                        span { class: "font-bold {wallet_class}", "{wallet_label}" }
                    }
                    div { class: "text-sm text-white/50 font-mono", "{address}" }
                }
                StatBlock { title: "RISK PROFILE", rows: profile.risk_profile }
                StatBlock { title: "TODAY'S ACTIVITY", rows: profile.today }
                Tooltip {
                    content: settings_help,
                    side: Side::Top,
                    class: Some("w-full".to_string()),
                    button {
                        r#type: "button",
                        class: "w-full p-4 bg-white/5 border border-white/10 hover:bg-white/10 transition-all text-white font-semibold flex items-center justify-center gap-2",
                        onclick: move |_| on_open_settings.call(()),
                        SettingsIcon { class: "w-4 h-4" }
                        "SETTINGS"
                    }
                }
            }
        }
    }
}

#[component]
fn StatBlock(title: &'static str, rows: Vec<LabeledValue>) -> Element {
    rsx! {
        div { class: "p-4 bg-white/5 border border-white/10",
            div { class: "text-base font-bold text-white mb-4", "{title}" }
            div { class: "space-y-3 text-sm",
                for row in rows {
                    div { key: "{row.label}", class: "flex justify-between",
                        span { class: "text-white/60", "{row.label}:" }
                        span { class: "text-white", "{row.value}" }
                    }
                }
            }
        }
    }
}
