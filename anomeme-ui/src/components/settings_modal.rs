//! Settings modal
//!
//! Edits a local copy of the saved settings. The form mounts fresh each time
//! the dialog opens, so cancel simply drops the copy.

use dioxus::prelude::*;

use crate::components::form::{TextField, TextFieldKind, ToggleRow};
use crate::components::icons::{AlertTriangleIcon, SettingsIcon};
use crate::components::modal::{Modal, ModalFrame};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::stores::SettingsDraft;

#[component]
pub fn SettingsModalView(
    is_open: ReadSignal<bool>,
    /// Last saved settings; the form starts from these
    saved: SettingsDraft,
    on_cancel: EventHandler<()>,
    on_save: EventHandler<SettingsDraft>,
) -> Element {
    rsx! {
        Modal { is_open, on_close: on_cancel,
            SettingsForm { saved, on_cancel, on_save }
        }
    }
}

#[component]
fn SettingsForm(
    saved: SettingsDraft,
    on_cancel: EventHandler<()>,
    on_save: EventHandler<SettingsDraft>,
) -> Element {
    let mut local = use_signal(|| saved.clone());
    let current = local.read().clone();

    rsx! {
        ModalFrame {
            title: "SETTINGS".to_string(),
            icon: rsx! {
                SettingsIcon { class: "w-6 h-6 text-white" }
            },
            on_close: on_cancel,
            footer: rsx! {
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Medium,
                    onclick: move |_| on_cancel.call(()),
                    "CANCEL"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    onclick: move |_| on_save.call(local.read().clone()),
                    "SAVE SETTINGS"
                }
            },

            div { class: "space-y-4",
                h3 { class: "flex items-center gap-2 text-sm font-bold text-white font-mono tracking-wider",
                    AlertTriangleIcon { class: "w-5 h-5 text-red-500" }
                    "RISK MANAGEMENT"
                }
                TextField {
                    label: "Max Daily Loss",
                    value: current.max_daily_loss,
                    on_input: move |v: String| local.write().max_daily_loss = v,
                }
                TextField {
                    label: "Max Position Size",
                    value: current.max_position_size,
                    on_input: move |v: String| local.write().max_position_size = v,
                }
                TextField {
                    label: "Global Stop Loss",
                    value: current.global_stop_loss,
                    on_input: move |v: String| local.write().global_stop_loss = v,
                }
            }

            div { class: "space-y-4",
                h3 { class: "text-sm font-bold text-white font-mono tracking-wider", "AUTOMATION" }
                div { class: "space-y-3",
                    ToggleRow {
                        label: "Auto Execute Intents",
                        enabled: current.auto_execute,
                        on_toggle: move |v: bool| local.write().auto_execute = v,
                    }
                    ToggleRow {
                        label: "MEV Protection",
                        enabled: current.mev_protection,
                        on_toggle: move |v: bool| local.write().mev_protection = v,
                    }
                    ToggleRow {
                        label: "Rug Detection",
                        enabled: current.rug_detection,
                        on_toggle: move |v: bool| local.write().rug_detection = v,
                    }
                }
            }

            div { class: "space-y-4",
                h3 { class: "text-sm font-bold text-white font-mono tracking-wider", "NOTIFICATIONS" }
                TextField {
                    label: "Telegram Bot Token",
                    value: current.telegram_token,
                    placeholder: Some("Enter bot token..."),
                    on_input: move |v: String| local.write().telegram_token = v,
                }
                TextField {
                    label: "Discord Webhook",
                    value: current.discord_webhook,
                    placeholder: Some("Discord webhook URL..."),
                    on_input: move |v: String| local.write().discord_webhook = v,
                }
                TextField {
                    label: "Email Alerts",
                    value: current.email,
                    placeholder: Some("your@email.com"),
                    kind: TextFieldKind::Email,
                    on_input: move |v: String| local.write().email = v,
                }
            }
        }
    }
}
