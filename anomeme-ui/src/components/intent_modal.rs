//! Create-intent modal
//!
//! Reads the draft from the store and reports every edit as a full updated
//! draft, so the page decides where it is written.

use dioxus::prelude::*;

use crate::components::form::{
    CardTone, CheckboxField, ChoiceCard, ChoiceField, StringSelectField, TextField,
};
use crate::components::icons::{DollarSignIcon, TargetIcon, TrendingUpIcon, ZapIcon};
use crate::components::modal::{Modal, ModalFrame, StepHeading};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::stores::{
    Confidence, IntentDraft, PriceDirection, Sentiment, Slippage, TimeFrame, TradeAction,
    TriggerKind, SOCIAL_SOURCES,
};

/// Current draft with one edit applied
fn edited(draft: ReadStore<IntentDraft>, apply: impl FnOnce(&mut IntentDraft)) -> IntentDraft {
    let mut next = draft.read().clone();
    apply(&mut next);
    next
}

#[component]
pub fn IntentModalView(
    is_open: ReadSignal<bool>,
    draft: ReadStore<IntentDraft>,
    on_change: EventHandler<IntentDraft>,
    on_cancel: EventHandler<()>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        Modal { is_open, on_close: on_cancel,
            ModalFrame {
                title: "CREATE NEW INTENT".to_string(),
                icon: rsx! {
                    TargetIcon { class: "w-6 h-6 text-red-500" }
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
                        onclick: move |_| on_submit.call(()),
                        "CREATE INTENT"
                    }
                },
                TriggerStep { draft, on_change }
                ActionStep { draft, on_change }
                RiskStep { draft, on_change }
                IntentPreview { draft }
            }
        }
    }
}

#[component]
fn TriggerStep(draft: ReadStore<IntentDraft>, on_change: EventHandler<IntentDraft>) -> Element {
    let current = draft.read().clone();

    rsx! {
        div { class: "space-y-4",
            StepHeading { number: 1, title: "TRIGGER CONDITION" }
            div { class: "grid grid-cols-2 gap-4",
                ChoiceCard {
                    title: "Social Signal",
                    description: "Trigger on social media posts",
                    icon: rsx! {
                        ZapIcon { class: "w-5 h-5 text-red-500" }
                    },
                    tone: CardTone::Red,
                    selected: current.trigger == TriggerKind::Social,
                    onclick: move |_| on_change.call(edited(draft, |d| d.trigger = TriggerKind::Social)),
                }
                ChoiceCard {
                    title: "Price Movement",
                    description: "Trigger on price changes",
                    icon: rsx! {
                        TrendingUpIcon { class: "w-5 h-5 text-white" }
                    },
                    tone: CardTone::Neutral,
                    selected: current.trigger == TriggerKind::Price,
                    onclick: move |_| on_change.call(edited(draft, |d| d.trigger = TriggerKind::Price)),
                }
            }
            {match current.trigger {
                TriggerKind::Social => rsx! {
                    div { class: "p-4 bg-red-500/5 border border-red-500/10 space-y-4",
                        StringSelectField {
                            label: "Social Source",
                            options: SOCIAL_SOURCES.to_vec(),
                            selected: current.social_source.clone(),
                            on_change: move |v: String| on_change.call(edited(draft, |d| d.social_source = v)),
                        }
                        TextField {
                            label: "Keywords",
                            value: current.keywords.clone(),
                            placeholder: Some("DOGE, dogecoin, moon"),
                            on_input: move |v: String| on_change.call(edited(draft, |d| d.keywords = v)),
                        }
                        div { class: "grid grid-cols-2 gap-4",
                            ChoiceField::<Sentiment> {
                                label: "Sentiment",
                                selected: current.sentiment,
                                on_change: move |v: Sentiment| on_change.call(edited(draft, |d| d.sentiment = v)),
                            }
                            ChoiceField::<Confidence> {
                                label: "Confidence",
                                selected: current.confidence,
                                on_change: move |v: Confidence| on_change.call(edited(draft, |d| d.confidence = v)),
                            }
                        }
                    }
                },
                TriggerKind::Price => rsx! {
                    div { class: "p-4 bg-blue-500/5 border border-blue-500/10 space-y-4",
                        TextField {
                            label: "Token",
                            value: current.price_token.clone(),
                            placeholder: Some("DOGE, PEPE, SHIB..."),
                            on_input: move |v: String| on_change.call(edited(draft, |d| d.price_token = v)),
                        }
                        div { class: "grid grid-cols-2 gap-4",
                            ChoiceField::<PriceDirection> {
                                label: "Price Change",
                                selected: current.price_direction,
                                on_change: move |v: PriceDirection| on_change.call(edited(draft, |d| d.price_direction = v)),
                            }
                            TextField {
                                label: "Percentage",
                                value: current.price_change.clone(),
                                placeholder: Some("5%"),
                                on_input: move |v: String| on_change.call(edited(draft, |d| d.price_change = v)),
                            }
                        }
                        ChoiceField::<TimeFrame> {
                            label: "Time Frame",
                            selected: current.time_frame,
                            on_change: move |v: TimeFrame| on_change.call(edited(draft, |d| d.time_frame = v)),
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn ActionStep(draft: ReadStore<IntentDraft>, on_change: EventHandler<IntentDraft>) -> Element {
    let current = draft.read().clone();
    let is_sell = current.action == TradeAction::Sell;
    let detail_class = if is_sell {
        "bg-red-500/5 border-red-500/10"
    } else {
        "bg-green-500/5 border-green-500/10"
    };
    let (sell_tone, sell_icon_class) = if is_sell {
        (CardTone::Red, "w-5 h-5 text-red-500")
    } else {
        (CardTone::Neutral, "w-5 h-5 text-white")
    };

    rsx! {
        div { class: "space-y-4",
            StepHeading { number: 2, title: "TRADING ACTION" }
            div { class: "grid grid-cols-2 gap-4",
                ChoiceCard {
                    title: "BUY",
                    description: "Buy token when triggered",
                    icon: rsx! {
                        DollarSignIcon { class: "w-5 h-5 text-green-500" }
                    },
                    tone: CardTone::Green,
                    selected: !is_sell,
                    onclick: move |_| on_change.call(edited(draft, |d| d.action = TradeAction::Buy)),
                }
                ChoiceCard {
                    title: "SELL",
                    description: "Sell token when triggered",
                    icon: rsx! {
                        DollarSignIcon { class: sell_icon_class }
                    },
                    tone: sell_tone,
                    selected: is_sell,
                    onclick: move |_| on_change.call(edited(draft, |d| d.action = TradeAction::Sell)),
                }
            }
            div { class: "p-4 border space-y-4 {detail_class}",
                TextField {
                    label: "Token",
                    value: current.trade_token.clone(),
                    placeholder: Some("DOGE, PEPE, SHIB..."),
                    on_input: move |v: String| on_change.call(edited(draft, |d| d.trade_token = v)),
                }
                div { class: "grid grid-cols-2 gap-4",
                    TextField {
                        label: "Amount",
                        value: current.amount.clone(),
                        placeholder: Some("$100"),
                        on_input: move |v: String| on_change.call(edited(draft, |d| d.amount = v)),
                    }
                    ChoiceField::<Slippage> {
                        label: "Max Slippage",
                        selected: current.max_slippage,
                        on_change: move |v: Slippage| on_change.call(edited(draft, |d| d.max_slippage = v)),
                    }
                }
            }
        }
    }
}

#[component]
fn RiskStep(draft: ReadStore<IntentDraft>, on_change: EventHandler<IntentDraft>) -> Element {
    let current = draft.read().clone();

    rsx! {
        div { class: "space-y-4",
            StepHeading { number: 3, title: "RISK MANAGEMENT" }
            div { class: "p-4 bg-yellow-500/5 border border-yellow-500/10",
                div { class: "grid grid-cols-2 gap-4",
                    TextField {
                        label: "Stop Loss",
                        value: current.stop_loss.clone(),
                        placeholder: Some("20%"),
                        on_input: move |v: String| on_change.call(edited(draft, |d| d.stop_loss = v)),
                    }
                    TextField {
                        label: "Take Profit",
                        value: current.take_profit.clone(),
                        placeholder: Some("50%"),
                        on_input: move |v: String| on_change.call(edited(draft, |d| d.take_profit = v)),
                    }
                }
                div { class: "mt-4 space-y-3",
                    CheckboxField {
                        id: "rug-protection",
                        label: "🛡️ Rug Pull Protection",
                        checked: current.rug_protection,
                        on_change: move |v: bool| on_change.call(edited(draft, |d| d.rug_protection = v)),
                    }
                    CheckboxField {
                        id: "mev-protection",
                        label: "⚡ MEV Protection",
                        checked: current.mev_protection,
                        on_change: move |v: bool| on_change.call(edited(draft, |d| d.mev_protection = v)),
                    }
                    CheckboxField {
                        id: "sniper-protection",
                        label: "🎯 Anti-Sniper Protection",
                        checked: current.sniper_protection,
                        on_change: move |v: bool| on_change.call(edited(draft, |d| d.sniper_protection = v)),
                    }
                }
            }
        }
    }
}

#[component]
fn IntentPreview(draft: ReadStore<IntentDraft>) -> Element {
    let lines = draft.read().preview_lines();

    rsx! {
        div { class: "p-4 bg-white/5 border border-white/10",
            h4 { class: "font-semibold text-white font-mono mb-3", "INTENT PREVIEW" }
            div { class: "p-4 bg-black/20 font-mono text-sm text-white/80 space-y-1",
                for line in lines {
                    div { "{line}" }
                }
            }
        }
    }
}
