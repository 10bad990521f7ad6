//! Form controls for the intent and settings modals

use dioxus::prelude::*;

use crate::stores::Choice;

const FIELD_CLASS: &str = "w-full bg-black/60 border border-white/10 px-3 py-2 text-sm font-mono text-white placeholder-white/30 focus:outline-none focus:border-red-500/50";
const LABEL_CLASS: &str = "block text-xs font-mono text-white/50 mb-1.5 uppercase tracking-wide";

/// Input type for `TextField`
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TextFieldKind {
    #[default]
    Text,
    Email,
}

impl TextFieldKind {
    fn as_str(&self) -> &'static str {
        match self {
            TextFieldKind::Text => "text",
            TextFieldKind::Email => "email",
        }
    }
}

/// Labeled single-line input
#[component]
pub fn TextField(
    label: &'static str,
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] kind: TextFieldKind,
) -> Element {
    rsx! {
        div {
            label { class: LABEL_CLASS, "{label}" }
            input {
                r#type: kind.as_str(),
                class: FIELD_CLASS,
                value: "{value}",
                placeholder,
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}

/// Labeled native `<select>` over a fixed set of choices
#[component]
pub fn ChoiceField<T: Choice>(label: &'static str, selected: T, on_change: EventHandler<T>) -> Element {
    rsx! {
        div {
            label { class: LABEL_CLASS, "{label}" }
            select {
                class: FIELD_CLASS,
                onchange: move |e| {
                    if let Some(choice) = T::from_value(&e.value()) {
                        on_change.call(choice);
                    }
                },
                for choice in T::all() {
                    option {
                        value: choice.value(),
                        selected: *choice == selected,
                        "{choice.label()}"
                    }
                }
            }
        }
    }
}

/// Labeled native `<select>` over free-form string options
#[component]
pub fn StringSelectField(
    label: &'static str,
    options: Vec<&'static str>,
    selected: String,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            label { class: LABEL_CLASS, "{label}" }
            select {
                class: FIELD_CLASS,
                onchange: move |e| on_change.call(e.value()),
                for opt in options {
                    option { value: opt, selected: opt == selected, "{opt}" }
                }
            }
        }
    }
}

/// Checkbox with a label to its right
#[component]
pub fn CheckboxField(
    id: &'static str,
    label: &'static str,
    checked: bool,
    on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        div { class: "flex items-center gap-3",
            input {
                r#type: "checkbox",
                id,
                class: "w-4 h-4 accent-red-500",
                checked,
                onchange: move |e| on_change.call(e.checked()),
            }
            label { r#for: id, class: "text-sm font-mono text-white/80 cursor-pointer", "{label}" }
        }
    }
}

/// On/off switch row
#[component]
pub fn ToggleRow(label: &'static str, enabled: bool, on_toggle: EventHandler<bool>) -> Element {
    let track = if enabled {
        "bg-green-500/30 border-green-500/50"
    } else {
        "bg-white/5 border-white/20"
    };
    let knob = if enabled {
        "translate-x-5 bg-green-400"
    } else {
        "translate-x-0 bg-white/40"
    };

    rsx! {
        div { class: "flex items-center justify-between",
            span { class: "text-sm font-mono text-white/80", "{label}" }
            button {
                r#type: "button",
                role: "switch",
                aria_checked: if enabled { "true" } else { "false" },
                aria_label: label,
                class: "relative w-11 h-6 border transition-colors {track}",
                onclick: move |_| on_toggle.call(!enabled),
                div { class: "absolute top-0.5 left-0.5 w-4 h-4 transition-transform {knob}" }
            }
        }
    }
}

/// Color scheme for a `ChoiceCard`
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CardTone {
    Red,
    Green,
    Neutral,
}

/// Selectable card with an icon, title and description
#[component]
pub fn ChoiceCard(
    title: &'static str,
    description: &'static str,
    icon: Element,
    tone: CardTone,
    selected: bool,
    onclick: EventHandler<()>,
) -> Element {
    let tone_class = match (tone, selected) {
        (CardTone::Red, true) => "bg-red-500/20 border-red-500/40",
        (CardTone::Red, false) => "bg-red-500/10 border-red-500/20 hover:bg-red-500/20",
        (CardTone::Green, true) => "bg-green-500/20 border-green-500/40",
        (CardTone::Green, false) => "bg-green-500/10 border-green-500/20 hover:bg-green-500/20",
        (CardTone::Neutral, true) => "bg-white/10 border-white/20",
        (CardTone::Neutral, false) => "bg-white/5 border-white/10 hover:bg-white/10",
    };

    rsx! {
        button {
            r#type: "button",
            class: "p-4 border cursor-pointer transition-all text-left {tone_class}",
            aria_pressed: if selected { "true" } else { "false" },
            onclick: move |_| onclick.call(()),
            div { class: "flex items-center gap-2 mb-1",
                {icon}
                span { class: "text-sm font-bold font-mono text-white", "{title}" }
            }
            p { class: "text-xs text-white/50 font-mono", "{description}" }
        }
    }
}
