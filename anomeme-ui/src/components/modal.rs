//! Modal shell built on the native HTML `<dialog>` element
//!
//! `showModal()` gives top-layer rendering, a focus trap, Escape-to-close and
//! a `::backdrop` for free. The dialog keeps its own display state, so layout
//! lives on an inner fixed container rather than on the dialog itself.
//!
//! `showModal()` throws if the dialog is already open, so the effect checks
//! the `open` attribute first.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use tracing::warn;
use wasm_bindgen_x::JsCast;

use crate::components::icons::XIcon;
use crate::components::ChromelessButton;

static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Call a zero-argument method on a DOM element by name
fn call_method(element: &web_sys_x::Element, name: &str) {
    let Ok(method) = js_sys_x::Reflect::get(element, &name.into()) else {
        return;
    };
    if let Some(func) = method.dyn_ref::<js_sys_x::Function>() {
        if func.call0(element).is_err() {
            warn!("dialog.{}() failed", name);
        }
    }
}

/// Wraps content in a native `<dialog>` opened with `showModal()`
#[component]
pub fn Modal(
    /// Controls whether the modal is open
    is_open: ReadSignal<bool>,
    /// Called on Escape or backdrop click
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    let dialog_id = use_hook(|| {
        let id = MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("modal-{}", id)
    });
    let dialog_id_for_effect = dialog_id.clone();

    use_effect(move || {
        let is_open = is_open();

        let Some(element) = web_sys_x::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&dialog_id_for_effect))
        else {
            return;
        };

        let is_dialog_open = element.has_attribute("open");
        match (is_open, is_dialog_open) {
            (true, false) => call_method(&element, "showModal"),
            (false, true) => call_method(&element, "close"),
            _ => {}
        }
    });

    // No display classes on the dialog itself: they would override the
    // native display:none of a closed dialog.
    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 bg-transparent max-w-none max-h-none backdrop:bg-black/80 backdrop:backdrop-blur-sm",
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    class: "fixed inset-0 flex items-center justify-center p-4",
                    onclick: move |_| on_close.call(()),
                    div { onclick: move |evt| evt.stop_propagation(), {children} }
                }
            }
        }
    }
}

/// Terminal-styled modal frame: icon + title header, scrolling body, footer
#[component]
pub fn ModalFrame(
    title: String,
    icon: Element,
    on_close: EventHandler<()>,
    footer: Element,
    children: Element,
) -> Element {
    rsx! {
        div { class: "bg-black/95 border border-red-500/30 w-[640px] max-w-full max-h-[90vh] flex flex-col shadow-2xl shadow-red-500/10 animate-fade-in-up",
            div { class: "flex items-center justify-between px-6 py-4 border-b border-white/10",
                div { class: "flex items-center gap-3",
                    {icon}
                    h2 { class: "text-lg font-bold text-white font-mono tracking-wider", "{title}" }
                }
                ChromelessButton {
                    class: Some("text-white/50 hover:text-white transition-colors".to_string()),
                    aria_label: Some("Close".to_string()),
                    onclick: move |_| on_close.call(()),
                    XIcon { class: "w-5 h-5" }
                }
            }
            div { class: "flex-1 overflow-y-auto custom-scrollbar p-6 space-y-6", {children} }
            div { class: "flex items-center justify-end gap-3 px-6 py-4 border-t border-white/10",
                {footer}
            }
        }
    }
}

/// Numbered step heading used inside form modals
#[component]
pub fn StepHeading(number: u8, title: &'static str) -> Element {
    rsx! {
        h3 { class: "flex items-center gap-3 text-sm font-bold text-white font-mono tracking-wider mb-3",
            span { class: "w-6 h-6 flex items-center justify-center bg-red-500/20 border border-red-500/40 text-red-400 text-xs",
                "{number}"
            }
            "{title}"
        }
    }
}
