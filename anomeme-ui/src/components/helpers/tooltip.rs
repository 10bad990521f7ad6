//! Hover tooltip positioned with `placement::resolve`
//!
//! Two pieces:
//! - **`use_tooltip_handle()`**: Hook returning a `TooltipHandle` with `onmounted()`,
//!   `show()`, `hide()` methods. The caller wires these onto their elements.
//! - **`Tooltip`**: Sugar that wraps children in a trigger and renders the bubble.
//!
//! The bubble is `position: fixed` at the resolved anchor; a translate class
//! per side moves its body off the anchor and the arrow points back at the
//! trigger.

use std::rc::Rc;

use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
use tracing::debug;

use crate::config::TooltipConfig;
use crate::hover::HoverDelay;
use crate::placement::{ResolvedPlacement, Side};
use crate::wasm_utils::{element_rect, sleep_ms, window_viewport, WindowEventListener};

/// Handle for controlling tooltip visibility and anchor positioning.
///
/// Created by `use_tooltip_handle()`. Wire `onmounted()` onto the anchor element,
/// and `show()`/`hide()` onto the trigger element's mouse events.
#[derive(Clone, Copy, PartialEq)]
pub struct TooltipHandle {
    anchor: Signal<Option<Rc<MountedData>>>,
    hover: Signal<HoverDelay>,
    hover_task: Signal<Option<Task>>,
    placement: Signal<Option<ResolvedPlacement>>,
    config: TooltipConfig,
}

impl TooltipHandle {
    /// Callback for the anchor element's `onmounted`.
    pub fn onmounted(&self) -> impl FnMut(MountedEvent) {
        let mut anchor = self.anchor;
        move |evt: MountedEvent| {
            anchor.set(Some(evt.data()));
        }
    }

    /// Call on mouseenter of the trigger element (starts delayed show).
    pub fn show(&self, side: Side) {
        let mut hover_task = self.hover_task;
        let mut hover = self.hover;
        let mut placement = self.placement;
        let anchor = self.anchor;
        let config = self.config;

        if let Some(task) = hover_task.take() {
            task.cancel();
        }
        let ticket = hover.write().enter();

        let task = spawn(async move {
            sleep_ms(config.delay_ms).await;

            // Measure at fire time: the trigger may have moved during the delay
            let Some(resolved) = measure(anchor, &config, side) else {
                debug!("Tooltip anchor not measurable, staying hidden");
                return;
            };
            if hover.write().fire(ticket) {
                placement.set(Some(resolved));
            }
        });
        hover_task.set(Some(task));
    }

    /// Call on mouseleave of the trigger element (hides immediately).
    pub fn hide(&self) {
        let mut hover_task = self.hover_task;
        let mut hover = self.hover;
        let mut placement = self.placement;
        if let Some(task) = hover_task.take() {
            task.cancel();
        }
        hover.write().leave();
        placement.set(None);
    }

    /// Current placement, `None` while hidden
    pub fn placement(&self) -> Option<ResolvedPlacement> {
        (self.placement)()
    }
}

fn measure(
    anchor: Signal<Option<Rc<MountedData>>>,
    config: &TooltipConfig,
    side: Side,
) -> Option<ResolvedPlacement> {
    let mounted = anchor.peek().clone()?;
    let element = mounted.downcast::<web_sys_x::Element>()?;
    let rect = element_rect(element);
    let viewport = window_viewport()?;
    Some(config.placement.resolve(&rect, viewport, side))
}

/// Hook that creates a `TooltipHandle` for manual tooltip control.
///
/// Reads `TooltipConfig` from context; `delay_ms` overrides its delay.
pub fn use_tooltip_handle(delay_ms: Option<u64>) -> TooltipHandle {
    let config = use_hook(|| {
        let config = try_consume_context::<TooltipConfig>().unwrap_or_default();
        match delay_ms {
            Some(ms) => config.delay_ms(ms),
            None => config,
        }
    });
    let anchor = use_signal(|| None::<Rc<MountedData>>);
    let mut hover = use_signal(HoverDelay::new);
    let mut hover_task = use_signal(|| None::<Task>);
    let mut placement = use_signal(|| None::<ResolvedPlacement>);

    // Hide when the window loses focus, so a tooltip doesn't linger after alt-tab
    let mut blur_listener: Signal<Option<WindowEventListener>> = use_signal(|| None);

    // use_effect rather than use_hook so the window access runs after render
    use_effect(move || {
        let Some(window) = web_sys_x::window() else {
            return;
        };

        // The blur callback runs from wasm-bindgen, outside the Dioxus runtime
        let runtime = Runtime::current();

        let listener = WindowEventListener::new(window, "blur", move || {
            let _guard = RuntimeGuard::new(runtime.clone());
            // Signals may already be dropped if the component unmounted
            if let Ok(mut guard) = hover_task.try_write() {
                if let Some(task) = guard.take() {
                    task.cancel();
                }
            }
            if let Ok(mut guard) = hover.try_write() {
                guard.leave();
            }
            if let Ok(mut guard) = placement.try_write() {
                *guard = None;
            }
        });

        blur_listener.set(Some(listener));
    });

    use_drop(move || {
        if let Some(task) = hover_task.peek().as_ref() {
            task.cancel();
        }
        // Dropping the listener during scope teardown would run JS interop
        // inside the diff cycle; defer it to a task instead.
        if let Some(listener) = blur_listener.write().take() {
            spawn(async move {
                drop(listener);
            });
        }
    });

    TooltipHandle {
        anchor,
        hover,
        hover_task,
        placement,
        config,
    }
}

/// A hover-triggered tooltip that wraps children.
///
/// ```ignore
/// Tooltip { content: "Create a new trading intent", side: Side::Top,
///     button { "+ CREATE NEW INTENT" }
/// }
/// ```
#[component]
pub fn Tooltip(
    /// Text shown in the bubble
    content: String,
    /// Preferred side; may flip when the viewport is tight
    #[props(default)]
    side: Side,
    /// Overrides the configured show delay
    #[props(default)]
    delay_ms: Option<u64>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let handle = use_tooltip_handle(delay_ms);
    let extra_class = class.unwrap_or_default();

    rsx! {
        div {
            class: "inline-block cursor-help {extra_class}",
            onmounted: handle.onmounted(),
            onmouseenter: move |_| handle.show(side),
            onmouseleave: move |_| handle.hide(),
            {children}
        }
        if let Some(placement) = handle.placement() {
            TooltipOverlay { content, placement }
        }
    }
}

/// The floating bubble, fixed at the resolved anchor
#[component]
fn TooltipOverlay(content: String, placement: ResolvedPlacement) -> Element {
    let x = placement.anchor.x;
    let y = placement.anchor.y;
    let body_class = body_translate_class(placement.side);
    let arrow = arrow_class(placement.side);

    rsx! {
        div {
            class: "tooltip-overlay fixed z-[4000] pointer-events-none animate-fade-in-up",
            style: "left: {x}px; top: {y}px;",
            role: "tooltip",
            "data-side": placement.side.as_str(),
            div { class: "relative {body_class}",
                div { class: "bg-black/95 border border-red-500/40 backdrop-blur-xl px-4 py-3 text-xs font-mono text-white max-w-[300px] shadow-2xl rounded-sm",
                    div { class: "flex items-start gap-2",
                        div { class: "w-1.5 h-1.5 bg-red-500 rounded-full mt-1.5 flex-shrink-0 animate-red-glow" }
                        div { class: "leading-relaxed text-white/90", "{content}" }
                    }
                }
                div { class: "{arrow}" }
            }
        }
    }
}

/// Moves the bubble body so its reference edge sits on the anchor
fn body_translate_class(side: Side) -> &'static str {
    match side {
        Side::Bottom => "translate-x-[-50%] translate-y-0",
        Side::Top => "translate-x-[-50%] translate-y-[-100%]",
        Side::Left => "translate-x-[-100%] translate-y-[-50%]",
        Side::Right => "translate-x-0 translate-y-[-50%]",
    }
}

fn arrow_class(side: Side) -> &'static str {
    match side {
        Side::Bottom => "absolute w-2 h-2 bg-black/95 border-l border-t border-red-500/40 rotate-45 top-[-4px] left-1/2 translate-x-[-50%]",
        Side::Top => "absolute w-2 h-2 bg-black/95 border-l border-t border-red-500/40 bottom-[-4px] left-1/2 translate-x-[-50%] rotate-[225deg]",
        Side::Left => "absolute w-2 h-2 bg-black/95 border-l border-t border-red-500/40 right-[-4px] top-1/2 translate-y-[-50%] rotate-[135deg]",
        Side::Right => "absolute w-2 h-2 bg-black/95 border-l border-t border-red-500/40 left-[-4px] top-1/2 translate-y-[-50%] rotate-[315deg]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_points_back_at_trigger() {
        assert!(arrow_class(Side::Bottom).contains("top-[-4px]"));
        assert!(arrow_class(Side::Top).contains("bottom-[-4px]"));
        assert!(arrow_class(Side::Left).contains("right-[-4px]"));
        assert!(arrow_class(Side::Right).contains("left-[-4px]"));
    }

    #[test]
    fn test_body_translation_matches_footprint() {
        // Horizontal sides center vertically, vertical sides center horizontally
        assert!(body_translate_class(Side::Top).contains("translate-x-[-50%]"));
        assert!(body_translate_class(Side::Bottom).contains("translate-x-[-50%]"));
        assert!(body_translate_class(Side::Left).contains("translate-y-[-50%]"));
        assert!(body_translate_class(Side::Right).contains("translate-y-[-50%]"));
    }
}
