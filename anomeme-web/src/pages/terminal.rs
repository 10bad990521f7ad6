//! Terminal page
//!
//! Shows the landing view until the session connects, then the dashboard
//! with its two modals.

use std::rc::Rc;

use anomeme_ui::stores::{
    IntentDraft, ModalKind, SessionStateStoreExt, SettingsDraft, UiState, UiStateStoreExt,
};
use anomeme_ui::{DashboardView, ErrorDisplay, IntentModalView, LandingView, SettingsModalView};
use dioxus::prelude::*;

use crate::demo_data::{DemoData, DemoDataError};

#[component]
pub fn Terminal() -> Element {
    let mut ui = use_context::<Store<UiState>>();
    let data = use_context::<Rc<Result<DemoData, DemoDataError>>>();
    let intent_open = use_memo(move || *ui.modal().read() == Some(ModalKind::Intent));
    let settings_open = use_memo(move || *ui.modal().read() == Some(ModalKind::Settings));
    let intent_open: ReadSignal<bool> = intent_open.into();
    let settings_open: ReadSignal<bool> = settings_open.into();

    if !*ui.session().connected().read() {
        return rsx! {
            LandingView { on_connect: move |_| ui.write().connect() }
        };
    }

    let snapshot = match &*data {
        Ok(data) => data.snapshot.clone(),
        Err(e) => {
            return rsx! {
                ErrorDisplay {
                    title: "TERMINAL OFFLINE".to_string(),
                    message: e.to_string(),
                }
            };
        }
    };

    rsx! {
        DashboardView {
            snapshot,
            on_create_intent: move |_| ui.write().open_modal(ModalKind::Intent),
            on_open_settings: move |_| ui.write().open_modal(ModalKind::Settings),
        }

        IntentModalView {
            is_open: intent_open,
            draft: ui.intent(),
            on_change: move |draft: IntentDraft| ui.intent().set(draft),
            on_cancel: move |_| ui.write().close_modal(),
            on_submit: move |_| ui.write().submit_intent(),
        }

        SettingsModalView {
            is_open: settings_open,
            saved: ui.settings().cloned(),
            on_cancel: move |_| ui.write().close_modal(),
            on_save: move |settings: SettingsDraft| ui.write().save_settings(settings),
        }
    }
}
