//! Landing page

use anomeme_ui::stores::{SessionStateStoreExt, UiState, UiStateStoreExt};
use anomeme_ui::LandingView;
use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Landing() -> Element {
    let mut ui = use_context::<Store<UiState>>();

    // A connected session has nothing to do here
    use_effect(move || {
        if *ui.session().connected().read() {
            navigator().replace(Route::Terminal {});
        }
    });

    rsx! {
        LandingView {
            on_connect: move |_| {
                ui.write().connect();
                navigator().push(Route::Terminal {});
            },
        }
    }
}
