use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ResultVm, WrongItemVm, load_result, restart_quiz};

#[component]
pub fn ResultView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz = ctx.quiz();
    let action_error = use_signal(|| None::<ViewError>);
    let restarting = use_signal(|| false);

    let quiz_for_resource = quiz.clone();
    let resource = use_resource(move || {
        let quiz = quiz_for_resource.clone();
        async move { load_result(&quiz).await }
    });

    let restart = use_callback(move |_: ()| {
        let quiz = quiz.clone();
        let mut action_error = action_error;
        let mut restarting = restarting;
        if restarting() {
            return;
        }
        restarting.set(true);
        spawn(async move {
            match restart_quiz(&quiz).await {
                Ok(()) => {
                    action_error.set(None);
                    navigator.push(Route::Quiz {});
                }
                Err(err) => action_error.set(Some(err)),
            }
            restarting.set(false);
        });
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page result-page",
            h2 { class: "view-title", "Results" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "view-error", "{err.message()}" }
                },
                ViewState::Ready(result) => rsx! {
                    ScoreCard { result: result.clone() }
                    WrongReview { items: result.wrong_items.clone() }
                },
            }
            div { class: "result-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: restarting(),
                    onclick: move |_| restart.call(()),
                    "Restart"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        navigator.push(Route::ModeSelect {});
                    },
                    "Change mode"
                }
            }
            if let Some(err) = action_error() {
                p { class: "view-error", "{err.message()}" }
            }
        }
    }
}

#[component]
pub fn ScoreCard(result: ResultVm) -> Element {
    let score = result.score_label();
    let rate = result.rate_label();
    rsx! {
        div { class: "card score-card",
            if let Some(mode) = result.mode_label() {
                p { class: "mode", "{mode}" }
            }
            p { class: "score", "{score}" }
            p { class: "rate", "Accuracy {rate}" }
            if result.is_perfect {
                p { class: "perfect", "Perfect round!" }
            }
        }
    }
}

#[component]
pub fn WrongReview(items: Vec<WrongItemVm>) -> Element {
    if items.is_empty() {
        return rsx! {};
    }
    rsx! {
        div { class: "card wrong-review",
            h3 { "Missed images" }
            ul { class: "wrong-list",
                for item in items {
                    li { key: "{item.image_id}", class: "wrong-item",
                        if let Some(src) = item.image_src.clone() {
                            img { class: "thumb", src: "{src}", alt: "{item.answer}" }
                        }
                        div { class: "wrong-text",
                            span { class: "wrong-answer", "{item.answer}" }
                            span { class: "wrong-input", "You said: {item.user_input_label()}" }
                        }
                    }
                }
            }
        }
    }
}
