use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use quiz_core::model::Mode;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{load_resume, start_quiz};

#[component]
pub fn ModeSelectView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz = ctx.quiz();
    let location = ctx.images_location().to_string();
    let error = use_signal(|| None::<ViewError>);
    let starting = use_signal(|| false);

    let quiz_for_resume = quiz.clone();
    let resume = use_resource(move || {
        let quiz = quiz_for_resume.clone();
        async move { load_resume(&quiz).await }
    });
    let resume_label = resume
        .value()
        .read()
        .as_ref()
        .and_then(Option::as_ref)
        .map(|vm| vm.label());

    let start = use_callback(move |mode: Mode| {
        let quiz = quiz.clone();
        let mut error = error;
        let mut starting = starting;
        if starting() {
            return;
        }
        starting.set(true);
        spawn(async move {
            match start_quiz(&quiz, mode).await {
                Ok(()) => {
                    error.set(None);
                    navigator.push(Route::Quiz {});
                }
                Err(err) => error.set(Some(err)),
            }
            starting.set(false);
        });
    });

    rsx! {
        div { class: "page mode-page",
            header { class: "view-header",
                h2 { class: "view-title", "Name that picture" }
                p { class: "view-subtitle", "Images from {location}. Pick how you want to answer." }
            }
            div { class: "mode-options",
                button {
                    class: "btn btn-primary mode-option",
                    r#type: "button",
                    disabled: starting(),
                    onclick: move |_| start.call(Mode::Subject),
                    span { class: "mode-option-title", "Subject" }
                    span { class: "mode-option-hint", "Type the name yourself" }
                }
                button {
                    class: "btn btn-primary mode-option",
                    r#type: "button",
                    disabled: starting(),
                    onclick: move |_| start.call(Mode::Multiple),
                    span { class: "mode-option-title", "Multiple choice" }
                    span { class: "mode-option-hint", "Pick from a few options" }
                }
            }
            if let Some(label) = resume_label {
                Link { class: "btn btn-secondary resume-link", to: Route::Quiz {}, "{label}" }
            }
            if let Some(err) = error() {
                p { class: "view-error", "{err.message()}" }
            }
        }
    }
}
