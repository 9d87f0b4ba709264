use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    FeedbackVm, NextStep, QuestionVm, QuizScreen, advance_quiz, load_quiz_screen, submit_answer,
};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz = ctx.quiz();

    let mut answer = use_signal(String::new);
    let feedback = use_signal(|| None::<FeedbackVm>);
    let action_error = use_signal(|| None::<ViewError>);
    let busy = use_signal(|| false);
    let revision = use_signal(|| 0_u32);

    let quiz_for_resource = quiz.clone();
    let resource = use_resource(move || {
        let quiz = quiz_for_resource.clone();
        // Re-read the question after every answer or advance.
        let _ = revision();
        async move { load_quiz_screen(&quiz).await }
    });

    let quiz_for_submit = quiz.clone();
    let submit = use_callback(move |input: String| {
        let quiz = quiz_for_submit.clone();
        let mut feedback = feedback;
        let mut action_error = action_error;
        let mut busy = busy;
        let mut revision = revision;
        if busy() {
            return;
        }
        busy.set(true);
        spawn(async move {
            match submit_answer(&quiz, &input).await {
                Ok(result) => {
                    feedback.set(Some(result));
                    action_error.set(None);
                }
                Err(err) => action_error.set(Some(err)),
            }
            busy.set(false);
            revision += 1;
        });
    });

    let quiz_for_next = quiz.clone();
    let next = use_callback(move |_: ()| {
        let quiz = quiz_for_next.clone();
        let mut answer = answer;
        let mut feedback = feedback;
        let mut action_error = action_error;
        let mut busy = busy;
        let mut revision = revision;
        if busy() {
            return;
        }
        busy.set(true);
        spawn(async move {
            match advance_quiz(&quiz).await {
                Ok(NextStep::Question) => {
                    feedback.set(None);
                    answer.set(String::new());
                    action_error.set(None);
                    revision += 1;
                }
                Ok(NextStep::Finished) => {
                    feedback.set(None);
                    navigator.push(Route::Results {});
                }
                Err(err) => action_error.set(Some(err)),
            }
            busy.set(false);
        });
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page quiz-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "view-error", "{err.message()}" }
                    Link { class: "btn btn-secondary", to: Route::ModeSelect {}, "Choose a mode" }
                },
                ViewState::Ready(QuizScreen::Finished) => rsx! {
                    p { "All questions answered." }
                    Link { class: "btn btn-primary", to: Route::Results {}, "See results" }
                },
                ViewState::Ready(QuizScreen::Question(vm)) => {
                    let answered = vm.answered;
                    let disabled = answered || busy();
                    let image_alt = format!("Question {}", vm.number);
                    let choice_buttons = vm.choices.clone().map(|choices| {
                        choices
                            .into_iter()
                            .map(|choice| {
                                let value = choice.clone();
                                rsx! {
                                    button {
                                        key: "{choice}",
                                        class: "btn choice-btn",
                                        r#type: "button",
                                        disabled,
                                        onclick: move |_| submit.call(value.clone()),
                                        "{choice}"
                                    }
                                }
                            })
                            .collect::<Vec<_>>()
                    });
                    rsx! {
                        ProgressHeader { question: vm.clone() }
                        div { class: "card",
                            div { class: "img-wrap",
                                if let Some(src) = vm.image_src.clone() {
                                    img { src: "{src}", alt: "{image_alt}" }
                                } else {
                                    p { class: "img-missing", "Image unavailable: {vm.image_id}" }
                                }
                            }
                            if let Some(buttons) = choice_buttons {
                                div { class: "choice-grid", {buttons.into_iter()} }
                            } else {
                                div { class: "input-row",
                                    input {
                                        r#type: "text",
                                        class: "answer-input",
                                        placeholder: "What is in the picture?",
                                        value: "{answer}",
                                        disabled,
                                        oninput: move |evt| answer.set(evt.value()),
                                    }
                                    button {
                                        class: "btn btn-primary",
                                        r#type: "button",
                                        disabled,
                                        onclick: move |_| submit.call(answer()),
                                        "Submit"
                                    }
                                }
                            }
                            if let Some(result) = feedback() {
                                FeedbackBanner { feedback: result }
                            }
                            if answered {
                                button {
                                    class: "btn next-btn",
                                    r#type: "button",
                                    disabled: busy(),
                                    onclick: move |_| next.call(()),
                                    "Next"
                                }
                            }
                        }
                    }
                }
            }
            if let Some(err) = action_error() {
                p { class: "view-error", "{err.message()}" }
            }
        }
    }
}

#[component]
pub fn ProgressHeader(question: QuestionVm) -> Element {
    let position = question.position_label();
    let bar_style = question.progress_style();
    rsx! {
        div { class: "progress-bar-wrap",
            div { class: "progress-bar", style: "{bar_style}" }
        }
        div { class: "info",
            span { class: "badge", "Question {position}" }
            span { class: "badge badge-correct", "Correct {question.score}" }
            span { class: "badge badge-wrong", "Wrong {question.wrong_count}" }
        }
    }
}

#[component]
pub fn FeedbackBanner(feedback: FeedbackVm) -> Element {
    let class = feedback.class();
    let headline = feedback.headline();
    rsx! {
        div { class: "{class}",
            p { "{headline}" }
            if !feedback.is_correct {
                p { class: "result-input", "You answered: {feedback.user_input}" }
            }
        }
    }
}
