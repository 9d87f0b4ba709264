use dioxus::prelude::*;
use quiz_core::model::Mode;

use super::{FeedbackBanner, ProgressHeader, ScoreCard, WrongReview};

use crate::vm::{FeedbackVm, QuestionVm, ResultVm, WrongItemVm};

fn question(number: usize, total: usize, percent: u32) -> QuestionVm {
    QuestionVm {
        image_id: "cat.jpg".to_string(),
        image_src: None,
        number,
        total,
        score: 1,
        wrong_count: 0,
        progress_percent: percent,
        answered: false,
        choices: None,
    }
}

fn missed(image_id: &str, answer: &str, user_input: &str) -> WrongItemVm {
    WrongItemVm {
        image_id: image_id.to_string(),
        image_src: None,
        answer: answer.to_string(),
        user_input: user_input.to_string(),
    }
}

#[test]
fn progress_header_shows_position_and_counters() {
    let vm = question(2, 4, 25);
    let html = dioxus_ssr::render_element(rsx! {
        ProgressHeader { question: vm }
    });
    assert!(html.contains("Question 2 / 4"), "missing position in {html}");
    assert!(html.contains("width: 25%;"), "missing bar width in {html}");
    assert!(html.contains("Correct 1"), "missing score in {html}");
    assert!(html.contains("Wrong 0"), "missing wrong count in {html}");
}

#[test]
fn feedback_banner_marks_wrong_answers() {
    let feedback = FeedbackVm {
        is_correct: false,
        canonical_answer: "dog".to_string(),
        user_input: "wolf".to_string(),
    };
    let html = dioxus_ssr::render_element(rsx! {
        FeedbackBanner { feedback }
    });
    assert!(html.contains("result-box wrong"), "missing class in {html}");
    assert!(html.contains("The answer is"), "missing headline in {html}");
    assert!(html.contains("You answered: wolf"), "missing input in {html}");
}

#[test]
fn feedback_banner_hides_input_when_correct() {
    let feedback = FeedbackVm {
        is_correct: true,
        canonical_answer: "cat".to_string(),
        user_input: "Cat".to_string(),
    };
    let html = dioxus_ssr::render_element(rsx! {
        FeedbackBanner { feedback }
    });
    assert!(html.contains("result-box correct"), "missing class in {html}");
    assert!(!html.contains("You answered"), "unexpected input in {html}");
}

#[test]
fn score_card_renders_score_and_rate() {
    let result = ResultVm {
        score: 1,
        total: 3,
        rate_percent: 33,
        is_perfect: false,
        mode: None,
        wrong_items: vec![missed("dog.png", "dog", "")],
    };
    let html = dioxus_ssr::render_element(rsx! {
        ScoreCard { result }
    });
    assert!(html.contains("1 / 3"), "missing score in {html}");
    assert!(html.contains("Accuracy 33%"), "missing rate in {html}");
    assert!(!html.contains("Perfect round"), "unexpected perfect in {html}");
}

#[test]
fn score_card_does_not_praise_an_unfinished_round() {
    let result = ResultVm {
        score: 0,
        total: 3,
        rate_percent: 0,
        is_perfect: false,
        mode: Some(Mode::Subject),
        wrong_items: Vec::new(),
    };
    let html = dioxus_ssr::render_element(rsx! {
        ScoreCard { result }
    });
    assert!(html.contains("0 / 3"), "missing score in {html}");
    assert!(html.contains("Subject"), "missing mode in {html}");
    assert!(!html.contains("Perfect round"), "unexpected perfect in {html}");
}

#[test]
fn score_card_praises_a_perfect_round() {
    let result = ResultVm {
        score: 2,
        total: 2,
        rate_percent: 100,
        is_perfect: true,
        mode: Some(Mode::Multiple),
        wrong_items: Vec::new(),
    };
    let html = dioxus_ssr::render_element(rsx! {
        ScoreCard { result }
    });
    assert!(html.contains("Perfect round!"), "missing praise in {html}");
    assert!(html.contains("Multiple choice"), "missing mode in {html}");
}

#[test]
fn wrong_review_lists_every_miss() {
    let items = vec![missed("dog.png", "dog", "wolf"), missed("owl.gif", "owl", "  ")];
    let html = dioxus_ssr::render_element(rsx! {
        WrongReview { items }
    });
    assert!(html.contains("Missed images"), "missing heading in {html}");
    assert!(html.contains("You said: wolf"), "missing input in {html}");
    assert!(html.contains("You said: (no answer)"), "missing blank label in {html}");
    assert!(html.contains("owl"), "missing second item in {html}");
}

#[test]
fn wrong_review_is_empty_for_perfect_round() {
    let html = dioxus_ssr::render_element(rsx! {
        WrongReview { items: Vec::new() }
    });
    assert!(!html.contains("Missed images"), "unexpected list in {html}");
}
