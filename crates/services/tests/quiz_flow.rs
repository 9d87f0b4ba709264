use std::collections::HashSet;
use std::sync::Arc;

use quiz_core::model::{ImageId, Mode, QuizStateError, WrongItem};
use quiz_core::rng::fixed_entropy;
use services::{AdvanceOutcome, QuizError, QuizLimits, QuizService};
use storage::InMemoryImageSource;

fn service_with(names: &[&str]) -> (QuizService, InMemoryImageSource) {
    let source = InMemoryImageSource::with_files(names.iter().copied());
    let service = QuizService::new(
        Arc::new(source.clone()),
        QuizLimits::default(),
        fixed_entropy(),
    );
    (service, source)
}

async fn assert_invariants(service: &QuizService) {
    let status = service.get_status().await.unwrap();
    let question = service.current_question().await;
    let answered = matches!(&question, Ok(q) if q.answered);
    assert_eq!(
        status.score + status.wrong_count,
        status.position + usize::from(answered)
    );
    assert!(status.position <= status.total);
    let done = service.session().await.unwrap().is_done;
    assert_eq!(done, status.position == status.total);
}

#[tokio::test]
async fn two_image_subject_quiz_end_to_end() {
    let (service, _source) = service_with(&["a.jpg", "b.jpg"]);

    let started = service.start_session(Mode::Subject).await.unwrap();
    assert_eq!(started.status.position, 0);
    assert_eq!(started.status.total, 2);
    assert_eq!(started.status.score, 0);
    assert_eq!(started.status.wrong_count, 0);
    assert!(!started.is_done);

    let first = service.current_question().await.unwrap();
    assert_eq!(first.position, 0);
    assert!(first.choices.is_none());
    let feedback = service
        .submit_answer(first.image_id.canonical_answer())
        .await
        .unwrap();
    assert!(feedback.is_correct);
    assert_eq!(feedback.status.score, 1);
    assert_invariants(&service).await;

    let AdvanceOutcome::Next(view) = service.advance().await.unwrap() else {
        panic!("expected a next question");
    };
    assert_eq!(view.status.position, 1);
    assert!(!view.is_done);

    let second = service.current_question().await.unwrap();
    let feedback = service.submit_answer("wrong").await.unwrap();
    assert!(!feedback.is_correct);
    assert_eq!(feedback.canonical_answer, second.image_id.canonical_answer());
    assert_invariants(&service).await;

    let AdvanceOutcome::Finished(result) = service.advance().await.unwrap() else {
        panic!("expected the quiz to finish");
    };
    assert_eq!(result.score, 1);
    assert_eq!(result.total, 2);
    assert_eq!(result.rate_percent, 50);
    assert_eq!(
        result.wrong_items,
        vec![WrongItem {
            image_id: second.image_id.clone(),
            answer: second.image_id.canonical_answer().to_string(),
            user_input: "wrong".to_string(),
        }]
    );

    let status = service.get_status().await.unwrap();
    assert_eq!(status.position, 2);
    assert!(service.session().await.unwrap().is_done);
    assert_eq!(service.get_result().await.unwrap(), result);
}

#[tokio::test]
async fn operations_without_a_session_fail() {
    let (service, _source) = service_with(&["a.jpg"]);

    assert!(matches!(
        service.submit_answer("a").await,
        Err(QuizError::NoActiveSession)
    ));
    assert!(matches!(service.advance().await, Err(QuizError::NoActiveSession)));
    assert!(matches!(
        service.current_question().await,
        Err(QuizError::NoActiveSession)
    ));
    assert!(matches!(service.get_result().await, Err(QuizError::NoActiveSession)));
    assert!(matches!(service.get_status().await, Err(QuizError::NoActiveSession)));
    assert!(service.mode().await.is_none());
}

#[tokio::test]
async fn answering_twice_is_invalid() {
    let (service, _source) = service_with(&["a.jpg", "b.jpg"]);
    service.start_session(Mode::Subject).await.unwrap();

    service.submit_answer("x").await.unwrap();
    let err = service.submit_answer("y").await.unwrap_err();

    assert!(matches!(
        err,
        QuizError::InvalidState(QuizStateError::AlreadyAnswered)
    ));
    let status = service.get_status().await.unwrap();
    assert_eq!(status.wrong_count, 1);
}

#[tokio::test]
async fn advancing_before_answering_is_invalid() {
    let (service, _source) = service_with(&["a.jpg", "b.jpg"]);
    service.start_session(Mode::Subject).await.unwrap();

    let err = service.advance().await.unwrap_err();

    assert!(matches!(
        err,
        QuizError::InvalidState(QuizStateError::NotAnswered)
    ));
    assert_eq!(service.get_status().await.unwrap().position, 0);
}

#[tokio::test]
async fn finished_session_rejects_questions_and_answers() {
    let (service, _source) = service_with(&["a.jpg"]);
    service.start_session(Mode::Subject).await.unwrap();
    service.submit_answer("a").await.unwrap();
    assert!(service.advance().await.unwrap().is_finished());

    assert!(matches!(
        service.current_question().await,
        Err(QuizError::InvalidState(QuizStateError::Completed))
    ));
    assert!(matches!(
        service.submit_answer("a").await,
        Err(QuizError::InvalidState(QuizStateError::Completed))
    ));
    assert!(matches!(
        service.advance().await,
        Err(QuizError::InvalidState(QuizStateError::Completed))
    ));
}

#[tokio::test]
async fn empty_directory_cannot_start() {
    let (service, _source) = service_with(&["notes.txt", "readme.md"]);

    assert!(matches!(
        service.start_session(Mode::Subject).await,
        Err(QuizError::EmptyCatalog)
    ));
    assert!(matches!(service.preflight().await, Err(QuizError::EmptyCatalog)));
    assert!(service.session().await.is_none());
}

#[tokio::test]
async fn unreadable_directory_keeps_previous_session() {
    let (service, source) = service_with(&["a.jpg", "b.jpg"]);
    let started = service.start_session(Mode::Multiple).await.unwrap();
    service.submit_answer("nope").await.unwrap();

    source.set_unreadable(true).unwrap();
    let err = service.restart_session().await.unwrap_err();

    assert!(matches!(err, QuizError::DirectoryUnreadable(_)));
    let live = service.session().await.unwrap();
    assert_eq!(live.session_id, started.session_id);
    assert_eq!(live.status.wrong_count, 1);
}

#[tokio::test]
async fn restart_keeps_mode_and_resets_counters() {
    let (service, _source) = service_with(&["a.jpg", "b.jpg", "c.jpg"]);
    let first = service.start_session(Mode::Multiple).await.unwrap();
    service.submit_answer("a").await.unwrap();
    service.advance().await.unwrap();

    let restarted = service.restart_session().await.unwrap();

    assert_ne!(restarted.session_id, first.session_id);
    assert_eq!(restarted.mode, Mode::Multiple);
    assert_eq!(restarted.status.position, 0);
    assert_eq!(restarted.status.score + restarted.status.wrong_count, 0);
    assert!(service.get_result().await.unwrap().wrong_items.is_empty());
}

#[tokio::test]
async fn restart_after_finishing_starts_a_fresh_round() {
    let (service, _source) = service_with(&["a.jpg", "b.jpg", "c.jpg"]);
    let first = service.start_session(Mode::Multiple).await.unwrap();
    let mut outcome = None;
    for _ in 0..3 {
        service.submit_answer("miss").await.unwrap();
        outcome = Some(service.advance().await.unwrap());
    }
    assert!(outcome.is_some_and(|o| o.is_finished()));
    assert_eq!(service.get_result().await.unwrap().wrong_items.len(), 3);

    let restarted = service.restart_session().await.unwrap();

    assert_ne!(restarted.session_id, first.session_id);
    assert_eq!(restarted.mode, Mode::Multiple);
    assert!(!restarted.is_done);
    assert_eq!(restarted.status.position, 0);
    assert_eq!(restarted.status.total, 3);
    assert_eq!(restarted.status.score + restarted.status.wrong_count, 0);

    let question = service.current_question().await.unwrap();
    assert!(!question.answered);
    assert!(question.choices.is_some());
    let result = service.get_result().await.unwrap();
    assert_eq!((result.score, result.wrong_items.len()), (0, 0));
    assert_invariants(&service).await;
}

#[tokio::test]
async fn restart_without_session_uses_subject_mode() {
    let (service, _source) = service_with(&["a.jpg"]);
    let view = service.restart_session().await.unwrap();
    assert_eq!(view.mode, Mode::Subject);
}

#[tokio::test]
async fn multiple_choice_questions_offer_stable_unique_choices() {
    let (service, _source) = service_with(&["a.jpg", "b.jpg", "c.png", "d.gif", "e.webp"]);
    service.start_session(Mode::Multiple).await.unwrap();

    let question = service.current_question().await.unwrap();
    let choices = question.choices.clone().expect("choices in multiple mode");
    assert!(choices.len() <= 4);
    assert!(choices.iter().any(|c| c == question.image_id.canonical_answer()));
    let unique: HashSet<_> = choices.iter().collect();
    assert_eq!(unique.len(), choices.len());

    let again = service.current_question().await.unwrap();
    assert_eq!(again.choices, Some(choices));
}

#[tokio::test]
async fn catalog_is_capped_by_limits() {
    let names: Vec<String> = (0..10).map(|i| format!("img{i}.png")).collect();
    let source = InMemoryImageSource::with_files(names);
    let service = QuizService::new(Arc::new(source), QuizLimits::new(3, 2), fixed_entropy());

    let view = service.start_session(Mode::Multiple).await.unwrap();
    assert_eq!(view.status.total, 3);
    assert_eq!(service.preflight().await.unwrap(), 3);

    let question = service.current_question().await.unwrap();
    assert_eq!(question.choices.map(|c| c.len()), Some(2));
}

#[tokio::test]
async fn images_are_served_only_from_the_live_catalog() {
    let (service, source) = service_with(&["a.jpg"]);
    source.insert_file("secret.png", vec![9]).unwrap();
    source.insert_file("notes.txt", vec![7]).unwrap();

    assert!(matches!(
        service.image(&ImageId::new("a.jpg")).await,
        Err(QuizError::NoActiveSession)
    ));

    service.start_session(Mode::Subject).await.unwrap();
    let question = service.current_question().await.unwrap();
    let asset = service.image(&question.image_id).await.unwrap();
    assert!(!asset.bytes.is_empty());

    assert!(matches!(
        service.image(&ImageId::new("notes.txt")).await,
        Err(QuizError::ImageNotFound(_))
    ));
}

#[tokio::test]
async fn concurrent_answers_record_one_outcome() {
    let (service, _source) = service_with(&["a.jpg", "b.jpg"]);
    let service = Arc::new(service);
    service.start_session(Mode::Subject).await.unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.submit_answer(&format!("guess{i}")).await })
        })
        .collect();

    let mut accepted = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 1);
    let status = service.get_status().await.unwrap();
    assert_eq!(status.score + status.wrong_count, 1);
}

#[tokio::test]
async fn status_serializes_with_diagnostic_keys() {
    let (service, _source) = service_with(&["a.jpg", "b.jpg"]);
    service.start_session(Mode::Subject).await.unwrap();
    service.submit_answer("zzz").await.unwrap();

    let status = service.get_status().await.unwrap();
    let json = serde_json::to_value(status).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "current": 0, "total": 2, "score": 0, "wrong": 1 })
    );
}
