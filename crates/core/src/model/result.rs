use serde::{Deserialize, Serialize};

use super::session::{QuizSession, WrongItem, percent};

/// Final statistics for a session plus the review list of misses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub rate_percent: u32,
    pub wrong_items: Vec<WrongItem>,
}

impl QuizResult {
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.wrong_items.is_empty() && self.score == self.total
    }
}

/// Summarize a session.
///
/// `rate_percent` is `floor(score * 100 / total)` and `0` for an empty total.
/// Wrong items keep the order in which they were answered.
#[must_use]
pub fn summarize(session: &QuizSession) -> QuizResult {
    let score = session.score();
    let total = session.total();
    QuizResult {
        score,
        total,
        rate_percent: percent(score, total),
        wrong_items: session.wrong().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ImageCatalog, ImageId, Mode};

    fn session(names: &[&str]) -> QuizSession {
        let catalog =
            ImageCatalog::from_ordered(names.iter().map(|name| ImageId::new(*name)).collect());
        QuizSession::new(catalog, Mode::Subject).unwrap()
    }

    #[test]
    fn summary_reports_rate_and_wrong_items() {
        let mut session = session(&["a.jpg", "b.jpg"]);
        session.answer("a").unwrap();
        session.advance().unwrap();
        session.answer("wrong").unwrap();
        session.advance().unwrap();

        let result = summarize(&session);

        assert_eq!(result.score, 1);
        assert_eq!(result.total, 2);
        assert_eq!(result.rate_percent, 50);
        assert_eq!(result.wrong_items.len(), 1);
        assert_eq!(result.wrong_items[0].image_id, ImageId::new("b.jpg"));
        assert_eq!(result.wrong_items[0].answer, "b");
        assert_eq!(result.wrong_items[0].user_input, "wrong");
        assert!(!result.is_perfect());
    }

    #[test]
    fn rate_rounds_down() {
        let mut session = session(&["a.jpg", "b.jpg", "c.jpg"]);
        for answer in ["a", "b", "x"] {
            session.answer(answer).unwrap();
            session.advance().unwrap();
        }

        assert_eq!(summarize(&session).rate_percent, 66);
    }

    #[test]
    fn wrong_items_keep_answer_order() {
        let mut session = session(&["a.jpg", "b.jpg", "c.jpg"]);
        for answer in ["1", "2", "3"] {
            session.answer(answer).unwrap();
            session.advance().unwrap();
        }

        let inputs: Vec<_> = summarize(&session)
            .wrong_items
            .into_iter()
            .map(|item| item.user_input)
            .collect();
        assert_eq!(inputs, vec!["1", "2", "3"]);
    }

    #[test]
    fn zero_total_rate_is_zero() {
        assert_eq!(percent(0, 0), 0);
    }
}
