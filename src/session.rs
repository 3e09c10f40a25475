//! State of one quiz attempt.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::models::Question;

/// How a question stands in the current attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Unanswered,
    Correct,
    Wrong,
}

/// Shuffles `questions` uniformly (Fisher-Yates) and returns them.
pub fn shuffle<R: Rng + ?Sized>(mut questions: Vec<Question>, rng: &mut R) -> Vec<Question> {
    questions.shuffle(rng);
    questions
}

/// Keeps the first `min(n, len)` questions.
pub fn limit(mut questions: Vec<Question>, n: usize) -> Vec<Question> {
    questions.truncate(n);
    questions
}

/// Counts answers matching their question's first correct option.
pub fn score(questions: &[Question], answers: &[Option<String>]) -> usize {
    questions
        .iter()
        .zip(answers)
        .filter(|(question, answer)| is_correct(question, answer.as_deref()))
        .count()
}

fn is_correct(question: &Question, answer: Option<&str>) -> bool {
    matches!((answer, question.correct_letter()), (Some(given), Some(expected)) if given == expected)
}

/// Questions, write-once answers and a navigation cursor for one attempt.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    questions: Vec<Question>,
    answers: Vec<Option<String>>,
    current_index: usize,
}

impl QuizSession {
    /// Starts a session over `questions` in the given order.
    pub fn new(questions: Vec<Question>) -> Self {
        let answers = vec![None; questions.len()];
        Self {
            questions,
            answers,
            current_index: 0,
        }
    }

    /// Starts a session over a shuffled copy of `pool`, keeping at most
    /// `count` questions. `None` or zero keeps all of them.
    pub fn prepare<R: Rng + ?Sized>(pool: &[Question], count: Option<usize>, rng: &mut R) -> Self {
        let mut questions = shuffle(pool.to_vec(), rng);
        if let Some(n) = count.filter(|&n| n > 0) {
            questions = limit(questions, n);
        }
        debug!(pool = pool.len(), selected = questions.len(), "prepared quiz session");
        Self::new(questions)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Option<String>] {
        &self.answers
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(index).and_then(|answer| answer.as_deref())
    }

    /// Records `letter` for question `index`.
    ///
    /// The first answer is final: returns `false` without changing anything
    /// when the question is already answered or does not exist.
    pub fn select_answer(&mut self, index: usize, letter: &str) -> bool {
        let Some(slot) = self.answers.get_mut(index) else {
            return false;
        };
        if slot.is_some() {
            debug!(index, "ignoring repeated answer");
            return false;
        }
        *slot = Some(letter.to_string());
        debug!(index, letter, "answer recorded");
        true
    }

    pub fn outcome(&self, index: usize) -> Outcome {
        let Some(question) = self.questions.get(index) else {
            return Outcome::Unanswered;
        };
        match self.answer(index) {
            None => Outcome::Unanswered,
            Some(given) if is_correct(question, Some(given)) => Outcome::Correct,
            Some(_) => Outcome::Wrong,
        }
    }

    pub fn has_next(&self) -> bool {
        self.current_index + 1 < self.questions.len()
    }

    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Moves to the next question. Returns whether the cursor moved.
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    /// Moves to the previous question. Returns whether the cursor moved.
    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    /// True on the last question once it has been answered, or right away
    /// when it has no options to choose from.
    pub fn can_submit(&self) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };
        !self.has_next()
            && (question.options.is_empty() || self.answer(self.current_index).is_some())
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|answer| answer.is_some()).count()
    }

    pub fn score(&self) -> usize {
        score(&self.questions, &self.answers)
    }

    /// Discards questions, answers and the cursor.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::models::QuestionOption;

    fn question(text: &str, correct: &str) -> Question {
        Question {
            text: text.to_string(),
            options: ["A", "B", "C"]
                .iter()
                .map(|letter| QuestionOption::new(*letter, *letter, *letter == correct))
                .collect(),
        }
    }

    fn session() -> QuizSession {
        QuizSession::new(vec![question("one", "A"), question("two", "B"), question("three", "C")])
    }

    #[test]
    fn test_answers_are_write_once() {
        let mut session = session();
        assert!(session.select_answer(0, "B"));
        assert!(!session.select_answer(0, "A"));
        assert_eq!(session.answer(0), Some("B"));
    }

    #[test]
    fn test_out_of_range_answer_is_ignored() {
        let mut session = session();
        assert!(!session.select_answer(7, "A"));
        assert_eq!(session.answered_count(), 0);
    }

    #[test]
    fn test_score_counts_matching_answers() {
        let mut session = session();
        session.select_answer(0, "A");
        session.select_answer(1, "C");
        session.select_answer(2, "C");
        assert_eq!(session.score(), 2);
        assert_eq!(session.outcome(0), Outcome::Correct);
        assert_eq!(session.outcome(1), Outcome::Wrong);
    }

    #[test]
    fn test_score_uses_first_correct_option() {
        let mut question = question("multi", "A");
        question.options[1].is_correct = true;
        let questions = vec![question.clone(), question];
        let answers = vec![Some("A".to_string()), Some("B".to_string())];
        assert_eq!(score(&questions, &answers), 1);
    }

    #[test]
    fn test_question_without_correct_option_never_scores() {
        let questions = vec![Question::new("none")];
        assert_eq!(score(&questions, &[Some(String::new())]), 0);
        assert_eq!(score(&questions, &[None]), 0);
    }

    #[test]
    fn test_navigation_clamps() {
        let mut session = session();
        assert!(!session.previous());
        assert!(session.next());
        assert!(session.next());
        assert!(!session.next());
        assert_eq!(session.current_index(), 2);
        assert!(session.previous());
        assert_eq!(session.current_question().unwrap().text, "two");
    }

    #[test]
    fn test_can_submit_only_on_answered_last_question() {
        let mut session = session();
        session.select_answer(2, "C");
        assert!(!session.can_submit());
        session.next();
        session.next();
        assert!(session.can_submit());
    }

    #[test]
    fn test_last_question_without_options_can_be_submitted() {
        let mut session = QuizSession::new(vec![question("one", "A"), Question::new("bare")]);
        session.select_answer(0, "A");
        assert!(!session.can_submit());
        session.next();
        assert!(session.can_submit());
        assert_eq!(session.score(), 1);
        assert_eq!(session.outcome(1), Outcome::Unanswered);
    }

    #[test]
    fn test_reset_discards_everything() {
        let mut session = session();
        session.select_answer(0, "A");
        session.next();
        session.reset();
        assert!(session.is_empty());
        assert!(session.answers().is_empty());
        assert_eq!(session.current_index(), 0);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn test_limit() {
        let questions = session().questions().to_vec();
        assert_eq!(limit(questions.clone(), 2).len(), 2);
        assert_eq!(limit(questions.clone(), 10).len(), 3);
        assert!(limit(questions, 0).is_empty());
    }

    #[test]
    fn test_prepare_limits_and_keeps_all_on_zero() {
        let pool = session().questions().to_vec();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(QuizSession::prepare(&pool, Some(2), &mut rng).len(), 2);
        assert_eq!(QuizSession::prepare(&pool, Some(0), &mut rng).len(), 3);
        assert_eq!(QuizSession::prepare(&pool, None, &mut rng).len(), 3);
    }

    #[test]
    fn test_prepare_does_not_reorder_pool() {
        let pool = session().questions().to_vec();
        let mut rng = StdRng::seed_from_u64(1);
        let _ = QuizSession::prepare(&pool, None, &mut rng);
        let prompts: Vec<&str> = pool.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(prompts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_shuffle_is_roughly_uniform() {
        const TRIALS: usize = 60_000;
        let pool = session().questions().to_vec();
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<Vec<String>, usize> = HashMap::new();

        for _ in 0..TRIALS {
            let order: Vec<String> = shuffle(pool.clone(), &mut rng)
                .into_iter()
                .map(|q| q.text)
                .collect();
            *counts.entry(order).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        let expected = TRIALS / 6;
        for count in counts.values() {
            let deviation = (*count as f64 - expected as f64).abs() / expected as f64;
            assert!(deviation < 0.05, "permutation frequency {count} too far from {expected}");
        }
    }
}
