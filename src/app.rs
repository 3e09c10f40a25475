use crate::models::{AppState, Question};
use crate::session::QuizSession;

pub struct App {
    pub state: AppState,
    pool: Vec<Question>,
    question_limit: Option<usize>,
    session: QuizSession,
    selected_option: usize,
    result_scroll: usize,
    show_notes: bool,
}

impl App {
    /// Create an app that draws each attempt from `pool`.
    pub fn with_questions(pool: Vec<Question>) -> Self {
        Self {
            state: AppState::Welcome,
            pool,
            question_limit: None,
            session: QuizSession::default(),
            selected_option: 0,
            result_scroll: 0,
            show_notes: false,
        }
    }

    /// Limit each attempt to `limit` questions. Zero means all.
    pub fn set_question_limit(&mut self, limit: Option<usize>) {
        self.question_limit = limit;
    }

    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    pub fn attempt_size(&self) -> usize {
        match self.question_limit.filter(|&n| n > 0) {
            Some(n) => n.min(self.pool.len()),
            None => self.pool.len(),
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.session.current_question()
    }

    pub fn current_question_number(&self) -> usize {
        self.session.current_index() + 1
    }

    pub fn total_questions(&self) -> usize {
        self.session.len()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn show_notes(&self) -> bool {
        self.show_notes
    }

    pub fn toggle_notes(&mut self) {
        self.show_notes = !self.show_notes;
    }

    pub fn close_notes(&mut self) {
        self.show_notes = false;
    }

    fn option_count(&self) -> usize {
        self.current_question().map_or(0, |q| q.options.len())
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    pub fn start_quiz(&mut self) {
        self.session = QuizSession::prepare(&self.pool, self.question_limit, &mut rand::thread_rng());
        self.selected_option = 0;
        self.result_scroll = 0;
        if !self.session.is_empty() {
            self.state = AppState::Quiz;
        }
    }

    /// Answer the current question with the highlighted option.
    pub fn submit_answer(&mut self) -> bool {
        let index = self.session.current_index();
        let Some(letter) = self
            .current_question()
            .and_then(|q| q.options.get(self.selected_option))
            .map(|option| option.letter.clone())
        else {
            return false;
        };
        self.session.select_answer(index, &letter)
    }

    pub fn next_question(&mut self) {
        if self.session.next() {
            self.selected_option = 0;
        }
    }

    pub fn previous_question(&mut self) {
        if self.session.previous() {
            self.selected_option = 0;
        }
    }

    /// Show results once the last question is answered.
    pub fn finish_quiz(&mut self) -> bool {
        if self.session.can_submit() {
            self.state = AppState::Result;
            true
        } else {
            false
        }
    }

    pub fn calculate_score(&self) -> usize {
        self.session.score()
    }

    pub fn scroll_results_down(&mut self) {
        if self.result_scroll + 1 < self.session.len() {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Discard the attempt and return to the welcome screen.
    pub fn restart(&mut self) {
        self.session.reset();
        self.state = AppState::Welcome;
        self.selected_option = 0;
        self.result_scroll = 0;
    }
}
