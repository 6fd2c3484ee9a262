use super::GameSummary;
use crate::questions::{build_multiple_choice, Question};
use crate::vocabulary::VocabularyWord;
use rand::Rng;

/// Multiple-choice quiz session. One answer per question: the first pick is
/// recorded and revealed, later picks are ignored until `advance`.
#[derive(Debug, Clone)]
pub struct MultipleChoiceSession {
    words: Vec<VocabularyWord>,
    count: usize,
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub selected: Option<usize>,
    pub revealed: bool,
    pub score: usize,
    completed: bool,
}

impl MultipleChoiceSession {
    pub fn new(words: &[VocabularyWord], count: usize, rng: &mut impl Rng) -> Self {
        let questions = build_multiple_choice(words, count, rng);
        Self {
            words: words.to_vec(),
            count,
            questions,
            current_index: 0,
            selected: None,
            revealed: false,
            score: 0,
            completed: false,
        }
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Records the pick and reveals the outcome. Ignored once revealed,
    /// after completion, or for an out-of-range option.
    pub fn answer(&mut self, index: usize) {
        if self.revealed || self.completed {
            return;
        }
        let Some(question) = self.questions.get(self.current_index) else {
            return;
        };
        if index >= question.options.len() {
            return;
        }

        self.selected = Some(index);
        self.revealed = true;
        if index == question.correct_index {
            self.score += 1;
        }
    }

    /// Moves past a revealed question. On the last question the session
    /// completes and the summary is returned, exactly once.
    pub fn advance(&mut self) -> Option<GameSummary> {
        if !self.revealed || self.completed {
            return None;
        }

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.selected = None;
            self.revealed = false;
            None
        } else {
            self.completed = true;
            Some(GameSummary {
                score: self.score,
                total: self.questions.len(),
            })
        }
    }

    /// Fresh questions, zeroed score, back to the first question.
    pub fn restart(&mut self, rng: &mut impl Rng) {
        self.questions = build_multiple_choice(&self.words, self.count, rng);
        self.current_index = 0;
        self.selected = None;
        self.revealed = false;
        self.score = 0;
        self.completed = false;
    }
}
