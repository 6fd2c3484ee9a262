use super::GameSummary;
use crate::answer::{is_exact_match, is_lenient_match};
use crate::questions::build_typing_set;
use crate::vocabulary::VocabularyWord;
use rand::Rng;

/// Typing quiz session: the Uzbek translation is shown and the English term
/// is typed back. Submit and the Enter key funnel through the same method,
/// so both triggers share one set of guards.
#[derive(Debug, Clone)]
pub struct TypingSession {
    words: Vec<VocabularyWord>,
    count: usize,
    pub prompts: Vec<VocabularyWord>,
    pub current_index: usize,
    pub input: String,
    pub revealed: bool,
    pub last_correct: Option<bool>,
    /// Substring-of-the-answer signal, surfaced for UI feedback only.
    /// Scoring ignores it.
    pub last_lenient: Option<bool>,
    pub score: usize,
    completed: bool,
}

impl TypingSession {
    pub fn new(words: &[VocabularyWord], count: usize, rng: &mut impl Rng) -> Self {
        let prompts = build_typing_set(words, count, rng);
        Self {
            words: words.to_vec(),
            count,
            prompts,
            current_index: 0,
            input: String::new(),
            revealed: false,
            last_correct: None,
            last_lenient: None,
            score: 0,
            completed: false,
        }
    }

    pub fn current(&self) -> Option<&VocabularyWord> {
        self.prompts.get(self.current_index)
    }

    pub fn total(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn push_char(&mut self, c: char) {
        if self.revealed || self.completed {
            return;
        }
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        if self.revealed || self.completed {
            return;
        }
        self.input.pop();
    }

    /// Evaluates the typed answer against the English term. A no-op on
    /// blank input, after reveal, or after completion.
    pub fn submit(&mut self) {
        if self.revealed || self.completed || self.input.trim().is_empty() {
            return;
        }
        let Some(word) = self.prompts.get(self.current_index) else {
            return;
        };

        let correct = is_exact_match(&self.input, &word.english);
        self.last_correct = Some(correct);
        self.last_lenient = Some(is_lenient_match(&self.input, &word.english));
        if correct {
            self.score += 1;
        }
        self.revealed = true;
    }

    /// Moves past a revealed answer; completes with the summary, exactly
    /// once, on the last word.
    pub fn advance(&mut self) -> Option<GameSummary> {
        if !self.revealed || self.completed {
            return None;
        }

        if self.current_index + 1 < self.prompts.len() {
            self.current_index += 1;
            self.input.clear();
            self.revealed = false;
            self.last_correct = None;
            self.last_lenient = None;
            None
        } else {
            self.completed = true;
            Some(GameSummary {
                score: self.score,
                total: self.prompts.len(),
            })
        }
    }

    /// Fresh prompts, zeroed score, cleared input.
    pub fn restart(&mut self, rng: &mut impl Rng) {
        self.prompts = build_typing_set(&self.words, self.count, rng);
        self.current_index = 0;
        self.input.clear();
        self.revealed = false;
        self.last_correct = None;
        self.last_lenient = None;
        self.score = 0;
        self.completed = false;
    }
}
