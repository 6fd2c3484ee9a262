use super::GameSummary;
use crate::questions::{build_matching_set, MatchPair};
use crate::vocabulary::VocabularyWord;
use rand::Rng;

/// How long a resolved comparison stays on screen before the selections
/// clear, in runtime ticks (100ms each).
pub const RESOLVE_DELAY_TICKS: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Correct,
    Wrong,
}

/// A resolved comparison waiting out its display delay. While one of these
/// is live, new selections are ignored so a rapid second click cannot race
/// the clear.
#[derive(Debug, Clone, Copy)]
pub struct PendingResolution {
    pub outcome: MatchOutcome,
    pub english_index: usize,
    pub uzbek_index: usize,
    ticks_left: u8,
}

/// Two-column matching session. English terms on the left, Uzbek
/// translations on the right; an English selection must exist before an
/// Uzbek one is accepted. Each completed comparison counts as an attempt.
#[derive(Debug, Clone)]
pub struct MatchingSession {
    words: Vec<VocabularyWord>,
    count: usize,
    pub english: Vec<MatchPair>,
    pub uzbek: Vec<MatchPair>,
    pub selected_english: Option<usize>,
    pub selected_uzbek: Option<usize>,
    pub pending: Option<PendingResolution>,
    pub score: usize,
    pub attempts: usize,
    completed: bool,
}

impl MatchingSession {
    pub fn new(words: &[VocabularyWord], count: usize, rng: &mut impl Rng) -> Self {
        let (english, uzbek) = build_matching_set(words, count, rng);
        Self {
            words: words.to_vec(),
            count,
            english,
            uzbek,
            selected_english: None,
            selected_uzbek: None,
            pending: None,
            score: 0,
            attempts: 0,
            completed: false,
        }
    }

    pub fn total(&self) -> usize {
        self.english.len()
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn matched_count(&self) -> usize {
        self.english.iter().filter(|p| p.matched).count()
    }

    /// Picks (or re-picks) an English term. Rejected while an Uzbek
    /// selection or a pending resolution is in flight.
    pub fn select_english(&mut self, index: usize) {
        if self.completed || self.pending.is_some() || self.selected_uzbek.is_some() {
            return;
        }
        if !self.english.get(index).is_some_and(|p| !p.matched) {
            return;
        }

        self.selected_english = Some(index);
    }

    /// Picks an Uzbek translation and resolves the comparison. Only
    /// accepted once an English selection exists.
    pub fn select_uzbek(&mut self, index: usize) {
        if self.completed || self.pending.is_some() {
            return;
        }
        let Some(english_index) = self.selected_english else {
            return;
        };
        if !self.uzbek.get(index).is_some_and(|p| !p.matched) {
            return;
        }

        self.selected_uzbek = Some(index);
        self.attempts += 1;

        let outcome = if self.english[english_index].word.id == self.uzbek[index].word.id {
            self.score += 1;
            MatchOutcome::Correct
        } else {
            MatchOutcome::Wrong
        };

        self.pending = Some(PendingResolution {
            outcome,
            english_index,
            uzbek_index: index,
            ticks_left: RESOLVE_DELAY_TICKS,
        });
    }

    /// Advances the display delay. When it expires the resolution is
    /// applied: a correct pair is marked matched on both sides and the
    /// selections clear. Completion is checked against the freshly updated
    /// matched set and the summary returned, exactly once.
    pub fn on_tick(&mut self) -> Option<GameSummary> {
        let mut pending = self.pending?;

        pending.ticks_left = pending.ticks_left.saturating_sub(1);
        if pending.ticks_left > 0 {
            self.pending = Some(pending);
            return None;
        }

        if pending.outcome == MatchOutcome::Correct {
            self.english[pending.english_index].matched = true;
            self.uzbek[pending.uzbek_index].matched = true;
        }
        self.selected_english = None;
        self.selected_uzbek = None;
        self.pending = None;

        if pending.outcome == MatchOutcome::Correct && self.matched_count() == self.english.len() {
            self.completed = true;
            return Some(GameSummary {
                score: self.score,
                total: self.english.len(),
            });
        }

        None
    }

    /// Fresh columns, zeroed counters. Discards any pending resolution so a
    /// stale delay cannot touch the new session's state.
    pub fn restart(&mut self, rng: &mut impl Rng) {
        let (english, uzbek) = build_matching_set(&self.words, self.count, rng);
        self.english = english;
        self.uzbek = uzbek;
        self.selected_english = None;
        self.selected_uzbek = None;
        self.pending = None;
        self.score = 0;
        self.attempts = 0;
        self.completed = false;
    }
}
