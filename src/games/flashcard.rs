use crate::vocabulary::VocabularyWord;

/// Linear card browser over a unit's words, in unit order. Not scored.
/// Navigation clamps at both ends and every move lands on the front face.
#[derive(Debug, Clone)]
pub struct FlashcardSession {
    words: Vec<VocabularyWord>,
    pub current_index: usize,
    pub is_flipped: bool,
}

impl FlashcardSession {
    pub fn new(words: &[VocabularyWord]) -> Self {
        Self {
            words: words.to_vec(),
            current_index: 0,
            is_flipped: false,
        }
    }

    pub fn current(&self) -> Option<&VocabularyWord> {
        self.words.get(self.current_index)
    }

    pub fn total(&self) -> usize {
        self.words.len()
    }

    pub fn flip(&mut self) {
        self.is_flipped = !self.is_flipped;
    }

    pub fn next(&mut self) {
        if self.current_index + 1 < self.words.len() {
            self.current_index += 1;
            self.is_flipped = false;
        }
    }

    pub fn prev(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
            self.is_flipped = false;
        }
    }

    pub fn restart(&mut self) {
        self.current_index = 0;
        self.is_flipped = false;
    }
}
