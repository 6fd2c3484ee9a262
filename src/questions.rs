use crate::shuffle::{sample, shuffle};
use crate::vocabulary::VocabularyWord;
use rand::Rng;

pub const MULTIPLE_CHOICE_COUNT: usize = 10;
pub const MATCHING_COUNT: usize = 8;
pub const TYPING_COUNT: usize = 10;

/// A multiple-choice question: one word, four translation options (fewer for
/// tiny units), and the post-shuffle index of the correct one.
#[derive(Debug, Clone)]
pub struct Question {
    pub word: VocabularyWord,
    pub options: Vec<String>,
    pub correct_index: usize,
}

/// One entry in a matching column. `matched` flips to true exactly once,
/// when the entry is correctly paired with its counterpart.
#[derive(Debug, Clone)]
pub struct MatchPair {
    pub word: VocabularyWord,
    pub matched: bool,
}

impl MatchPair {
    fn new(word: VocabularyWord) -> Self {
        Self {
            word,
            matched: false,
        }
    }
}

/// Builds up to `count` questions, each with 3 distractor translations drawn
/// from other words in the pool. Distractors exclude the target by id only;
/// the distractor count clamps to the pool size so small units never fail.
pub fn build_multiple_choice(
    words: &[VocabularyWord],
    count: usize,
    rng: &mut impl Rng,
) -> Vec<Question> {
    let mut questions = Vec::new();
    for word in sample(words, count, rng) {
        let others: Vec<VocabularyWord> = words
            .iter()
            .filter(|w| w.id != word.id)
            .cloned()
            .collect();
        let mut options: Vec<String> = sample(&others, 3, rng)
            .into_iter()
            .map(|w| w.uzbek)
            .collect();
        options.push(word.uzbek.clone());
        let options = shuffle(&options, rng);
        let correct_index = options
            .iter()
            .position(|o| *o == word.uzbek)
            .unwrap_or_default();

        questions.push(Question {
            word,
            options,
            correct_index,
        });
    }
    questions
}

/// Two columns over the same sampled word set, shuffled independently so
/// matching positions never line up by construction.
pub fn build_matching_set(
    words: &[VocabularyWord],
    count: usize,
    rng: &mut impl Rng,
) -> (Vec<MatchPair>, Vec<MatchPair>) {
    let game_words = sample(words, count, rng);

    let english = shuffle(&game_words, rng)
        .into_iter()
        .map(MatchPair::new)
        .collect();
    let uzbek = shuffle(&game_words, rng)
        .into_iter()
        .map(MatchPair::new)
        .collect();

    (english, uzbek)
}

/// Sampled words in shuffle order; the typing mode quizzes them as-is.
pub fn build_typing_set(
    words: &[VocabularyWord],
    count: usize,
    rng: &mut impl Rng,
) -> Vec<VocabularyWord> {
    sample(words, count, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn word(id: u32, english: &str, uzbek: &str) -> VocabularyWord {
        VocabularyWord {
            id,
            english: english.to_string(),
            uzbek: uzbek.to_string(),
        }
    }

    fn test_words() -> Vec<VocabularyWord> {
        vec![
            word(1, "book", "kitob"),
            word(2, "water", "suv"),
            word(3, "bread", "non"),
            word(4, "apple", "olma"),
            word(5, "milk", "sut"),
            word(6, "tea", "choy"),
        ]
    }

    #[test]
    fn test_multiple_choice_has_one_correct_and_three_distinct_distractors() {
        let words = test_words();
        let mut rng = StdRng::seed_from_u64(3);

        for question in build_multiple_choice(&words, 10, &mut rng) {
            assert_eq!(question.options.len(), 4);
            assert_eq!(
                question.options[question.correct_index],
                question.word.uzbek
            );

            let correct_count = question
                .options
                .iter()
                .filter(|o| **o == question.word.uzbek)
                .count();
            assert_eq!(correct_count, 1);

            let mut distractors: Vec<&String> = question
                .options
                .iter()
                .filter(|o| **o != question.word.uzbek)
                .collect();
            distractors.sort();
            distractors.dedup();
            assert_eq!(distractors.len(), 3);
        }
    }

    #[test]
    fn test_multiple_choice_count_clamps_to_pool() {
        let words = test_words();
        let mut rng = StdRng::seed_from_u64(3);

        let questions = build_multiple_choice(&words, 10, &mut rng);

        assert_eq!(questions.len(), words.len());
    }

    #[test]
    fn test_multiple_choice_small_unit_clamps_distractors() {
        let words = vec![word(1, "book", "kitob"), word(2, "water", "suv")];
        let mut rng = StdRng::seed_from_u64(3);

        let questions = build_multiple_choice(&words, 10, &mut rng);

        assert_eq!(questions.len(), 2);
        for question in questions {
            // Only one other word exists, so two options total.
            assert_eq!(question.options.len(), 2);
            assert_eq!(
                question.options[question.correct_index],
                question.word.uzbek
            );
        }
    }

    #[test]
    fn test_multiple_choice_single_word_unit() {
        let words = vec![word(1, "book", "kitob")];
        let mut rng = StdRng::seed_from_u64(3);

        let questions = build_multiple_choice(&words, 10, &mut rng);

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options, vec!["kitob".to_string()]);
        assert_eq!(questions[0].correct_index, 0);
    }

    #[test]
    fn test_matching_set_columns_cover_same_words() {
        let words = test_words();
        let mut rng = StdRng::seed_from_u64(5);

        let (english, uzbek) = build_matching_set(&words, 4, &mut rng);

        assert_eq!(english.len(), 4);
        assert_eq!(uzbek.len(), 4);

        let mut left_ids: Vec<u32> = english.iter().map(|p| p.word.id).collect();
        let mut right_ids: Vec<u32> = uzbek.iter().map(|p| p.word.id).collect();
        left_ids.sort_unstable();
        right_ids.sort_unstable();
        assert_eq!(left_ids, right_ids);

        assert!(english.iter().all(|p| !p.matched));
        assert!(uzbek.iter().all(|p| !p.matched));
    }

    #[test]
    fn test_matching_set_clamps_to_pool() {
        let words = test_words();
        let mut rng = StdRng::seed_from_u64(5);

        let (english, uzbek) = build_matching_set(&words, 50, &mut rng);

        assert_eq!(english.len(), words.len());
        assert_eq!(uzbek.len(), words.len());
    }

    #[test]
    fn test_typing_set_samples_without_repetition() {
        let words = test_words();
        let mut rng = StdRng::seed_from_u64(11);

        let set = build_typing_set(&words, 4, &mut rng);

        assert_eq!(set.len(), 4);
        let mut ids: Vec<u32> = set.iter().map(|w| w.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_typing_set_clamps_to_pool() {
        let words = test_words();
        let mut rng = StdRng::seed_from_u64(11);

        assert_eq!(build_typing_set(&words, 100, &mut rng).len(), words.len());
    }
}
