use rand::seq::SliceRandom;
use rand::Rng;

/// Returns a uniformly shuffled copy of `items`, leaving the input untouched.
/// The RNG is injected so callers (and tests) control the randomness source.
pub fn shuffle<T: Clone>(items: &[T], rng: &mut impl Rng) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Up to `count` distinct elements in random order. Short inputs yield
/// everything they have rather than an error.
pub fn sample<T: Clone>(items: &[T], count: usize, rng: &mut impl Rng) -> Vec<T> {
    let mut sampled = shuffle(items, rng);
    sampled.truncate(count);
    sampled
}
