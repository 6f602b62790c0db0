//! Randomized ticker strip.
//!
//! The strip shows the phrase list several times in a row, each copy in its
//! own random order, so the CSS loop has no visible seam. Randomness comes in
//! from the caller: `Math.random()` in the browser, a seeded RNG in tests.

use rand::Rng;

/// Durstenfeld's in-place Fisher–Yates shuffle.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// `repetitions` independently shuffled copies of `phrases`, end to end.
pub fn sequence<S, R>(phrases: &[S], repetitions: usize, rng: &mut R) -> Vec<String>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut strip = Vec::with_capacity(phrases.len() * repetitions);
    for _ in 0..repetitions {
        let mut round: Vec<String> = phrases.iter().map(|p| p.as_ref().to_string()).collect();
        shuffle(&mut round, rng);
        strip.extend(round);
    }
    strip
}
