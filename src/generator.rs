//! Random password generation.
//!
//! Every generated password satisfies all five strength criteria by
//! construction: one character from each class is placed first, the rest
//! is filled from the full pool, and the buffer is shuffled.

use rand::Rng;
use rand::seq::SliceRandom;
use secrecy::SecretString;

use crate::sections::MIN_LENGTH;

/// Length used when the caller has no preference.
pub const DEFAULT_LENGTH: usize = 12;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*";
const ALL: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";

/// Source of uniform randomness for the generator.
///
/// Implemented for every [`rand::Rng`], so a seeded `StdRng` gives
/// reproducible passwords in tests.
pub trait RandomSource {
    /// Uniform index in `0..upper`. `upper` is never zero.
    ///
    /// Out-of-range answers are reduced modulo `upper` by the generator.
    fn choose_index(&mut self, upper: usize) -> usize;

    /// Uniform permutation of `items` in place.
    fn shuffle_slice<T>(&mut self, items: &mut [T]);
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn choose_index(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }

    fn shuffle_slice<T>(&mut self, items: &mut [T]) {
        items.shuffle(self);
    }
}

fn pick<R: RandomSource + ?Sized>(rng: &mut R, pool: &[u8]) -> u8 {
    pool[rng.choose_index(pool.len()) % pool.len()]
}

/// Generates a password with the thread-local RNG.
///
/// `length` below [`MIN_LENGTH`] is raised to it.
pub fn generate_password(length: usize) -> SecretString {
    generate_password_with(&mut rand::thread_rng(), length)
}

/// Generates a password drawing all randomness from `rng`.
pub fn generate_password_with<R: RandomSource + ?Sized>(rng: &mut R, length: usize) -> SecretString {
    let length = length.max(MIN_LENGTH);

    let mut chars = Vec::with_capacity(length);
    for pool in [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS] {
        chars.push(pick(rng, pool));
    }
    while chars.len() < length {
        chars.push(pick(rng, ALL));
    }
    rng.shuffle_slice(&mut chars);

    #[cfg(feature = "tracing")]
    tracing::debug!("generated password of length {}", length);

    let password: String = chars.into_iter().map(char::from).collect();
    SecretString::new(password.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate_password_strength;
    use crate::types::PasswordStrength;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use secrecy::ExposeSecret;

    #[test]
    fn test_generate_minimum_length_scores_five() {
        for _ in 0..200 {
            let pwd = generate_password(8);
            assert_eq!(pwd.expose_secret().len(), 8);

            let evaluation = evaluate_password_strength(&pwd);
            assert_eq!(evaluation.score.value(), 5, "{:?}", evaluation.feedback);
            assert_eq!(evaluation.strength(), PasswordStrength::Strong);
        }
    }

    #[test]
    fn test_generate_clamps_short_lengths() {
        for requested in [0, 1, 4, 7] {
            assert_eq!(generate_password(requested).expose_secret().len(), MIN_LENGTH);
        }
    }

    #[test]
    fn test_generate_honors_longer_lengths() {
        assert_eq!(generate_password(DEFAULT_LENGTH).expose_secret().len(), 12);
        assert_eq!(generate_password(30).expose_secret().len(), 30);
    }

    #[test]
    fn test_generate_uses_only_pool_characters() {
        let pwd = generate_password(64);
        assert!(pwd.expose_secret().bytes().all(|b| ALL.contains(&b)));
    }

    /// Ignores the bound it is given and never permutes.
    struct OutOfRange;

    impl RandomSource for OutOfRange {
        fn choose_index(&mut self, _upper: usize) -> usize {
            usize::MAX
        }

        fn shuffle_slice<T>(&mut self, _items: &mut [T]) {}
    }

    #[test]
    fn test_out_of_range_source_does_not_panic() {
        let pwd = generate_password_with(&mut OutOfRange, 10);
        assert_eq!(pwd.expose_secret().len(), 10);

        let evaluation = evaluate_password_strength(&pwd);
        assert_eq!(evaluation.score.value(), 5, "{:?}", evaluation.feedback);
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let a = generate_password_with(&mut StdRng::seed_from_u64(42), 16);
        let b = generate_password_with(&mut StdRng::seed_from_u64(42), 16);
        let c = generate_password_with(&mut StdRng::seed_from_u64(7), 16);

        assert_eq!(a.expose_secret(), b.expose_secret());
        assert_ne!(a.expose_secret(), c.expose_secret());
    }

    #[test]
    fn test_required_classes_are_not_pinned_to_the_front() {
        let mut rng = StdRng::seed_from_u64(1);
        let all_lower_first = (0..50).all(|_| {
            let pwd = generate_password_with(&mut rng, 8);
            pwd.expose_secret().as_bytes()[0].is_ascii_lowercase()
        });
        assert!(!all_lower_first);
    }
}
