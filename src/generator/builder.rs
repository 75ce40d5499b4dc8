//! Password builder - random words joined by spaces

use crate::error::{PassgenError, Result};
use crate::pool::WordPool;
use crate::random::RandomSource;
use crate::types::MAX_COUNT;

/// Separator placed between words
pub const SEPARATOR: char = ' ';

/// Pick `word_count` words uniformly (with replacement) and join them with
/// single spaces.
///
/// A `word_count` of zero is treated as one so the result is never empty.
/// Fails with [`PassgenError::PoolEmpty`] before drawing anything if the pool
/// has no words.
pub fn build_password<R: RandomSource + ?Sized>(
    pool: &WordPool,
    rng: &mut R,
    word_count: usize,
) -> Result<String> {
    if pool.is_empty() {
        return Err(PassgenError::PoolEmpty);
    }

    let word_count = if word_count == 0 {
        tracing::debug!("Word count of zero clamped to one");
        1
    } else {
        word_count
    };

    let capacity = word_count
        .min(MAX_COUNT)
        .saturating_mul(crate::pool::WORD_LENGTH + 1);
    let mut password = String::with_capacity(capacity);
    for i in 0..word_count {
        if i > 0 {
            password.push(SEPARATOR);
        }
        let index = rng.next_below(pool.size());
        password.push_str(pool.word_at(index)?);
    }

    Ok(password)
}

/// Remove every separator from a built password
pub fn strip_separators(password: &str) -> String {
    password.chars().filter(|&c| c != SEPARATOR).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedSource, SeededSource};

    fn tiny_pool() -> WordPool {
        WordPool::with_words(vec!["aah".into(), "aal".into(), "zzz".into()])
    }

    #[test]
    fn test_always_first_word() {
        let mut rng = ScriptedSource::constant(0);
        assert_eq!(build_password(&tiny_pool(), &mut rng, 2).unwrap(), "aah aah");
    }

    #[test]
    fn test_scripted_selection() {
        let mut rng = ScriptedSource::new(vec![2, 1, 0]);
        assert_eq!(
            build_password(&tiny_pool(), &mut rng, 3).unwrap(),
            "zzz aal aah"
        );
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_token_shape() {
        let pool = WordPool::builtin();
        let mut rng = SeededSource::from_seed(2014);
        for count in 1..=8 {
            let password = build_password(&pool, &mut rng, count).unwrap();
            let tokens: Vec<&str> = password.split(SEPARATOR).collect();
            assert_eq!(tokens.len(), count);
            for token in tokens {
                assert_eq!(token.len(), 3);
                assert!(pool.contains(token));
            }
            assert!(!password.starts_with(SEPARATOR));
            assert!(!password.ends_with(SEPARATOR));
        }
    }

    #[test]
    fn test_single_word_has_no_space() {
        let mut rng = SeededSource::from_seed(1);
        for _ in 0..50 {
            let password = build_password(&WordPool::builtin(), &mut rng, 1).unwrap();
            assert!(!password.contains(' '));
        }
    }

    #[test]
    fn test_zero_words_clamped() {
        let mut rng = ScriptedSource::constant(1);
        assert_eq!(build_password(&tiny_pool(), &mut rng, 0).unwrap(), "aal");
    }

    #[test]
    fn test_count_above_capacity_cap() {
        let mut rng = ScriptedSource::constant(0);
        let password = build_password(&tiny_pool(), &mut rng, MAX_COUNT + 1).unwrap();
        assert_eq!(password.split(SEPARATOR).count(), MAX_COUNT + 1);
    }

    #[test]
    fn test_empty_pool() {
        let mut rng = ScriptedSource::constant(0);
        let pool = WordPool::with_words(Vec::new());
        assert_eq!(
            build_password(&pool, &mut rng, 3),
            Err(PassgenError::PoolEmpty)
        );
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_strip_separators() {
        assert_eq!(strip_separators("fox hen owl"), "foxhenowl");
        assert_eq!(strip_separators("fox"), "fox");

        let mut rng = SeededSource::from_seed(3);
        let password = build_password(&WordPool::builtin(), &mut rng, 3).unwrap();
        assert_eq!(strip_separators(&password).len(), 9);
    }
}
