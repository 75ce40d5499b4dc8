//! Password generation
//!
//! Build a password from random pool words, optionally strip the separators,
//! optionally mix the case. The steps always run in that order and share one
//! random source, so word draws for a suggestion come before its case draws.

mod builder;
mod case;

pub use builder::{build_password, strip_separators, SEPARATOR};
pub use case::mix_case;

use crate::error::Result;
use crate::pool::WordPool;
use crate::random::{RandomSource, SeededSource};
use crate::types::{GenerationRequest, Suggestion};

/// Owns a word pool and a random source and turns requests into passwords
pub struct PasswordGenerator<R = SeededSource> {
    pool: WordPool,
    rng: R,
}

impl PasswordGenerator<SeededSource> {
    /// Built-in pool with a time-seeded source
    pub fn new() -> Self {
        Self::with_source(WordPool::builtin(), SeededSource::from_time())
    }
}

impl Default for PasswordGenerator<SeededSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> PasswordGenerator<R> {
    pub fn with_source(pool: WordPool, rng: R) -> Self {
        Self { pool, rng }
    }

    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    /// Space separated password of `word_count` words
    pub fn build_password(&mut self, word_count: usize) -> Result<String> {
        build_password(&self.pool, &mut self.rng, word_count)
    }

    /// Randomise the case of `input`
    pub fn mix_case(&mut self, input: &str) -> String {
        mix_case(&mut self.rng, input)
    }

    /// One password shaped by the request: build, then strip, then mix
    pub fn generate(&mut self, request: &GenerationRequest) -> Result<String> {
        let mut password = self.build_password(request.word_count)?;
        if request.separator_removed {
            password = strip_separators(&password);
        }
        if request.case_mixed {
            password = self.mix_case(&password);
        }
        Ok(password)
    }

    /// A password in all three table presentations.
    /// The mixed case form is derived from the joined form.
    pub fn suggestion(&mut self, word_count: usize) -> Result<Suggestion> {
        let spaced = self.build_password(word_count)?;
        let joined = strip_separators(&spaced);
        let mixed_case = self.mix_case(&joined);
        Ok(Suggestion {
            spaced,
            joined,
            mixed_case,
        })
    }

    /// `request.suggestion_count` suggestions, generated one after another
    pub fn suggestions(&mut self, request: &GenerationRequest) -> Result<Vec<Suggestion>> {
        tracing::debug!(
            words = request.word_count,
            suggestions = request.suggestion_count,
            pool = self.pool.size(),
            "Generating suggestions"
        );
        (0..request.suggestion_count)
            .map(|_| self.suggestion(request.word_count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PassgenError;
    use crate::random::ScriptedSource;

    fn tiny_pool() -> WordPool {
        WordPool::with_words(vec!["aah".into(), "aal".into(), "zzz".into()])
    }

    #[test]
    fn test_generate_plain() {
        let mut gen = PasswordGenerator::with_source(tiny_pool(), ScriptedSource::constant(0));
        let request = GenerationRequest {
            word_count: 2,
            ..Default::default()
        };
        assert_eq!(gen.generate(&request).unwrap(), "aah aah");
    }

    #[test]
    fn test_generate_strips_before_mixing() {
        // words: zzz, aah; then one case draw per letter of "zzzaah"
        let script = vec![2, 0, 0, 1, 0, 1, 0, 1];
        let mut gen = PasswordGenerator::with_source(tiny_pool(), ScriptedSource::new(script));
        let request = GenerationRequest {
            word_count: 2,
            separator_removed: true,
            case_mixed: true,
            ..Default::default()
        };
        assert_eq!(gen.generate(&request).unwrap(), "ZzZaAh");
    }

    #[test]
    fn test_generate_mixed_with_spaces() {
        let mut gen = PasswordGenerator::with_source(tiny_pool(), ScriptedSource::constant(0));
        let request = GenerationRequest {
            word_count: 2,
            case_mixed: true,
            ..Default::default()
        };
        assert_eq!(gen.generate(&request).unwrap(), "AAH AAH");
    }

    #[test]
    fn test_suggestion_forms() {
        let mut gen = PasswordGenerator::with_source(tiny_pool(), ScriptedSource::new(vec![1, 2, 0]));
        let suggestion = gen.suggestion(2).unwrap();
        assert_eq!(suggestion.spaced, "aal zzz");
        assert_eq!(suggestion.joined, "aalzzz");
        assert_eq!(suggestion.mixed_case.to_lowercase(), "aalzzz");
    }

    #[test]
    fn test_suggestions_count() {
        let mut gen = PasswordGenerator::new();
        let request = GenerationRequest {
            word_count: 4,
            suggestion_count: 5,
            ..Default::default()
        };
        let suggestions = gen.suggestions(&request).unwrap();
        assert_eq!(suggestions.len(), 5);
        for s in &suggestions {
            assert_eq!(s.joined.len(), 12);
            assert_eq!(s.spaced.split(' ').count(), 4);
        }
    }

    #[test]
    fn test_empty_pool_fails_fast() {
        let mut gen = PasswordGenerator::with_source(
            WordPool::with_words(Vec::new()),
            ScriptedSource::constant(0),
        );
        assert_eq!(gen.suggestions(&GenerationRequest::default()), Err(PassgenError::PoolEmpty));
    }
}
