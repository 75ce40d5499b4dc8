//! Text rendering for the terminal

use std::fmt;

use crate::error::Result;
use crate::types::{GenerationRequest, Suggestion};

const TITLE: &str = "THREE WORD - PASSWORD GENERATOR";
const UNDERLINE: &str = "═══════════════════════════════";

/// Banner, one row per suggestion, then the usage hint
pub fn render_table(pool_size: usize, request: &GenerationRequest, suggestions: &[Suggestion]) -> String {
    SuggestionTable {
        pool_size,
        request,
        suggestions,
    }
    .to_string()
}

struct SuggestionTable<'a> {
    pool_size: usize,
    request: &'a GenerationRequest,
    suggestions: &'a [Suggestion],
}

impl fmt::Display for SuggestionTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "\t\t\t{}", TITLE)?;
        writeln!(f, "\t\t\t{}", UNDERLINE)?;
        writeln!(f, "• Number of three letter words available in the pool is: {}", self.pool_size)?;
        writeln!(f, "• Number of three letter words to include in the suggested password is: {}", self.request.word_count)?;
        writeln!(f, "\t• Password character length will therefore be: {}", self.request.password_length())?;
        writeln!(f, "• Mixed case passwords to be provided: true")?;
        writeln!(f, "• Offering {} suggested passwords for your consideration:", self.suggestions.len())?;
        writeln!(f)?;

        for s in self.suggestions {
            writeln!(f, "\t| {} |   | {} |   | {} |", s.spaced, s.joined, s.mixed_case)?;
        }

        writeln!(f)?;
        writeln!(f, "To change the password suggestion output shown above, use the command line options.")?;
        writeln!(f, "Run the program as follows for more help:  passgen --help")?;
        writeln!(f)?;
        writeln!(f, "All is well")
    }
}

/// Pretty printed JSON array of suggestions
pub fn render_json(suggestions: &[Suggestion]) -> Result<String> {
    Ok(serde_json::to_string_pretty(suggestions)?)
}

/// Version banner
pub fn version_text() -> String {
    format!(
        "\n Running passgen version {}\n - Source code for passgen: {}\n\nAll is well\n",
        crate::VERSION,
        env!("CARGO_PKG_REPOSITORY"),
    )
}

/// Long description printed by `--about`
pub const ABOUT_TEXT: &str = "
	THREE WORD - PASSWORD GENERATOR
	═══════════════════════════════

	About
	═════
	Password suggestions are built from a pool of over 1,000 three letter
	English words. Words are picked from the pool at random and shown so you
	can choose one to use as a password.

	Join the words together (without the spaces) to get a password of at least
	nine characters. Longer combinations are stronger, although not every site
	accepts really long passwords.

	You can add digits and punctuation too, but a simple password that is easy
	to remember, and that you replace every few weeks with a fresh one, is
	usually the better habit.

	Are These Passwords Secure?
	═══════════════════════════
	They look simple to a person, but they are random picks rather than a
	single dictionary word or a common name, which makes them hard for a
	computer to guess. A longer password that is easy to remember, and so
	easy to change often, beats a short complex one.

	Note: the random source is seeded from the clock. These are memorable
	suggestions, not cryptographic secrets.

	So How Many Possible Passwords Are There?
	═════════════════════════════════════════
	With over 1,000 words in the pool, three words give more than
	1,000 x 1,000 x 1,000 = 1,000,000,000 (one billion) possibilities.

	Mixed case raises that further. Four words (12 characters) give more than
	1,000,000,000,000 (one thousand billion) possibilities, in lower case
	alone.

	References
	══════════
	Thomas Baekdal - The Usability of Passwords - FAQ
	 - http://www.baekdal.com/insights/the-usability-of-passwords-faq
	Steve Gibson - GRC 'How Big is Your Haystack?'
	 - https://www.grc.com/haystack.htm
";

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Suggestion> {
        vec![Suggestion {
            spaced: "fox hen owl".to_string(),
            joined: "foxhenowl".to_string(),
            mixed_case: "FoxHEnoWl".to_string(),
        }]
    }

    #[test]
    fn test_table() {
        let request = GenerationRequest {
            word_count: 3,
            suggestion_count: 1,
            ..Default::default()
        };
        let table = render_table(1312, &request, &sample());
        assert!(table.contains("available in the pool is: 1312"));
        assert!(table.contains("will therefore be: 9"));
        assert!(table.contains("Offering 1 suggested passwords"));
        assert!(table.contains("\t| fox hen owl |   | foxhenowl |   | FoxHEnoWl |\n"));
        assert!(table.ends_with("All is well\n"));
    }

    #[test]
    fn test_table_row_per_suggestion() {
        let mut suggestions = sample();
        suggestions.push(Suggestion {
            spaced: "aah zzz".to_string(),
            joined: "aahzzz".to_string(),
            mixed_case: "AahZzz".to_string(),
        });
        let table = render_table(3, &GenerationRequest::default(), &suggestions);
        assert_eq!(table.lines().filter(|l| l.starts_with("\t| ")).count(), 2);
        assert!(table.starts_with("\n\t\t\tTHREE WORD - PASSWORD GENERATOR\n"));
    }

    #[test]
    fn test_json() {
        let json = render_json(&sample()).unwrap();
        let parsed: Vec<Suggestion> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_version() {
        let text = version_text();
        assert!(text.contains(crate::VERSION));
        assert!(text.contains("All is well"));
    }
}
