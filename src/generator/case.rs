//! Case mixer

use crate::random::RandomSource;

/// Width of the per-character draw; an even result upper-cases the character
const CASE_DRAW_RANGE: usize = 100;

/// Randomly upper-case each character of `input`.
///
/// Every character gets its own draw from `[0, 100)`: even upper-cases it, odd
/// leaves it alone. Characters without an upper-case form (digits, spaces)
/// come through unchanged whatever the draw, as do characters whose upper-case
/// form is more than one character or a different UTF-8 width. The output is
/// always the same byte length as the input.
pub fn mix_case<R: RandomSource + ?Sized>(rng: &mut R, input: &str) -> String {
    let mut mixed = String::with_capacity(input.len());
    for c in input.chars() {
        if rng.next_below(CASE_DRAW_RANGE) % 2 == 0 {
            mixed.push(single_upper(c));
        } else {
            mixed.push(c);
        }
    }
    mixed
}

/// Upper-case form of `c` when it is a single character of the same encoded
/// width, otherwise `c` itself.
fn single_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) if u.len_utf8() == c.len_utf8() => u,
        _ => c,
    }
}
