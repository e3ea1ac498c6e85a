use cardsmith_core::{RandomSource, is_valid_checksum};

/// Default card number length, check digit included.
pub const DEFAULT_LENGTH: usize = 16;

const WILDCARD: char = 'x';

/// Expands a masked pattern such as `450875xxxxxxxxxx` into a
/// checksum-valid digit string of at least `total_length` digits.
///
/// Characters other than digits and the `x`/`X` wildcard are dropped. Short
/// patterns are padded with random digits up to `total_length - 1`, each
/// wildcard is replaced by a random digit, and the smallest digit that
/// satisfies the checksum is appended. Patterns already at or beyond the
/// target length are kept whole.
pub fn expand_pattern(
    pattern: &str,
    total_length: usize,
    rng: &mut (impl RandomSource + ?Sized),
) -> String {
    let mut masked: String = pattern
        .chars()
        .filter(|ch| ch.is_ascii_digit() || ch.eq_ignore_ascii_case(&WILDCARD))
        .collect();

    let payload_length = total_length.saturating_sub(1);
    while masked.chars().count() < payload_length {
        masked.push(rng.digit());
    }

    let payload: String = masked
        .chars()
        .map(|ch| {
            if ch.eq_ignore_ascii_case(&WILDCARD) {
                rng.digit()
            } else {
                ch
            }
        })
        .collect();

    let check = (0..=9)
        .find(|digit| is_valid_checksum(&format!("{payload}{digit}")))
        .unwrap_or(0);
    format!("{payload}{check}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardsmith_core::seeded_rng;

    #[test]
    fn separators_are_stripped() {
        let mut rng = seeded_rng(3);
        let number = expand_pattern("4111-1111 1111-111", 16, &mut rng);
        assert_eq!(number, "4111111111111111");
    }

    #[test]
    fn empty_pattern_length_one_still_gets_a_digit() {
        let mut rng = seeded_rng(3);
        let number = expand_pattern("", 1, &mut rng);
        // A lone digit never passes the checksum, so the fallback applies.
        assert_eq!(number, "0");
    }
}
