//! Score extraction from fortune text.
//!
//! Fortune texts carry their score inline, as a run of digits directly
//! followed by the points marker (`...得分為90分`). There is no separate
//! score field in the data.

/// Marker that terminates a score inside fortune text.
pub const POINTS_MARKER: char = '分';

/// Upper end of the score gauge.
pub const MAX_GAUGE_SCORE: u32 = 100;

/// Extract the score from a fortune text.
///
/// Returns the first run of ASCII digits that is immediately followed by
/// [`POINTS_MARKER`], or 0 if there is none. Values that do not fit in a
/// `u32` saturate.
pub fn extract_score(text: &str) -> u32 {
    let mut run_start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        if ch.is_ascii_digit() {
            if run_start.is_none() {
                run_start = Some(idx);
            }
            continue;
        }
        if let Some(start) = run_start.take() {
            if ch == POINTS_MARKER {
                return parse_saturating(&text[start..idx]);
            }
        }
    }

    0
}

fn parse_saturating(digits: &str) -> u32 {
    digits.bytes().fold(0u32, |acc, b| {
        acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn extracts_trailing_score() {
        assert_eq!(extract_score("您的得分為90分"), 90);
    }

    #[test]
    fn no_marker_is_zero() {
        assert_eq!(extract_score("大吉大利"), 0);
        assert_eq!(extract_score("score 90 points"), 0);
        assert_eq!(extract_score(""), 0);
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(extract_score("12分and34分"), 12);
    }

    #[test]
    fn digits_must_touch_marker() {
        assert_eq!(extract_score("90 分"), 0);
        assert_eq!(extract_score("90 分, 75分"), 75);
    }

    #[test]
    fn marker_without_digits_is_skipped() {
        assert_eq!(extract_score("分數：分 然後60分"), 60);
    }

    #[test]
    fn earlier_digits_without_marker_are_ignored() {
        assert_eq!(extract_score("第3籤，得分88分"), 88);
    }

    #[test]
    fn leading_zeros() {
        assert_eq!(extract_score("007分"), 7);
    }

    #[test]
    fn full_width_digits_do_not_count() {
        assert_eq!(extract_score("９０分"), 0);
    }

    #[test]
    fn huge_number_saturates() {
        assert_eq!(extract_score("99999999999999分"), u32::MAX);
    }

    proptest! {
        #[test]
        fn embedded_score_is_found(prefix in "[^0-9]{0,12}", score in 0u32..=100, suffix in ".{0,12}") {
            let text = format!("{prefix}{score}{POINTS_MARKER}{suffix}");
            prop_assert_eq!(extract_score(&text), score);
        }

        #[test]
        fn text_without_marker_scores_zero(text in "[^分]{0,40}") {
            prop_assert_eq!(extract_score(&text), 0);
        }
    }
}
