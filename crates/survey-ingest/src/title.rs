//! Answer label extraction from question titles.

/// Splits `"<text> [<label>]"` into `(text, Some(label))`.
///
/// Only the last ` [` opens the label, so earlier brackets stay in the text.
/// Titles without a trailing bracket, or with an empty text or label, come
/// back unchanged with no label. The text before ` [` must be non-empty, so
/// `" [A]"` is not split.
pub fn split_answer_title(title: &str) -> (String, Option<String>) {
    let Some(body) = title.strip_suffix(']') else {
        return (title.to_string(), None);
    };
    match body.rsplit_once(" [") {
        Some((text, label)) if !text.is_empty() && !label.is_empty() => {
            (text.to_string(), Some(label.to_string()))
        }
        _ => (title.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_trailing_label() {
        assert_eq!(
            split_answer_title("Question? [Answer]"),
            ("Question?".to_string(), Some("Answer".to_string()))
        );
    }

    #[test]
    fn title_without_label() {
        assert_eq!(
            split_answer_title("Another question?"),
            ("Another question?".to_string(), None)
        );
    }

    #[test]
    fn only_last_bracket_is_label() {
        assert_eq!(
            split_answer_title("Rate [scale] this [Very good]"),
            ("Rate [scale] this".to_string(), Some("Very good".to_string()))
        );
    }

    #[test]
    fn bracket_must_be_final_token() {
        assert_eq!(
            split_answer_title("Pick [one] please"),
            ("Pick [one] please".to_string(), None)
        );
    }

    #[test]
    fn bracket_needs_leading_space() {
        assert_eq!(split_answer_title("Choice[A]"), ("Choice[A]".to_string(), None));
    }

    #[test]
    fn empty_parts_are_not_split() {
        assert_eq!(split_answer_title(" [A]"), (" [A]".to_string(), None));
        assert_eq!(split_answer_title("Text []"), ("Text []".to_string(), None));
    }
}
