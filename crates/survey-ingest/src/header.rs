//! Compound header decoding.

use survey_model::ColumnHeader;

/// Splits a raw header cell into machine id and title.
///
/// The split happens at the first occurrence of `separator`, so the title may
/// itself contain the separator. A header without the separator (or an empty
/// separator) yields no id and the raw header as title.
pub fn split_header(raw: &str, separator: &str) -> ColumnHeader {
    if separator.is_empty() {
        return ColumnHeader::without_id(raw);
    }
    match raw.split_once(separator) {
        Some((id, title)) => {
            if title.contains(separator) {
                tracing::debug!(
                    header = raw,
                    "separator appears more than once, title keeps the rest"
                );
            }
            ColumnHeader::new(id, title)
        }
        None => ColumnHeader::without_id(raw),
    }
}

/// Strips a UTF-8 byte order mark some exporters put before the first header.
pub(crate) fn strip_bom(raw: &str) -> &str {
    raw.trim_start_matches('\u{feff}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_id_and_title() {
        let header = split_header("head_id---head_title", "---");
        assert_eq!(header.id(), Some("head_id"));
        assert_eq!(header.title, "head_title");
    }

    #[test]
    fn missing_separator_keeps_whole_title() {
        let header = split_header("Response ID", "---");
        assert_eq!(header.id(), None);
        assert_eq!(header.title, "Response ID");
    }

    #[test]
    fn splits_on_first_separator_only() {
        let header = split_header("G01Q01---Pros --- cons?", "---");
        assert_eq!(header.id(), Some("G01Q01"));
        assert_eq!(header.title, "Pros --- cons?");
    }

    #[test]
    fn empty_parts_are_kept() {
        let header = split_header("---Title", "---");
        assert_eq!(header.id(), Some(""));
        assert_eq!(header.title, "Title");
    }

    #[test]
    fn custom_separator() {
        let header = split_header("G02Q42%%%Another question?", "%%%");
        assert_eq!(header.id(), Some("G02Q42"));
        assert_eq!(header.title, "Another question?");
        assert_eq!(split_header("G02Q42---x", "%%%").id(), None);
    }

    #[test]
    fn empty_separator_never_splits() {
        let header = split_header("a---b", "");
        assert_eq!(header.id(), None);
        assert_eq!(header.title, "a---b");
    }

    #[test]
    fn strips_byte_order_mark() {
        assert_eq!(strip_bom("\u{feff}id---Response ID"), "id---Response ID");
        assert_eq!(strip_bom("plain"), "plain");
    }
}
