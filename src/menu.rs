//! Menu Parser
//!
//! Turns the raw `fmCn` blob into a list of dish names.

use crate::encoding::try_fix_encoding;

/// Line terminator used by the meal endpoint
const LINE_BREAK: &str = "\r\n";

/// Decode raw menu text into dish names, in source order.
///
/// Absent or empty input yields an empty list.
pub fn decode_menu(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return Vec::new();
    };

    try_fix_encoding(raw)
        .split(LINE_BREAK)
        .map(|item| item.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}'))
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::absent(None)]
    #[case::empty(Some(""))]
    #[case::only_breaks(Some("\r\n\r\n  \r\n"))]
    fn test_nothing_to_decode(#[case] raw: Option<&str>) {
        assert!(decode_menu(raw).is_empty());
    }

    #[test]
    fn test_splits_trims_and_keeps_order() {
        let menu = decode_menu(Some(" 쌀밥 \r\n\r\n미역국\r\n  제육볶음\r\n배추김치 "));
        assert_eq!(menu, vec!["쌀밥", "미역국", "제육볶음", "배추김치"]);
    }

    #[test]
    fn test_lone_newline_is_not_a_separator() {
        let menu = decode_menu(Some("우유\n사과\r\n빵"));
        assert_eq!(menu, vec!["우유\n사과", "빵"]);
    }

    #[test]
    fn test_repairs_before_splitting() {
        let garbled: String = "흑미밥\r\n어묵국".bytes().map(char::from).collect();
        assert_eq!(decode_menu(Some(&garbled)), vec!["흑미밥", "어묵국"]);
    }
}
