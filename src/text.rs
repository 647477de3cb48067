//! Text processing: whitespace trimming for command input.

/// Whether `c` counts as whitespace when trimming.
///
/// Unicode `White_Space` plus the ASCII information separators
/// U+001C..=U+001F, which are treated as line/segment breaks.
fn is_trim_whitespace(c: char) -> bool {
    return c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c);
}

/// Strip leading and trailing whitespace, keeping interior whitespace intact.
///
/// Tabs, line breaks, non-breaking spaces and the information separators
/// are removed along with plain spaces. The result borrows from `data`;
/// applying it twice yields the same slice.
pub fn process(data: &str) -> &str {
    return data.trim_matches(is_trim_whitespace);
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn strips_surrounding_spaces() {
        assert_eq!(process("  hello  "), "hello");
    }

    #[test]
    fn keeps_interior_whitespace() {
        assert_eq!(process("\t hello   world \n"), "hello   world");
    }

    #[test]
    fn strips_line_breaks_and_unicode_spaces() {
        assert_eq!(process("\r\n\u{a0}value\u{2003}\n"), "value");
    }

    #[test]
    fn strips_information_separators() {
        assert_eq!(process("\u{1c} a \u{1f}"), "a");
        assert_eq!(process("\u{1d}\u{1e}b\u{1e}c\u{1d}"), "b\u{1e}c");
    }

    #[test]
    fn keeps_other_control_characters() {
        assert_eq!(process("\u{1b}x\u{7f}"), "\u{1b}x\u{7f}");
        assert_eq!(process(" \u{0}x "), "\u{0}x");
    }

    #[test]
    fn empty_and_blank_inputs_become_empty() {
        assert_eq!(process(""), "");
        assert_eq!(process(" \t\n\u{1c} "), "");
    }

    #[test]
    fn already_trimmed_input_is_unchanged() {
        assert_eq!(process("a b"), "a b");
    }

    /// Mostly whitespace of every kind `process` strips, with a few
    /// non-whitespace characters mixed in.
    fn whitespace_heavy() -> impl Strategy<Value = String> {
        let chars = vec![
            ' ', '\t', '\n', '\r', '\u{b}', '\u{c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{1f}',
            '\u{85}', '\u{a0}', '\u{2003}', '\u{2028}', '\u{3000}', '\u{1b}', 'a', 'Z', '0', '-',
        ];
        return prop::collection::vec(prop::sample::select(chars), 0..48)
            .prop_map(|cs| return cs.into_iter().collect::<String>());
    }

    /// Trim by dropping whitespace chars from both ends of a char vector.
    fn strip_chars(s: &str) -> String {
        let chars: Vec<char> = s.chars().collect();
        let start = chars.iter().position(|c| !is_trim_whitespace(*c)).unwrap_or(chars.len());
        let end = chars.iter().rposition(|c| !is_trim_whitespace(*c)).map_or(start, |i| i + 1);
        return chars[start..end].iter().collect();
    }

    /// Check the trimmed output is `s` minus a whitespace prefix and suffix.
    fn assert_middle_section(s: &str) -> Result<(), TestCaseError> {
        let out = process(s);
        let start = out.as_ptr().addr() - s.as_ptr().addr();
        let end = start + out.len();

        prop_assert_eq!(&s[start..end], out);
        prop_assert!(s[..start].chars().all(is_trim_whitespace), "prefix of {:?}", s);
        prop_assert!(s[end..].chars().all(is_trim_whitespace), "suffix of {:?}", s);
        if let Some(first) = out.chars().next() {
            prop_assert!(!is_trim_whitespace(first), "leading whitespace in {:?}", out);
        }
        if let Some(last) = out.chars().next_back() {
            prop_assert!(!is_trim_whitespace(last), "trailing whitespace in {:?}", out);
        }
        return Ok(());
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 256, ..ProptestConfig::default() })]

        #[test]
        fn prop_output_is_middle_section(s in any::<String>()) {
            assert_middle_section(&s)?;
        }

        #[test]
        fn prop_output_is_middle_section_whitespace_heavy(s in whitespace_heavy()) {
            assert_middle_section(&s)?;
        }

        #[test]
        fn prop_is_idempotent(s in prop_oneof![any::<String>(), whitespace_heavy()]) {
            let once = process(&s);
            prop_assert_eq!(process(once), once);
        }

        #[test]
        fn prop_matches_char_wise_strip(s in whitespace_heavy()) {
            let expected = strip_chars(&s);
            prop_assert_eq!(process(&s), expected.as_str());
        }
    }
}
