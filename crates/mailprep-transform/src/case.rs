//! Case normalization and separator stripping.

/// The canonical separator character set removed by [`strip_separators`].
///
/// This is the superset across the formats seen in the wild; it includes
/// `+` so that phone prefixes like `+1` collapse into the digit string.
pub const SEPARATORS: [char; 17] = [
    '\'', '#', '%', '$', '-', '+', '.', '*', '(', ')', ':', ';', '{', '}', '|', '&', ' ',
];

/// Remove every separator character. Everything else passes through.
pub fn strip_separators(value: &str) -> String {
    value.chars().filter(|ch| !SEPARATORS.contains(ch)).collect()
}

/// Lower-case the whole string, capitalize the first letter of each
/// whitespace-separated token, and trim.
///
/// Hyphens and apostrophes are not token boundaries; internal whitespace
/// is preserved as-is.
pub fn title_case(value: &str) -> String {
    let lowered = value.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut at_boundary = true;
    for ch in lowered.trim().chars() {
        if ch.is_whitespace() {
            at_boundary = true;
            out.push(ch);
        } else if at_boundary {
            out.extend(ch.to_uppercase());
            at_boundary = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Upper-case and trim.
pub fn upper_case(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Lower-case and trim.
pub fn lower_case(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_capitalizes_tokens() {
        assert_eq!(title_case(" apPlE "), "Apple");
        assert_eq!(title_case(" sUn "), "Sun");
        assert_eq!(title_case("5702 arbor valley dr"), "5702 Arbor Valley Dr");
    }

    #[test]
    fn title_case_leaves_hyphenated_words_alone() {
        // Hyphen is not a token boundary.
        assert_eq!(title_case("mary-jane smith"), "Mary-jane Smith");
        assert_eq!(title_case("o'brien"), "O'brien");
    }

    #[test]
    fn title_case_preserves_internal_whitespace() {
        assert_eq!(title_case("fort  worth"), "Fort  Worth");
    }

    #[test]
    fn upper_and_lower_trim() {
        assert_eq!(upper_case(" aPPle  "), "APPLE");
        assert_eq!(lower_case("  NOAH "), "noah");
    }

    #[test]
    fn strip_separators_removes_the_full_set() {
        assert_eq!(strip_separators("#$*string&()&"), "string");
        assert_eq!(strip_separators("#   $*   string   &()&   "), "string");
        assert_eq!(strip_separators("(949) 323-7895"), "9493237895");
        assert_eq!(strip_separators("+1.949.323.7895"), "19493237895");
    }
}
