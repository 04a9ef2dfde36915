//! Full-name splitting.

/// Components parsed out of a full-name string. Values are raw tokens;
/// callers apply their own capitalization rules.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NameParts {
    pub first: String,
    pub middle: String,
    pub last: String,
}

/// Parse a full name into first/middle/last components.
///
/// Handles the `Last, First Middle` comma form, drops a leading salutation
/// and a recognized trailing suffix, then assigns the first token to
/// `first`, the final token to `last`, and joins anything between into
/// `middle`. A single remaining token becomes `first`.
pub fn split_full_name(full: &str) -> NameParts {
    let trimmed = full.trim();
    if trimmed.is_empty() {
        return NameParts::default();
    }
    if let Some((last, rest)) = trimmed.split_once(',') {
        let tokens = significant_tokens(rest);
        let mut parts = NameParts {
            last: last.trim().to_string(),
            ..NameParts::default()
        };
        if let Some((first, middle)) = tokens.split_first() {
            parts.first = first.clone();
            parts.middle = middle.join(" ");
        }
        return parts;
    }
    let tokens = significant_tokens(trimmed);
    match tokens.as_slice() {
        [] => NameParts::default(),
        [first] => NameParts {
            first: first.clone(),
            ..NameParts::default()
        },
        [first, middle @ .., last] => NameParts {
            first: first.clone(),
            middle: middle.join(" "),
            last: last.clone(),
        },
    }
}

fn significant_tokens(value: &str) -> Vec<String> {
    let mut tokens: Vec<String> = value.split_whitespace().map(str::to_string).collect();
    if tokens.len() > 1 && is_salutation(&tokens[0]) {
        tokens.remove(0);
    }
    if tokens.len() > 1 && tokens.last().is_some_and(|token| is_suffix(token)) {
        tokens.pop();
    }
    tokens
}

fn is_salutation(token: &str) -> bool {
    let bare = token.trim_end_matches('.').to_lowercase();
    matches!(bare.as_str(), "mr" | "mrs" | "ms" | "miss" | "dr")
}

fn is_suffix(token: &str) -> bool {
    let bare = token.trim_matches(|ch| ch == '.' || ch == ',').to_lowercase();
    matches!(
        bare.as_str(),
        "jr" | "sr" | "ii" | "iii" | "iv" | "md" | "phd" | "esq"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(first: &str, middle: &str, last: &str) -> NameParts {
        NameParts {
            first: first.to_string(),
            middle: middle.to_string(),
            last: last.to_string(),
        }
    }

    #[test]
    fn first_middle_last() {
        assert_eq!(
            split_full_name("Shepard S. Sam"),
            parts("Shepard", "S.", "Sam")
        );
        assert_eq!(split_full_name("Buck Ulmer"), parts("Buck", "", "Ulmer"));
    }

    #[test]
    fn comma_form_swaps_last_first() {
        assert_eq!(split_full_name("Sam, Shepard"), parts("Shepard", "", "Sam"));
        assert_eq!(
            split_full_name("Sam, Shepard S."),
            parts("Shepard", "S.", "Sam")
        );
    }

    #[test]
    fn salutations_and_suffixes_drop() {
        assert_eq!(
            split_full_name("Mr. Buck Ulmer"),
            parts("Buck", "", "Ulmer")
        );
        assert_eq!(
            split_full_name("Buck Ulmer Jr."),
            parts("Buck", "", "Ulmer")
        );
        assert_eq!(
            split_full_name("Dr. John Q. Public III"),
            parts("John", "Q.", "Public")
        );
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(split_full_name(""), NameParts::default());
        assert_eq!(split_full_name("   "), NameParts::default());
        assert_eq!(split_full_name("Cher"), parts("Cher", "", ""));
    }

    #[test]
    fn multiple_middle_tokens_join() {
        assert_eq!(
            split_full_name("Anna Maria Luisa Medici"),
            parts("Anna", "Maria Luisa", "Medici")
        );
    }
}
