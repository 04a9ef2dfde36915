//! Phone number reformatting.

use crate::case::strip_separators;

/// Strip separators, then format a 10-digit string as `(AAA) BBB-CCCC` or
/// a 7-digit string as `BBB-CCCC`. Anything else, including strings with
/// non-digit characters left after stripping, yields the empty string.
pub fn format_phone(raw: &str) -> String {
    let digits = strip_separators(raw);
    if !digits.chars().all(|ch| ch.is_ascii_digit()) {
        return String::new();
    }
    match digits.len() {
        10 => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        7 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_digits_get_area_code_shape() {
        assert_eq!(format_phone("9493237895"), "(949) 323-7895");
        assert_eq!(format_phone("(949) 323-7895"), "(949) 323-7895");
        assert_eq!(format_phone("949.323.7895"), "(949) 323-7895");
    }

    #[test]
    fn seven_digits_get_local_shape() {
        assert_eq!(format_phone("3237895"), "323-7895");
        assert_eq!(format_phone("323-7895"), "323-7895");
    }

    #[test]
    fn other_lengths_drop_to_empty() {
        assert_eq!(format_phone("94932"), "");
        assert_eq!(format_phone("94932456748912"), "");
        assert_eq!(format_phone(""), "");
    }

    #[test]
    fn non_digit_residue_drops_to_empty() {
        assert_eq!(format_phone("94932EXT123"), "");
    }
}
