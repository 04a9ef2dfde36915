//! ZIP code splitting.

/// Remove all leading `'0'` characters. An all-zero string becomes empty.
pub fn trim_leading_zeros(value: &str) -> String {
    value.trim_start_matches('0').to_string()
}

/// Split a compound ZIP into its base and +4 extension.
///
/// Three shapes are recognized: nine contiguous digits, `DDDDD-DDDD`, and
/// `DDDDD DDDD`. Both parts come back with leading zeros trimmed. Any other
/// shape returns the input unchanged with an empty extension; empty input
/// returns two empty strings.
pub fn split_zip(zip: &str) -> (String, String) {
    let bytes = zip.as_bytes();
    let digits = |range: &[u8]| range.iter().all(u8::is_ascii_digit);
    if bytes.len() == 9 && digits(bytes) {
        return (trim_leading_zeros(&zip[..5]), trim_leading_zeros(&zip[5..]));
    }
    if bytes.len() == 10
        && (bytes[5] == b'-' || bytes[5] == b' ')
        && digits(&bytes[..5])
        && digits(&bytes[6..])
    {
        return (trim_leading_zeros(&zip[..5]), trim_leading_zeros(&zip[6..]));
    }
    (zip.to_string(), String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_shapes_split() {
        assert_eq!(split_zip("92882-1234"), ("92882".into(), "1234".into()));
        assert_eq!(split_zip("92882 1234"), ("92882".into(), "1234".into()));
        assert_eq!(split_zip("928821234"), ("92882".into(), "1234".into()));
    }

    #[test]
    fn other_shapes_pass_through() {
        assert_eq!(split_zip("9288212"), ("9288212".into(), String::new()));
        assert_eq!(split_zip("92882123456"), ("92882123456".into(), String::new()));
        assert_eq!(split_zip("9288A-1234"), ("9288A-1234".into(), String::new()));
        assert_eq!(split_zip(""), (String::new(), String::new()));
    }

    #[test]
    fn leading_zeros_trim_on_both_parts() {
        assert_eq!(split_zip("000120001"), ("12".into(), "1".into()));
        // All-zero parts collapse to empty.
        assert_eq!(split_zip("00000-0000"), (String::new(), String::new()));
    }

    #[test]
    fn trim_leading_zeros_edge_cases() {
        assert_eq!(trim_leading_zeros("00000123"), "123");
        assert_eq!(trim_leading_zeros("00000"), "");
        assert_eq!(trim_leading_zeros("123"), "123");
    }
}
