/// Field cap per engine line. Every well-formed command has at most three.
pub const MAX_FIELDS: usize = 10;
/// Fewest fields that still reach every command shape.
pub const MIN_FIELDS: usize = 3;

/// Splits a raw line into at most `maxparts` whitespace-delimited fields.
///
/// Fields borrow from `line`. Leading, trailing and repeated whitespace
/// (including a CR before the LF) never produces an empty field. Tokens past
/// `maxparts` are dropped, not merged into the last field.
pub fn split(line: &str, maxparts: usize) -> Vec<&str> {
    line.split_ascii_whitespace().take(maxparts).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace() {
        assert_eq!(split("  a  b   c ", MAX_FIELDS), vec!["a", "b", "c"]);
    }

    #[test]
    fn blank_line_has_no_fields() {
        assert!(split("   ", MAX_FIELDS).is_empty());
        assert!(split("", MAX_FIELDS).is_empty());
        assert!(split("\r\n", MAX_FIELDS).is_empty());
    }

    #[test]
    fn excess_fields_dropped() {
        assert_eq!(split("a b c d", 2), vec!["a", "b"]);
    }

    #[test]
    fn crlf_and_tabs() {
        assert_eq!(split("go\t500\r\n", MAX_FIELDS), vec!["go", "500"]);
    }
}
