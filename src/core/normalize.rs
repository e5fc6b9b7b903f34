/// Characters people use to group card digits.
pub const SEPARATORS: [char; 2] = [' ', '-'];

/// Remove every space and hyphen, wherever it appears.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| !SEPARATORS.contains(c)).collect()
}

/// Drop the line terminator left by `read_line` (`\n` or `\r\n`).
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_removes_all_separators() {
        assert_eq!(normalize("4532-0151-1283-0366"), "4532015112830366");
        assert_eq!(normalize("4532 0151 1283 0366"), "4532015112830366");
        assert_eq!(normalize(" 4532 - 0151--1283  0366 "), "4532015112830366");
    }

    #[test]
    fn test_normalize_keeps_other_characters() {
        assert_eq!(normalize("12\t34"), "12\t34");
        assert_eq!(normalize("12_34"), "12_34");
    }

    #[test]
    fn test_normalize_separators_only() {
        assert_eq!(normalize(" - -  "), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("4532\n"), "4532");
        assert_eq!(strip_line_ending("4532\r\n"), "4532");
        assert_eq!(strip_line_ending("4532"), "4532");
        assert_eq!(strip_line_ending("\n"), "");
    }
}
