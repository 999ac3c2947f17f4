//! Command line tokenizer

/// Split a command line into whitespace-separated tokens.
///
/// Double quotes group whitespace into one token and a backslash takes the
/// next character literally. An unterminated quote ends at end of input.
/// `""` produces an empty token; blank input produces no tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    // Distinguishes an explicit empty token ("") from no token at all
    let mut has_token = false;
    let mut in_quotes = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(next) = chars.next() {
                    current.push(next);
                    has_token = true;
                }
            }
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if has_token {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotes_and_escapes() {
        assert_eq!(tokenize(r#"a "b c" d\ e"#), vec!["a", "b c", "d e"]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(tokenize("  add   url  "), vec!["add", "url"]);
    }

    #[test]
    fn test_unterminated_quote_closes_at_end() {
        assert_eq!(tokenize(r#"rename 3 "My Feed"#), vec!["rename", "3", "My Feed"]);
    }

    #[test]
    fn test_escaped_quote_and_backslash() {
        assert_eq!(tokenize(r#"say \"hi\" a\\b"#), vec!["say", "\"hi\"", "a\\b"]);
    }

    #[test]
    fn test_quotes_join_adjacent_text() {
        assert_eq!(tokenize(r#"pre"fix mid"post"#), vec!["prefix midpost"]);
    }

    #[test]
    fn test_explicit_empty_token() {
        assert_eq!(tokenize(r#"rename "" x"#), vec!["rename", "", "x"]);
    }

    #[test]
    fn test_trailing_backslash_dropped() {
        assert_eq!(tokenize("abc\\"), vec!["abc"]);
    }
}
