pub const REDIRECT: &str = ">";

/// Splits a raw input line into tokens.
///
/// Whitespace separates tokens and `>` is always a token of its own, so
/// `ls -la>out.txt` yields `["ls", "-la", ">", "out.txt"]`. The trailing
/// newline is dropped along with any other whitespace. No token is empty.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for segment in line.split_whitespace() {
        let mut rest = segment;
        while let Some(idx) = rest.find(REDIRECT) {
            if idx > 0 {
                tokens.push(rest[..idx].to_string());
            }
            tokens.push(REDIRECT.to_string());
            rest = &rest[idx + REDIRECT.len()..];
        }
        if !rest.is_empty() {
            tokens.push(rest.to_string());
        }
    }

    tokens
}
