//! Helpers for tokenizing catalog lines.

/// Splits `line` on `delimiter`, reading one token at a time until the next
/// delimiter or the end of input. Interior empty fields are kept; an empty
/// line produces no tokens and a trailing delimiter adds no empty token.
pub fn split(line: &str, delimiter: char) -> Vec<String> {
    let mut tokens: Vec<String> = line.split(delimiter).map(str::to_string).collect();
    // no token after a trailing delimiter
    if tokens.last().is_some_and(|last| last.is_empty()) {
        tokens.pop();
    }
    tokens
}

/// Strips one pair of surrounding double quotes. A lone `"` is left alone.
pub fn remove_quotes(input: &str) -> &str {
    if input.len() >= 2 && input.starts_with('"') && input.ends_with('"') {
        &input[1..input.len() - 1]
    } else {
        input
    }
}

/// Trims spaces and tabs only; other whitespace is significant.
pub fn trim(input: &str) -> &str {
    input.trim_matches(|c| c == ' ' || c == '\t')
}

/// The cleanup applied to every field read from a catalog file: unquote,
/// then trim. Padding outside the quotes is trimmed first, since saved files
/// separate fields with `", "`.
pub fn clean_field(token: &str) -> String {
    trim(remove_quotes(trim(token))).to_string()
}
