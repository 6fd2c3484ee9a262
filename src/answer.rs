/// Lowercase, strip punctuation, and collapse whitespace runs so small
/// typing slips ("Hello,  world!" vs "hello world") compare equal.
pub fn normalize(s: &str) -> String {
    let lowered: String = s
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_')
        .collect();

    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Score-affecting comparison: normalized equality.
pub fn is_exact_match(input: &str, expected: &str) -> bool {
    normalize(input) == normalize(expected)
}

/// Softer signal for UI feedback only: the normalized input appears
/// somewhere inside the expected answer. Never awards points.
pub fn is_lenient_match(input: &str, expected: &str) -> bool {
    let normalized = normalize(input);
    !normalized.is_empty() && expected.to_lowercase().contains(&normalized)
}
