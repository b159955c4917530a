/// Canonicalize a raw ingredient name into a comparable form.
///
/// Lowercases, turns brackets into spaces, strips everything that is not an
/// ASCII letter, digit, whitespace or hyphen, collapses whitespace, then
/// trims a single trailing `'s'` as a crude plural heuristic.
///
/// This is deliberately not a stemmer: shopping-list matching only needs the
/// same function applied to both sides, so the fixed rule matters more than
/// linguistic accuracy. The plural trim skips words ending in `"ss"`
/// ("glass", "watercress") so normalization stays idempotent.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let mut cleaned = String::with_capacity(lowered.len());
    for c in lowered.trim().chars() {
        match c {
            '(' | ')' | '[' | ']' | '{' | '}' => cleaned.push(' '),
            c if c.is_whitespace() => cleaned.push(' '),
            c if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' => cleaned.push(c),
            _ => {}
        }
    }

    let mut name = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    if name.len() > 2 && name.ends_with('s') && !name.ends_with("ss") {
        name.pop();
    }
    name.trim_end().to_string()
}

/// Split raw pantry text into normalized ingredient names.
///
/// Fragments are separated by newlines or commas; anything that normalizes
/// to an empty string is dropped. Order is preserved and duplicates are kept,
/// matching treats the result as a set anyway.
pub fn parse_available(raw: &str) -> Vec<String> {
    raw.split(['\n', ','])
        .map(normalize)
        .filter(|name| !name.is_empty())
        .collect()
}
