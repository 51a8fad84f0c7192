use super::context::digit_run_end;

/// A blocking phrase: a verb stem, its optional inflection, and the
/// preposition (if any) that must follow before the `#<number>`.
struct BlockerPhrase {
    stem: &'static [u8],
    suffix: &'static [u8],
    preposition: Option<&'static [u8]>,
}

const PHRASES: [BlockerPhrase; 4] = [
    BlockerPhrase {
        stem: b"depend",
        suffix: b"s",
        preposition: Some(b"on"),
    },
    BlockerPhrase {
        stem: b"block",
        suffix: b"ed",
        preposition: Some(b"by"),
    },
    BlockerPhrase {
        stem: b"require",
        suffix: b"s",
        preposition: None,
    },
    BlockerPhrase {
        stem: b"need",
        suffix: b"s",
        preposition: None,
    },
];

/// Issue numbers referenced as blockers in `body`, in order of first
/// appearance. Numbers are normalized (no leading zeros) so `#07` and `#7`
/// collapse into one entry.
pub fn parse_blockers(body: &str) -> Vec<String> {
    let folded = body.to_ascii_lowercase();
    let bytes = folded.as_bytes();
    let mut blockers: Vec<String> = Vec::new();

    for start in 0..bytes.len() {
        let Some(digits) = PHRASES
            .iter()
            .find_map(|phrase| match_phrase(bytes, start, phrase))
        else {
            continue;
        };
        let number = normalize_number(&folded[digits.0..digits.1]);
        if !blockers.contains(&number) {
            blockers.push(number);
        }
    }

    tracing::trace!(count = blockers.len(), "parsed blockers");
    blockers
}

/// Returns the byte range of the referenced digits when `phrase` matches at
/// `start`.
fn match_phrase(bytes: &[u8], start: usize, phrase: &BlockerPhrase) -> Option<(usize, usize)> {
    let mut cursor = literal_at(bytes, start, phrase.stem)?;
    cursor = literal_at(bytes, cursor, phrase.suffix).unwrap_or(cursor);
    cursor = whitespace(bytes, cursor)?;
    if let Some(preposition) = phrase.preposition {
        cursor = literal_at(bytes, cursor, preposition)?;
        cursor = whitespace(bytes, cursor)?;
    }
    cursor = literal_at(bytes, cursor, b"#")?;
    let end = digit_run_end(bytes, cursor);
    (end > cursor).then_some((cursor, end))
}

fn literal_at(bytes: &[u8], at: usize, literal: &[u8]) -> Option<usize> {
    bytes[at..].starts_with(literal).then_some(at + literal.len())
}

fn whitespace(bytes: &[u8], at: usize) -> Option<usize> {
    let end = bytes[at..]
        .iter()
        .position(|byte| !byte.is_ascii_whitespace())
        .map_or(bytes.len(), |offset| at + offset);
    (end > at).then_some(end)
}

fn normalize_number(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
