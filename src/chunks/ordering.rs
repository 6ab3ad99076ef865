use super::Chunk;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;

fn part_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"part-(\d+)").ok()).as_ref()
}

/// Extract the number following the first `part-` in a chunk name.
///
/// Names without the pattern, or with a number too large for `u64`, yield 0.
#[must_use]
pub fn part_number(name: &str) -> u64 {
    part_pattern()
        .and_then(|pattern| pattern.captures(name))
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
        .unwrap_or(0)
}

/// Reading order: file id first, then part number (numeric).
#[must_use]
pub fn compare_chunks(a: &Chunk, b: &Chunk) -> Ordering {
    a.file_id
        .cmp(&b.file_id)
        .then_with(|| part_number(&a.name).cmp(&part_number(&b.name)))
}

/// Sort chunks into reading order. Stable: equal keys keep their input order.
pub fn sort_chunks(chunks: &mut [Chunk]) {
    chunks.sort_by(compare_chunks);
}
