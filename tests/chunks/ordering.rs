use super::chunk;
use chunklist::chunks::{compare_chunks, part_number, sort_chunks};
use std::cmp::Ordering;

fn ids(chunks: &[chunklist::chunks::Chunk]) -> Vec<&str> {
    chunks.iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn test_part_number_extraction() {
    assert_eq!(part_number("handbook-part-3"), 3);
    assert_eq!(part_number("part-10"), 10);
    assert_eq!(part_number("part-007"), 7);
    assert_eq!(part_number("intro"), 0);
    assert_eq!(part_number("part-"), 0);
    assert_eq!(part_number("Part-4"), 0, "match is case sensitive");
}

#[test]
fn test_part_number_uses_first_match() {
    assert_eq!(part_number("part-2-of-part-9"), 2);
}

#[test]
fn test_part_number_overflow_is_zero() {
    assert_eq!(part_number("part-99999999999999999999999"), 0);
}

#[test]
fn test_numeric_not_lexicographic_parts() {
    let mut chunks = vec![
        chunk("b", "f1", "part-2"),
        chunk("c", "f1", "part-10"),
        chunk("a", "f1", "part-1"),
    ];
    sort_chunks(&mut chunks);
    assert_eq!(ids(&chunks), vec!["a", "b", "c"]);
}

#[test]
fn test_groups_by_file_before_part() {
    let mut chunks = vec![
        chunk("b1", "file-b", "part-1"),
        chunk("a2", "file-a", "part-2"),
        chunk("b0", "file-b", "intro"),
        chunk("a1", "file-a", "part-1"),
    ];
    sort_chunks(&mut chunks);
    assert_eq!(ids(&chunks), vec!["a1", "a2", "b0", "b1"]);
}

#[test]
fn test_missing_part_sorts_first_within_file() {
    let mut chunks = vec![chunk("p1", "f", "part-1"), chunk("none", "f", "summary")];
    sort_chunks(&mut chunks);
    assert_eq!(ids(&chunks), vec!["none", "p1"]);
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let mut chunks = vec![
        chunk("first", "f", "alpha"),
        chunk("second", "f", "beta"),
        chunk("third", "f", "part-0"),
    ];
    sort_chunks(&mut chunks);
    assert_eq!(ids(&chunks), vec!["first", "second", "third"]);
}

#[test]
fn test_file_id_comparison_is_bytewise() {
    let upper = chunk("u", "B", "part-1");
    let lower = chunk("l", "a", "part-1");
    assert_eq!(compare_chunks(&upper, &lower), Ordering::Less);
}

#[test]
fn test_empty_and_single() {
    let mut empty: Vec<chunklist::chunks::Chunk> = Vec::new();
    sort_chunks(&mut empty);
    assert!(empty.is_empty());

    let mut single = vec![chunk("x", "f", "part-5")];
    sort_chunks(&mut single);
    assert_eq!(ids(&single), vec!["x"]);
}
