use crate::timeline::{ChunkSortKey, chunk_sort_key};

fn sorted(mut chunks: Vec<&str>) -> Vec<&str> {
    chunks.sort_by(|a, b| chunk_sort_key(a).cmp(&chunk_sort_key(b)));
    chunks
}

#[test]
fn numeric_chunks_sort_by_value_before_text() {
    assert_eq!(sorted(vec!["alpha", "10", "2"]), vec!["2", "10", "alpha"]);
}

#[test]
fn text_chunks_sort_lexicographically() {
    assert_eq!(sorted(vec!["b", "a10", "a2"]), vec!["a10", "a2", "b"]);
}

#[test]
fn equal_numeric_values_fall_back_to_text_order() {
    assert_eq!(sorted(vec!["7", "007", "07"]), vec!["007", "07", "7"]);
}

#[test]
fn numeric_comparison_handles_values_beyond_u64() {
    let big = "123456789012345678901234567890";

    assert_eq!(sorted(vec![big, "99"]), vec!["99", big]);
}

#[test]
fn signed_or_empty_chunks_are_text() {
    assert_eq!(chunk_sort_key("+5"), ChunkSortKey::Text("+5"));
    assert_eq!(chunk_sort_key("-1"), ChunkSortKey::Text("-1"));
    assert_eq!(chunk_sort_key(""), ChunkSortKey::Text(""));
}

#[test]
fn zero_is_numeric() {
    assert_eq!(sorted(vec!["1", "0", "00"]), vec!["0", "00", "1"]);
}
