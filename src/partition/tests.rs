//! Tests for partition module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use std::num::NonZeroUsize;
use test_case::test_case;

fn plan(parts: usize) -> PartitionPlan {
    PartitionPlan::new(NonZeroUsize::new(parts).unwrap())
}

fn sizes(chunks: &[Chunk]) -> Vec<usize> {
    chunks.iter().map(Chunk::len).collect()
}

// ============================================================================
// Chunk Size Tests
// ============================================================================

#[test_case(10, 3, 4 ; "remainder rounds up")]
#[test_case(9, 3, 3 ; "exact division")]
#[test_case(2, 5, 1 ; "more parts than rows")]
#[test_case(1, 1, 1 ; "single row")]
#[test_case(7, 1, 7 ; "single part")]
#[test_case(0, 4, 0 ; "no rows")]
fn test_chunk_size(total: usize, parts: usize, expected: usize) {
    assert_eq!(chunk_size(total, parts), expected);
}

// ============================================================================
// Chunk Planning Tests
// ============================================================================

#[test]
fn test_ten_rows_three_parts() {
    let chunks = plan_chunks(10, plan(3));
    assert_eq!(sizes(&chunks), vec![4, 4, 2]);
    assert_eq!(chunks[0], Chunk::new(1, 0..4));
    assert_eq!(chunks[2], Chunk::new(3, 8..10));
}

#[test]
fn test_two_rows_five_parts() {
    let chunks = plan_chunks(2, plan(5));
    assert_eq!(sizes(&chunks), vec![1, 1]);
    let indices: Vec<_> = chunks.iter().map(|c| c.index).collect();
    assert_eq!(indices, vec![1, 2]);
}

#[test]
fn test_ceiling_can_leave_fewer_chunks_than_rows_allow() {
    // ceil(10/4) = 3 → 3,3,3,1
    assert_eq!(sizes(&plan_chunks(10, plan(4))), vec![3, 3, 3, 1]);
    // ceil(6/4) = 2 → 2,2,2 and the fourth chunk is empty
    assert_eq!(sizes(&plan_chunks(6, plan(4))), vec![2, 2, 2]);
}

#[test]
fn test_chunks_cover_every_row_once() {
    for total in 1..40 {
        for parts in 1..12 {
            let chunks = plan_chunks(total, plan(parts));
            let bound = chunk_size(total, parts);

            let mut next = 0;
            for chunk in &chunks {
                assert_eq!(chunk.rows.start, next, "gap or overlap for {total}/{parts}");
                assert!(!chunk.is_empty());
                assert!(chunk.len() <= bound);
                next = chunk.rows.end;
            }
            assert_eq!(next, total, "rows lost for {total}/{parts}");
            assert!(chunks.len() <= parts.min(total));
        }
    }
}

#[test]
fn test_saturated_part_count() {
    let chunks = plan_chunks(3, PartitionPlan::parse("99999999999999999999").unwrap());
    assert_eq!(sizes(&chunks), vec![1, 1, 1]);
}

#[test]
fn test_no_rows_no_chunks() {
    assert!(plan_chunks(0, plan(3)).is_empty());
}

// ============================================================================
// Part Count Validation Tests
// ============================================================================

#[test_case("3", 3 ; "plain")]
#[test_case(" 12 \n", 12 ; "whitespace")]
#[test_case("+2", 2 ; "explicit sign")]
#[test_case("007", 7 ; "leading zeros")]
#[test_case("99999999999999999999", usize::MAX ; "beyond usize saturates")]
fn test_parse_part_count(input: &str, expected: usize) {
    assert_eq!(PartitionPlan::parse(input).unwrap().parts(), expected);
}

#[test_case("abc", NOT_A_NUMBER ; "word")]
#[test_case("", NOT_A_NUMBER ; "empty")]
#[test_case("2.5", NOT_A_NUMBER ; "fraction")]
#[test_case("0", NOT_POSITIVE ; "zero")]
#[test_case("-4", NOT_POSITIVE ; "negative")]
#[test_case("-0", NOT_POSITIVE ; "negative zero")]
#[test_case("-99999999999999999999", NOT_POSITIVE ; "huge negative")]
#[test_case("+-3", NOT_A_NUMBER ; "double sign")]
#[test_case("1 2", NOT_A_NUMBER ; "inner space")]
fn test_parse_part_count_rejected(input: &str, expected: &str) {
    match PartitionPlan::parse(input).unwrap_err() {
        Error::InvalidPartCount { message, .. } => assert_eq!(message, expected),
        other => panic!("Expected InvalidPartCount, got {other:?}"),
    }
}
