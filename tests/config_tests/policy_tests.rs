//! Growth Policy Tests
//!
//! Tests verify:
//! - Defaults (seed 10, doubling)
//! - Builder and validation
//! - next_capacity computation

use seqvec::config::{DEFAULT_GROWTH_FACTOR, DEFAULT_INITIAL_CAPACITY};
use seqvec::{GrowthPolicy, SeqVecError, Vector};

#[test]
fn test_default_policy() {
    let policy = GrowthPolicy::default();
    assert_eq!(policy.initial_capacity, DEFAULT_INITIAL_CAPACITY);
    assert_eq!(policy.growth_factor, DEFAULT_GROWTH_FACTOR);
    assert_eq!(policy.initial_capacity, 10);
    assert_eq!(policy.growth_factor, 2);
    assert!(policy.validate().is_ok());
}

#[test]
fn test_next_capacity_sequence() {
    let policy = GrowthPolicy::default();
    assert_eq!(policy.next_capacity(0), 10);
    assert_eq!(policy.next_capacity(10), 20);
    assert_eq!(policy.next_capacity(3), 6);
}

#[test]
fn test_next_capacity_saturates() {
    let policy = GrowthPolicy::default();
    assert_eq!(policy.next_capacity(usize::MAX), usize::MAX);
}

#[test]
fn test_builder_sets_fields() {
    let policy = GrowthPolicy::builder()
        .initial_capacity(4)
        .growth_factor(3)
        .build()
        .unwrap();
    assert_eq!(policy.initial_capacity, 4);
    assert_eq!(policy.growth_factor, 3);
    assert_eq!(policy.next_capacity(4), 12);
}

#[test]
fn test_builder_rejects_zero_initial_capacity() {
    let err = GrowthPolicy::builder().initial_capacity(0).build().unwrap_err();
    assert!(matches!(err, SeqVecError::Config(_)));
    assert!(!err.is_out_of_range());
}

#[test]
fn test_builder_rejects_factor_below_two() {
    assert!(GrowthPolicy::builder().growth_factor(1).build().is_err());
    assert!(GrowthPolicy::builder().growth_factor(0).build().is_err());
}

#[test]
fn test_vector_reports_its_policy() {
    let policy = GrowthPolicy::builder().initial_capacity(1).build().unwrap();
    let v: Vector<i32> = Vector::with_policy(policy).unwrap();
    assert_eq!(v.policy(), policy);
    assert_eq!(Vector::<i32>::new().policy(), GrowthPolicy::default());
}
