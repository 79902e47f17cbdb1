use super::*;
use std::collections::HashSet;

#[test]
fn seeded_ids_are_reproducible() {
    let mut a = SeededIds::new(42);
    let mut b = SeededIds::new(42);
    for _ in 0..8 {
        assert_eq!(a.next_id("gradient"), b.next_id("gradient"));
    }
}

#[test]
fn seeded_ids_do_not_repeat() {
    let mut ids = SeededIds::new(7);
    let seen: HashSet<_> = (0..1000).map(|_| ids.next_id("g")).collect();
    assert_eq!(seen.len(), 1000);
}

#[test]
fn seeds_give_different_streams() {
    let a = SeededIds::new(1).next_id("g");
    let b = SeededIds::new(2).next_id("g");
    assert_ne!(a, b);
    assert!(a.as_str().starts_with("g-"));
}

#[test]
fn serializes_as_plain_string() {
    let id = ResourceId::new("arc-1");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"arc-1\"");
    assert_eq!(id.to_string(), "arc-1");
}
