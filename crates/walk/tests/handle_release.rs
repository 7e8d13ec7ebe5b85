//! Descriptor accounting for abandoned walks.
//!
//! Kept in its own test binary so no concurrently running test opens or
//! closes descriptors while they are counted.

#![cfg(target_os = "linux")]

use std::fs;

use test_support::FixtureTree;
use walk::{DirectoryCursor, PreOrderIterator, SiblingsFirstIterator};

fn open_descriptors() -> usize {
    fs::read_dir("/proc/self/fd")
        .expect("list /proc/self/fd")
        .count()
}

#[test]
fn dropping_a_partial_walk_closes_its_directories() {
    let tree = FixtureTree::new().expect("fixture");
    let before = open_descriptors();

    let mut pre = PreOrderIterator::new(tree.root()).expect("open");
    while pre.depth() < 3 {
        pre.advance().expect("advance");
    }
    assert!(pre.open_handles() >= 1);
    assert_eq!(open_descriptors(), before + pre.open_handles());
    drop(pre);
    assert_eq!(open_descriptors(), before);

    let mut siblings = SiblingsFirstIterator::new(tree.root()).expect("open");
    while siblings.depth() < 3 {
        siblings.advance().expect("advance");
    }
    assert_eq!(siblings.open_handles(), 1);
    assert_eq!(open_descriptors(), before + 1);
    drop(siblings);
    assert_eq!(open_descriptors(), before);
}
