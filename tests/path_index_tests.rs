use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use math_path::branch::Branch;
use math_path::path_index;
use math_path::path_index::PathIndex;

#[test]
fn previous_at_beginning_of_line_is_absent() {
    assert_eq!(PathIndex::level0(0).previous(), None);
    assert_eq!(path_index!(3, Superscript, 0).previous(), None);
}

#[test]
fn previous_moves_the_innermost_position_left() {
    assert_eq!(PathIndex::level0(4).previous(), Some(PathIndex::level0(3)));
    assert_eq!(
        path_index!(3, Superscript, 2).previous(),
        Some(path_index!(3, Superscript, 1))
    );
}

#[test]
fn next_moves_the_innermost_position_right() {
    assert_eq!(PathIndex::level0(4).next(), PathIndex::level0(5));
    assert_eq!(
        path_index!(1, Denominator, 0).next(),
        path_index!(1, Denominator, 1)
    );
}

#[test]
fn previous_then_next_round_trips() {
    let index = path_index!(2, Radicand, 5);
    assert_eq!(index.previous().unwrap().next(), index);
}

#[test]
fn level_up_attaches_at_the_innermost_node() {
    let nested = PathIndex::level0(5).level_up(Branch::Superscript, PathIndex::level0(0));
    assert_eq!(nested, path_index!(5, Superscript, 0));
    assert_eq!(nested.final_branch_type(), Some(Branch::Superscript));
    assert_eq!(nested.sub_index(), Some(&PathIndex::level0(0)));

    let deeper = nested.level_up(Branch::Numerator, PathIndex::level0(1));
    assert_eq!(deeper, path_index!(5, Superscript, 0, Numerator, 1));
}

#[test]
fn level_up_then_level_down_round_trips() {
    let index = path_index!(1, Subscript, 2);
    assert_eq!(
        index
            .level_up(Branch::Degree, PathIndex::level0(0))
            .level_down(),
        Some(index)
    );
}

#[test]
fn level_down_removes_exactly_one_node() {
    assert_eq!(PathIndex::level0(3).level_down(), None);
    assert_eq!(
        path_index!(3, Superscript, 0, Denominator, 1).level_down(),
        Some(path_index!(3, Superscript, 0))
    );
}

#[test]
fn final_branch_type_is_the_innermost_branch() {
    assert_eq!(PathIndex::level0(2).final_branch_type(), None);
    assert_eq!(
        path_index!(2, Numerator, 0).final_branch_type(),
        Some(Branch::Numerator)
    );
    assert_eq!(
        path_index!(2, Numerator, 0, Superscript, 1).final_branch_type(),
        Some(Branch::Superscript)
    );
}

#[test]
fn has_branch_of_type_checks_the_whole_path() {
    let inner = PathIndex::level0(1).level_up(Branch::Superscript, PathIndex::level0(2));
    let index = PathIndex::level0(0).level_up(Branch::Denominator, inner);
    assert!(index.has_branch_of_type(Branch::Denominator));
    assert!(index.has_branch_of_type(Branch::Superscript));
    assert!(!index.has_branch_of_type(Branch::Numerator));
}

#[test]
fn is_at_beginning_of_line_looks_at_the_innermost_node() {
    assert!(PathIndex::level0(0).is_at_beginning_of_line());
    assert!(path_index!(7, Radicand, 0).is_at_beginning_of_line());
    assert!(!PathIndex::level0(1).is_at_beginning_of_line());
    assert!(!path_index!(0, Radicand, 3).is_at_beginning_of_line());
}

#[test]
fn independently_built_paths_compare_equal_and_hash_equally() {
    let a = path_index!(1, Superscript, 0, Denominator, 0);
    let b = PathIndex::level0(1).level_up(
        Branch::Superscript,
        PathIndex::level0(0).level_up(Branch::Denominator, PathIndex::level0(0)),
    );
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn paths_with_different_branches_compare_unequal() {
    assert_ne!(path_index!(1, Superscript, 0), path_index!(1, Subscript, 0));
    assert_ne!(
        path_index!(1, Superscript, 0),
        path_index!(1, Superscript, 0, Numerator, 0)
    );
}

#[test]
fn level_counts_the_path_nodes() {
    assert_eq!(PathIndex::level0(9).level(), 1);
    assert_eq!(path_index!(1, Superscript, 0, Denominator, 0).level(), 3);
}

#[test]
fn display_matches_the_documented_notation() {
    assert_eq!(
        path_index!(1, Superscript, 0, Denominator, 0).to_string(),
        "(1, superscript):(0, denominator):(0)"
    );
    assert_eq!(PathIndex::level0(4).to_string(), "(4)");
}

fn hash_of(index: &PathIndex) -> u64 {
    let mut hasher = DefaultHasher::new();
    index.hash(&mut hasher);
    hasher.finish()
}
