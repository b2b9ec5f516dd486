mod common;

use std::collections::BTreeMap;

use avl_forest::{AvlTree, Balancer, Bst, TraversalOrder, Tree, TreeError};
use common::{avl_height_bound, Fuzzer};
use proptest::prelude::*;

const SIZES: [usize; 4] = [0, 10, 50, 100];

fn is_sorted(values: &[i32]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

fn sorted(mut values: Vec<i32>) -> Vec<i32> {
    values.sort();
    values
}

#[derive(Clone, Debug)]
enum Op {
    Insert(i32),
    Remove(i32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-40i32..40).prop_map(Op::Insert),
        2 => (-40i32..40).prop_map(Op::Remove),
    ]
}

/// Applies `ops` to `tree` and to a reference multiset, checking both agree
/// and the tree stays valid after every step.
fn run_ops<B: Balancer>(tree: &mut Tree<i32, B>, ops: &[Op]) -> Result<(), TestCaseError> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for op in ops {
        match *op {
            Op::Insert(v) => {
                tree.insert(v);
                *counts.entry(v).or_default() += 1;
            }
            Op::Remove(v) => {
                let expected = match counts.get_mut(&v) {
                    Some(n) => {
                        *n -= 1;
                        if *n == 0 {
                            counts.remove(&v);
                        }
                        Ok(v)
                    }
                    None => Err(TreeError::NotFound),
                };
                prop_assert_eq!(tree.remove(&v), expected);
            }
        }
        prop_assert_eq!(tree.assert_valid(), Ok(()));
        prop_assert_eq!(tree.len(), counts.values().sum::<usize>());
    }

    let expected: Vec<i32> = counts
        .iter()
        .flat_map(|(v, n)| std::iter::repeat(*v).take(*n))
        .collect();
    prop_assert_eq!(tree.to_list(TraversalOrder::InOrder), expected);
    prop_assert_eq!(tree.minimum().copied(), counts.keys().next().copied());
    prop_assert_eq!(tree.maximum().copied(), counts.keys().next_back().copied());
    Ok(())
}

proptest! {
    #[test]
    fn in_order_is_sorted(values in prop::collection::vec(-100i32..100, 0..120)) {
        let bst = Bst::from_values(values.iter().copied());
        let avl = AvlTree::from_values(values.iter().copied());
        let expected = sorted(values);
        prop_assert_eq!(bst.to_list(TraversalOrder::InOrder), expected.clone());
        prop_assert_eq!(avl.to_list(TraversalOrder::InOrder), expected);
    }

    #[test]
    fn bst_matches_reference(ops in prop::collection::vec(op_strategy(), 0..150)) {
        let mut tree: Bst<i32> = Bst::new();
        run_ops(&mut tree, &ops)?;
    }

    #[test]
    fn avl_matches_reference(ops in prop::collection::vec(op_strategy(), 0..150)) {
        let mut tree: AvlTree<i32> = AvlTree::new();
        run_ops(&mut tree, &ops)?;
        prop_assert!(tree.get_height() <= avl_height_bound(tree.len()));
    }

    #[test]
    fn insert_remove_round_trip(
        values in prop::collection::vec(-50i32..50, 0..60),
        extra in -60i32..60,
    ) {
        let mut avl = AvlTree::from_values(values.iter().copied());
        let mut bst = Bst::from_values(values.iter().copied());
        let avl_before = avl.to_list(TraversalOrder::InOrder);
        let bst_before = bst.to_list(TraversalOrder::InOrder);

        avl.insert(extra);
        bst.insert(extra);
        prop_assert_eq!(avl.remove(&extra), Ok(extra));
        prop_assert_eq!(bst.remove(&extra), Ok(extra));

        prop_assert_eq!(avl.to_list(TraversalOrder::InOrder), avl_before);
        prop_assert_eq!(bst.to_list(TraversalOrder::InOrder), bst_before);
    }

    #[test]
    fn find_is_idempotent(values in prop::collection::vec(0i32..30, 0..40), probe in 0i32..30) {
        let tree = AvlTree::from_values(values.iter().copied());
        let level_before = tree.to_list(TraversalOrder::LevelOrder);
        let first = tree.find(&probe);
        prop_assert_eq!(first, values.contains(&probe));
        for _ in 0..3 {
            prop_assert_eq!(tree.find(&probe), first);
        }
        prop_assert_eq!(tree.to_list(TraversalOrder::LevelOrder), level_before);
    }
}

#[test]
fn fuzz_avl_balance_after_every_step() {
    for seed in 0..25u64 {
        for size in SIZES {
            let mut fuzzer = Fuzzer::new(seed * 1_000 + size as u64);
            let mut values = fuzzer.values(size, 200);
            let mut tree: AvlTree<i32> = AvlTree::new();

            for &v in &values {
                tree.insert(v);
                if let Err(e) = tree.assert_valid() {
                    panic!("seed {} size {size}: {e}", fuzzer.seed);
                }
            }
            assert!(tree.get_height() <= avl_height_bound(size));
            assert!(is_sorted(&tree.to_list(TraversalOrder::InOrder)));

            fuzzer.shuffle(&mut values);
            for (removed, v) in values.iter().enumerate() {
                assert_eq!(tree.remove(v), Ok(*v), "seed {}", fuzzer.seed);
                if let Err(e) = tree.assert_valid() {
                    panic!("seed {} size {size}: {e}", fuzzer.seed);
                }
                assert_eq!(tree.len(), size - removed - 1);
            }
            assert!(tree.is_empty());
        }
    }
}

#[test]
fn fuzz_bst_heights_after_every_step() {
    for seed in 0..25u64 {
        for size in SIZES {
            let mut fuzzer = Fuzzer::new(seed ^ 0x5eed);
            let values = fuzzer.values(size, 60);
            let mut tree: Bst<i32> = Bst::new();
            for &v in &values {
                tree.insert(v);
                tree.assert_valid().unwrap();
            }
            assert_eq!(tree.to_list(TraversalOrder::InOrder), sorted(values.clone()));

            for _ in 0..size / 2 {
                let v = fuzzer.random_int(0, 60);
                let present = tree.find(&v);
                assert_eq!(tree.remove(&v).is_ok(), present);
                tree.assert_valid().unwrap();
            }
        }
    }
}
