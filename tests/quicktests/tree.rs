use pathwork::tree::{Order, Tree};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::{init_tracing, Op};

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same keys, in the same order, in both.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                assert_eq!(tree.insert(k.clone()), set.insert(k.clone()));
            }
            Op::Remove(k) => {
                assert_eq!(tree.delete(k).is_some(), set.remove(k));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_tracing();
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.in_order().into_iter().eq(set.iter()) && tree.len() == set.len()
}

#[quickcheck]
fn in_order_is_sorted_and_deduplicated(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    tree.in_order().into_iter().copied().eq(expected)
}

#[quickcheck]
fn reinserting_changes_nothing(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let before: Vec<_> = tree.pre_order().into_iter().copied().collect();

    let added_any = xs.iter().any(|x| tree.insert(*x));
    let after: Vec<_> = tree.pre_order().into_iter().copied().collect();

    !added_any && before == after
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x).map(|node| node.key()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();

    nots.iter()
        .filter(|x| !added.contains(*x))
        .all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    // We may have inserted the same value multiple times - delete each one.
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| !tree.contains(x)) && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn predecessor_undoes_successor(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.in_order().into_iter().all(|key| match tree.successor(key) {
        Some(next) => tree.predecessor(next) == Some(key),
        None => tree.maximum() == Some(key),
    })
}

#[quickcheck]
fn extremes(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.minimum() == xs.iter().min()
        && tree.maximum() == xs.iter().max()
        && tree.minimum().and_then(|min| tree.predecessor(min)).is_none()
}

#[quickcheck]
fn every_order_visits_every_key_once(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    [Order::PreOrder, Order::PostOrder].iter().all(|order| {
        let mut keys = tree.keys(*order);
        keys.sort_unstable();
        keys == tree.in_order()
    })
}

#[quickcheck]
fn pre_order_rebuilds_the_same_tree(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let rebuilt: Tree<_> = tree.pre_order().into_iter().copied().collect();

    rebuilt.pre_order() == tree.pre_order() && rebuilt.height() == tree.height()
}
