use search_trees::{BalancedTree, Traversal};

use crate::{init_logging, sorted, Keys};

fn build(keys: &[i16]) -> BalancedTree<i16> {
    let mut tree = BalancedTree::new();
    for key in keys {
        tree.insert(*key);
    }
    tree
}

#[quickcheck]
fn stays_balanced(keys: Keys) -> bool {
    init_logging();
    let mut tree = BalancedTree::new();
    keys.into_vec().into_iter().all(|key| {
        tree.insert(key);
        tree.validate().is_ok()
    })
}

#[quickcheck]
fn height_is_logarithmic(keys: Keys) -> bool {
    let tree = build(&keys.into_vec());
    let n = tree.len() as f64;

    tree.height() as f64 <= 1.45 * (n + 2.0).log2()
}

/// Equal keys are dropped so the in-order walk is the sorted set of keys.
#[quickcheck]
fn in_order_is_sorted_and_distinct(keys: Keys) -> bool {
    let keys = keys.into_vec();
    let tree = build(&keys);

    let mut expected = sorted(&keys);
    expected.dedup();
    tree.in_order() == expected && tree.len() == expected.len()
}

#[quickcheck]
fn traversals_agree(keys: Keys) -> bool {
    let tree = build(&keys.into_vec());
    let in_order = tree.in_order();

    sorted(&tree.pre_order()) == in_order
        && sorted(&tree.post_order()) == in_order
        && sorted(&tree.bfs()) == in_order
}

#[quickcheck]
fn contains_exactly_the_inserted_keys(keys: Keys, others: Vec<i16>) -> bool {
    let keys = keys.into_vec();
    let tree = build(&keys);

    keys.iter().all(|key| tree.contains(key))
        && others
            .iter()
            .filter(|key| !keys.contains(key))
            .all(|key| !tree.contains(key))
}
