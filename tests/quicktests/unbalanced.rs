use search_trees::{BalancedTree, ColoredTree, Traversal, UnbalancedTree};

use crate::{init_logging, sorted, Keys};

fn build(keys: &[i16]) -> UnbalancedTree<i16> {
    let mut tree = UnbalancedTree::new();
    for key in keys {
        tree.insert(*key);
    }
    tree
}

#[quickcheck]
fn in_order_is_sorted(keys: Keys) -> bool {
    let keys = keys.into_vec();
    let tree = build(&keys);

    tree.in_order() == sorted(&keys) && tree.len() == keys.len()
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
fn stays_ordered(keys: Keys) -> bool {
    let mut tree = UnbalancedTree::new();
    keys.into_vec().into_iter().all(|key| {
        tree.insert(key);
        tree.validate().is_ok()
    })
}

#[quickcheck]
fn contains_every_key(keys: Keys) -> bool {
    let keys = keys.into_vec();
    let tree = build(&keys);

    keys.iter().all(|key| tree.contains(key))
}

/// Sorted input degenerates into a chain. The balanced trees given the same input don't.
#[quickcheck]
fn ascending_keys_build_a_chain(keys: Vec<i16>) -> bool {
    init_logging();
    let keys = sorted(&keys);

    let unbalanced = build(&keys);
    let mut balanced = BalancedTree::new();
    let mut colored = ColoredTree::new();
    for key in &keys {
        balanced.insert(*key);
        colored.insert(*key);
    }

    let lg = ((keys.len() + 1) as f64).log2();
    unbalanced.height() == keys.len()
        && balanced.height() as f64 <= 1.45 * lg + 1.0
        && colored.height() as f64 <= 2.0 * lg
}
