use search_trees::{ColoredTree, Traversal, UnbalancedTree};

use crate::{init_logging, sorted, Keys};

fn build(keys: &[i16]) -> ColoredTree<i16> {
    let mut tree = ColoredTree::new();
    for key in keys {
        tree.insert(*key);
    }
    tree
}

#[quickcheck]
fn keeps_red_black_invariants(keys: Keys) -> bool {
    init_logging();
    let mut tree = ColoredTree::new();
    keys.into_vec().into_iter().all(|key| {
        tree.insert(key);
        tree.validate().is_ok()
    })
}

#[quickcheck]
fn height_is_logarithmic(keys: Keys) -> bool {
    let tree = build(&keys.into_vec());
    let n = tree.len() as f64;

    tree.height() as f64 <= 2.0 * (n + 1.0).log2()
}

/// Equal keys are kept, like in the unbalanced tree, so both walk the same keys in order.
#[quickcheck]
fn in_order_matches_unbalanced_tree(keys: Keys) -> bool {
    let keys = keys.into_vec();
    let tree = build(&keys);
    let mut unbalanced = UnbalancedTree::new();
    for key in &keys {
        unbalanced.insert(*key);
    }

    tree.in_order() == sorted(&keys) && tree.in_order() == unbalanced.in_order()
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
fn contains_every_key(keys: Keys) -> bool {
    let keys = keys.into_vec();
    let tree = build(&keys);

    tree.len() == keys.len() && keys.iter().all(|key| tree.contains(key))
}
