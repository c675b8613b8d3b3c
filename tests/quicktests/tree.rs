use balanced_bst::{Node, Tree};

use std::collections::VecDeque;

use crate::Op;

/// Sorts and dedups, the same way the tree treats keys when it is built.
fn distinct_sorted<K: Ord + Clone>(xs: &[K]) -> Vec<K> {
    let mut xs = xs.to_vec();
    xs.sort();
    xs.dedup();
    xs
}

fn owned<K: Clone>(keys: Vec<&K>) -> Vec<K> {
    keys.into_iter().cloned().collect()
}

/// Applies a set of operations to a tree and a plain `Vec` of every key that should be in it.
/// Rebalancing collapses duplicates in the model too.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, model: &mut Vec<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                tree.insert(k.clone());
                model.push(k.clone());
            }
            Op::Rebalance => {
                tree.rebalance();
                *model = distinct_sorted(model);
            }
        }
    }
}

/// Queue based breadth-first walk to compare the level-order visitor against.
fn breadth_first<K: Clone>(tree: &Tree<K>) -> Vec<K> {
    let mut out = Vec::new();
    let mut queue: VecDeque<&Node<K>> = tree.root().into_iter().collect();
    while let Some(node) = queue.pop_front() {
        out.push(node.key().clone());
        queue.extend(node.left());
        queue.extend(node.right());
    }
    out
}

/// Checks that every key on the left of a node is smaller and every key on the right is at
/// least as large.
fn is_ordered<K: Ord>(node: Option<&Node<K>>) -> bool {
    let Some(node) = node else {
        return true;
    };
    let left_ok = node
        .left()
        .map_or(true, |left| left.in_order().into_iter().all(|k| k < node.key()));
    let right_ok = node
        .right()
        .map_or(true, |right| right.in_order().into_iter().all(|k| k >= node.key()));
    left_ok && right_ok && is_ordered(node.left()) && is_ordered(node.right())
}

#[quickcheck]
fn built_in_order_is_sorted_distinct(xs: Vec<i8>) -> bool {
    let tree = Tree::from_keys(xs.clone());

    owned(tree.in_order()) == distinct_sorted(&xs)
}

#[quickcheck]
fn built_is_balanced(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    tree.is_balanced() && is_ordered(tree.root())
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model);
    model.sort();
    owned(tree.in_order()) == model && tree.len() == model.len() && is_ordered(tree.root())
}

#[quickcheck]
fn rebalance_is_balanced(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model);
    tree.rebalance();
    tree.is_balanced() && owned(tree.in_order()) == distinct_sorted(&model)
}

#[quickcheck]
fn rebalance_of_built_is_unchanged(xs: Vec<i8>) -> bool {
    let mut tree = Tree::from_keys(xs);
    let pre_order = owned(tree.pre_order());
    let in_order = owned(tree.in_order());

    tree.rebalance();
    tree.is_balanced() && owned(tree.pre_order()) == pre_order && owned(tree.in_order()) == in_order
}

#[quickcheck]
fn rebalance_drops_exactly_the_duplicates(xs: Vec<i8>, dups: Vec<i8>) -> bool {
    let mut tree = Tree::from_keys(xs.clone());
    let before = tree.len();
    for d in &dups {
        tree.insert(*d);
    }
    let mut all = xs;
    all.extend(&dups);
    let duplicates = before + dups.len() - distinct_sorted(&all).len();

    let len_with_dups = tree.len();
    tree.rebalance();
    tree.len() == len_with_dups - duplicates
}

#[quickcheck]
fn level_order_is_breadth_first(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree, &mut Vec::new());

    let mut visited = Vec::new();
    tree.level_order(|node| visited.push(*node.key()));
    visited == breadth_first(&tree)
}

#[quickcheck]
fn traversals_visit_every_node(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree, &mut Vec::new());

    let mut sorted = owned(tree.in_order());
    let mut pre = owned(tree.pre_order());
    let mut post = owned(tree.post_order());
    pre.sort();
    post.sort();
    sorted.sort();
    sorted.len() == tree.len() && pre == sorted && post == sorted
}

#[quickcheck]
fn height_matches_subtrees(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree, &mut Vec::new());

    match tree.root() {
        None => tree.height() == -1,
        Some(root) => {
            let left = root.left().map_or(-1, Node::height);
            let right = root.right().map_or(-1, Node::height);
            tree.height() == 1 + left.max(right)
        }
    }
}
