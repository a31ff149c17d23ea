//! Ordering of a folder's children.

use std::cmp::Ordering;

use super::mtime::MtimeMemo;
use crate::models::{Node, SortPolicy};

/// Case-aware name comparison.
///
/// Names compare case-insensitively first, so `apple` sorts next to `Apple`
/// rather than after every capitalized name; exact byte order breaks the
/// remaining ties to keep the order total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Order `children` under `policy` without touching the tree.
pub fn order<'a>(children: &'a [Node], policy: SortPolicy) -> Vec<&'a Node> {
    order_with(children, policy, &mut MtimeMemo::new())
}

/// Like [`order`], reusing a memo across several calls in one render.
pub fn order_with<'a>(
    children: &'a [Node],
    policy: SortPolicy,
    memo: &mut MtimeMemo,
) -> Vec<&'a Node> {
    match policy {
        SortPolicy::AlphabeticalFoldersFirst => {
            let mut items: Vec<&Node> = children.iter().collect();
            items.sort_by(|a, b| match (a, b) {
                (Node::Folder(_), Node::File(_)) => Ordering::Less,
                (Node::File(_), Node::Folder(_)) => Ordering::Greater,
                _ => by_name(a, b),
            });
            items
        }
        SortPolicy::RecencyDescending => {
            let mut keyed: Vec<(i64, &Node)> = children
                .iter()
                .map(|child| (memo.get(child), child))
                .collect();
            keyed.sort_by(|(a_time, a), (b_time, b)| {
                b_time.cmp(a_time).then_with(|| by_name(a, b))
            });
            keyed.into_iter().map(|(_, node)| node).collect()
        }
    }
}

fn by_name(a: &Node, b: &Node) -> Ordering {
    compare_names(a.name(), b.name()).then_with(|| a.path().cmp(b.path()))
}
