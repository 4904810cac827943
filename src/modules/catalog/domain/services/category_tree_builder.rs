use std::collections::HashMap;

use crate::modules::catalog::domain::entities::{CategoryNode, CategoryTree, CategoryTreeNode};

/// Deepest nesting kept in a built tree; a node that would sit deeper is
/// attached as a root instead.
pub const MAX_CATEGORY_DEPTH: usize = 64;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unseen,
    OnPath,
    Done,
}

/// Turns a flat parent-pointer list into an ordered forest.
///
/// Roots and children keep input order. A node becomes a root when it declares
/// no parent, when its parent is missing from the input, when it points at
/// itself, when it closes a parent cycle (the earliest node of the cycle is
/// promoted) or when it would sit deeper than [`MAX_CATEGORY_DEPTH`].
/// Duplicate ids keep their first occurrence. Runs in linear time without
/// recursion.
pub struct CategoryTreeBuilder;

impl CategoryTreeBuilder {
    pub fn build(categories: &[CategoryNode]) -> CategoryTree {
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(categories.len());
        let mut nodes: Vec<&CategoryNode> = Vec::with_capacity(categories.len());

        for category in categories {
            if index.contains_key(category.id.as_str()) {
                log::debug!("Dropping duplicate category id '{}'", category.id);
                continue;
            }
            index.insert(category.id.as_str(), nodes.len());
            nodes.push(category);
        }

        let mut parents: Vec<Option<usize>> = nodes
            .iter()
            .enumerate()
            .map(|(position, node)| {
                node.declared_parent()
                    .and_then(|parent_id| index.get(parent_id).copied())
                    .filter(|parent| *parent != position)
            })
            .collect();

        Self::break_cycles(&mut parents);
        let depths = Self::cap_depth(&mut parents);

        let mut by_depth: Vec<Vec<usize>> = vec![Vec::new(); MAX_CATEGORY_DEPTH];
        for (position, depth) in depths.iter().enumerate() {
            by_depth[*depth].push(position);
        }

        // Deepest level first, so every node is complete before it moves
        // under its parent; within a level input order is kept.
        let mut built: Vec<Option<CategoryTreeNode>> = nodes
            .iter()
            .map(|node| Some(CategoryTreeNode::leaf(node)))
            .collect();
        for level in by_depth.iter().skip(1).rev() {
            for &position in level {
                let Some(parent) = parents[position] else {
                    continue;
                };
                if let Some(child) = built[position].take() {
                    if let Some(parent_node) = built[parent].as_mut() {
                        parent_node.children.push(child);
                    }
                }
            }
        }

        let forest = by_depth[0]
            .iter()
            .filter_map(|&root| built[root].take())
            .collect();

        CategoryTree::new(forest)
    }

    /// Promote the first node (in input order) of every parent cycle to a root
    fn break_cycles(parents: &mut [Option<usize>]) {
        let mut state = vec![Visit::Unseen; parents.len()];
        let mut path = Vec::new();

        for start in 0..parents.len() {
            let mut current = Some(start);
            while let Some(node) = current {
                match state[node] {
                    Visit::Done => break,
                    Visit::OnPath => {
                        let cycle_start = path.iter().position(|&p| p == node).unwrap_or(0);
                        if let Some(&earliest) = path[cycle_start..].iter().min() {
                            log::debug!(
                                "Category parent cycle detected, promoting node {} to root",
                                earliest
                            );
                            parents[earliest] = None;
                        }
                        break;
                    }
                    Visit::Unseen => {
                        state[node] = Visit::OnPath;
                        path.push(node);
                        current = parents[node];
                    }
                }
            }
            for node in path.drain(..) {
                state[node] = Visit::Done;
            }
        }
    }

    /// Depth of every node (roots are 0) on an acyclic parent list; nodes
    /// that would reach [`MAX_CATEGORY_DEPTH`] are detached into roots
    fn cap_depth(parents: &mut [Option<usize>]) -> Vec<usize> {
        let mut depths: Vec<Option<usize>> = vec![None; parents.len()];
        let mut path = Vec::new();

        for start in 0..parents.len() {
            let mut current = Some(start);
            while let Some(node) = current {
                if depths[node].is_some() {
                    break;
                }
                path.push(node);
                current = parents[node];
            }

            // Walk back down from the topmost unresolved ancestor
            while let Some(node) = path.pop() {
                let depth = match parents[node].and_then(|parent| depths[parent]) {
                    Some(parent_depth) if parent_depth + 1 < MAX_CATEGORY_DEPTH => parent_depth + 1,
                    Some(_) => {
                        log::debug!("Category nesting too deep, promoting node {} to root", node);
                        parents[node] = None;
                        0
                    }
                    None => 0,
                };
                depths[node] = Some(depth);
            }
        }

        depths.into_iter().map(|depth| depth.unwrap_or(0)).collect()
    }
}
