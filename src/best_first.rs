//! Best-first search in the style of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html),
//! except that nodes are never relaxed in place: every discovery appends a fresh node to an arena
//! and stale duplicates are discarded when they are popped after their position was finalized.

use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use log::trace;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

pub type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// A discovery of `position`. Parents are arena indices, so nodes own nothing.
#[derive(Clone, Debug)]
struct SearchNode<N, C> {
    position: N,
    parent: Option<usize>,
    g: C,
    h: C,
    f: C,
}

struct SmallestCostHolder<K> {
    estimated_cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.index == other.index
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Orders on estimated cost only. Arena indices grow with every insertion, so preferring
        // the smaller index breaks ties first-in first-out.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.index.cmp(&self.index),
            s => s,
        }
    }
}

/// How a search ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchEnd<N, C> {
    /// A node satisfying the success predicate was extracted.
    Found { path: Vec<N>, cost: C },
    /// The frontier ran empty.
    Exhausted,
    /// The expansion bound was reached first.
    LimitReached,
}

/// Result of [best_first] together with the positions it expanded, in expansion order.
#[derive(Clone, Debug)]
pub struct SearchRun<N, C> {
    pub end: SearchEnd<N, C>,
    pub expanded: FxIndexSet<N>,
    /// Number of nodes created, duplicates included.
    pub generated: usize,
}

fn reverse_path<N, C>(arena: &[SearchNode<N, C>], goal_index: usize) -> Vec<N>
where
    N: Clone,
{
    let mut path: Vec<N> = std::iter::successors(Some(goal_index), |&i| arena[i].parent)
        .map(|i| arena[i].position.clone())
        .collect();
    path.reverse();
    path
}

pub fn best_first<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    max_expansions: Option<usize>,
) -> SearchRun<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let h = heuristic(start);
    let mut arena = vec![SearchNode {
        position: start.clone(),
        parent: None,
        g: C::zero(),
        h,
        f: h,
    }];
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: h,
        index: 0,
    });
    let mut visited: FxIndexSet<N> = FxIndexSet::default();

    let end = loop {
        let Some(SmallestCostHolder { index, .. }) = to_see.pop() else {
            break SearchEnd::Exhausted;
        };
        // A position can sit in the heap several times, once per parent it was discovered from.
        // Only the first extraction counts.
        if visited.contains(&arena[index].position) {
            continue;
        }
        let (position, g) = {
            let node = &arena[index];
            debug_assert!(node.f == node.g + node.h);
            (node.position.clone(), node.g)
        };
        // Reaching the goal is not an expansion, so the bound only stops work that generates nodes.
        if success(&position) {
            visited.insert(position);
            break SearchEnd::Found {
                path: reverse_path(&arena, index),
                cost: g,
            };
        }
        if max_expansions.is_some_and(|limit| visited.len() >= limit) {
            break SearchEnd::LimitReached;
        }
        trace!("Expanding node {} of {}", index, arena.len());
        visited.insert(position.clone());
        for (successor, move_cost) in successors(&position) {
            if visited.contains(&successor) {
                continue;
            }
            let new_g = g + move_cost;
            let new_h = heuristic(&successor);
            let n = arena.len();
            arena.push(SearchNode {
                position: successor,
                parent: Some(index),
                g: new_g,
                h: new_h,
                f: new_g + new_h,
            });
            to_see.push(SmallestCostHolder {
                estimated_cost: new_g + new_h,
                index: n,
            });
        }
    };
    SearchRun {
        end,
        expanded: visited,
        generated: arena.len(),
    }
}
