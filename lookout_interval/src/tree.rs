// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! AA-tree over closed intervals, augmented with a per-subtree maximum for pruning.
//!
//! Nodes live in a dense arena and refer to their children by index. Every live
//! index is referenced by exactly one child slot (or the root slot), so freeing a
//! node is a `swap_remove` plus re-pointing the one slot that referenced the moved
//! node.
//!
//! Rebalancing and traversal use explicit stacks; nothing recurses on tree height.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::{self, Debug};

use crate::types::Interval;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct NodeIdx(usize);

impl NodeIdx {
    const fn new(i: usize) -> Self {
        Self(i)
    }

    const fn get(self) -> usize {
        self.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

#[derive(Clone, Debug)]
struct Node<T, D> {
    interval: Interval<T>,
    // max of `interval.max` over this node and all descendants
    max_tree: T,
    level: u32,
    left: Option<NodeIdx>,
    right: Option<NodeIdx>,
    data: D,
}

impl<T: Copy, D> Node<T, D> {
    fn leaf(interval: Interval<T>, data: D) -> Self {
        Self {
            interval,
            max_tree: interval.max,
            level: 1,
            left: None,
            right: None,
            data,
        }
    }

    fn child(&self, side: Side) -> Option<NodeIdx> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn set_child(&mut self, side: Side, child: Option<NodeIdx>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}

/// Balanced interval tree mapping each distinct [`Interval`] to one payload.
///
/// Keys are ordered by `min`, ties broken by `max`; the payload never takes part in
/// ordering or lookup. Point and range queries are boundary-inclusive and prune
/// subtrees through the cached subtree maximum, so they cost `O(log n + k)` for `k`
/// results.
///
/// Each interval is stored at most once: inserting a key that is already present
/// keeps the existing payload and reports `false`. Callers that need several
/// payloads under one interval store a collection as the payload, as
/// [`IntervalTree2D`](crate::IntervalTree2D) does.
///
/// # Example
///
/// ```rust
/// use lookout_interval::{Interval, IntervalTree};
///
/// let mut tree = IntervalTree::new();
/// tree.insert(Interval::new(1, 4), 'a');
/// tree.insert(Interval::new(6, 9), 'b');
/// tree.insert(Interval::new(7, 11), 'c');
///
/// let hits: Vec<_> = tree.items_at(8).copied().collect();
/// assert_eq!(hits, ['b', 'c']);
///
/// assert_eq!(tree.remove(Interval::new(6, 9)), Some('b'));
/// assert_eq!(tree.items().copied().collect::<Vec<_>>(), ['a', 'c']);
/// ```
#[derive(Clone)]
pub struct IntervalTree<T, D> {
    nodes: Vec<Node<T, D>>,
    root: Option<NodeIdx>,
}

impl<T, D> Default for IntervalTree<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, D> IntervalTree<T, D> {
    /// Create an empty tree.
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Create an empty tree with room for `n` entries.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(n),
            root: None,
        }
    }

    /// Reserve space for at least `n` more entries.
    pub fn reserve(&mut self, n: usize) {
        self.nodes.reserve(n);
    }

    /// Number of stored intervals.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the tree holds no intervals.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// AA level of the root (0 when empty). The tree height is at most twice this.
    pub fn root_level(&self) -> u32 {
        self.level_of(self.root)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    fn level_of(&self, node: Option<NodeIdx>) -> u32 {
        node.map_or(0, |i| self.nodes[i.get()].level)
    }
}

impl<T: Copy + Ord, D> IntervalTree<T, D> {
    /// Payload stored under exactly `interval`, if any.
    pub fn find(&self, interval: Interval<T>) -> Option<&D> {
        self.locate(&interval).map(|i| &self.nodes[i.get()].data)
    }

    /// Mutable payload stored under exactly `interval`, if any.
    pub fn find_mut(&mut self, interval: Interval<T>) -> Option<&mut D> {
        self.locate(&interval).map(|i| &mut self.nodes[i.get()].data)
    }

    /// Whether `interval` is stored as a key.
    pub fn contains_key(&self, interval: Interval<T>) -> bool {
        self.locate(&interval).is_some()
    }

    /// Insert `data` under `interval`.
    ///
    /// Returns `false` and leaves the tree untouched (dropping `data`) if the interval
    /// is already present.
    pub fn insert(&mut self, interval: Interval<T>, data: D) -> bool {
        self.insert_with(interval, || data).1
    }

    /// Payload under `interval`, inserting `make()` first if the key is absent.
    pub fn get_or_insert_with<F: FnOnce() -> D>(
        &mut self,
        interval: Interval<T>,
        make: F,
    ) -> &mut D {
        let (i, _) = self.insert_with(interval, make);
        &mut self.nodes[i.get()].data
    }

    /// Remove the entry stored under exactly `interval` and return its payload.
    ///
    /// Absent keys leave the tree unchanged and return `None`.
    pub fn remove(&mut self, interval: Interval<T>) -> Option<D> {
        let mut path: Vec<(NodeIdx, Side)> = Vec::new();
        let mut cur = self.root;
        let target = loop {
            let i = cur?;
            let node = &self.nodes[i.get()];
            let side = match interval.cmp(&node.interval) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => break i,
            };
            path.push((i, side));
            cur = node.child(side);
        };

        // With two children, the in-order predecessor trades entries with the target
        // and its node (which has no right child) is the one unlinked.
        let target_node = &self.nodes[target.get()];
        let doomed = match (target_node.left, target_node.right) {
            (Some(left), Some(_)) => {
                path.push((target, Side::Left));
                let mut pred = left;
                while let Some(r) = self.nodes[pred.get()].right {
                    path.push((pred, Side::Right));
                    pred = r;
                }
                self.swap_entries(target, pred);
                pred
            }
            _ => target,
        };

        let doomed_node = &self.nodes[doomed.get()];
        let mut child = doomed_node.left.or(doomed_node.right);
        while let Some((i, side)) = path.pop() {
            self.nodes[i.get()].set_child(side, child);
            child = Some(self.rebalance_after_remove(i));
        }
        self.root = child;
        Some(self.release(doomed))
    }

    /// Iterate all `(interval, payload)` entries in key order.
    pub fn iter(&self) -> Entries<'_, T, D> {
        Entries::new(self, None)
    }

    /// Iterate all payloads in key order.
    pub fn items(&self) -> impl Iterator<Item = &D> + '_ {
        self.iter().map(|(_, d)| d)
    }

    /// Entries whose interval contains `x`, in key order.
    pub fn entries_at(&self, x: T) -> Entries<'_, T, D> {
        Entries::new(self, Some(Interval::point(x)))
    }

    /// Entries whose interval overlaps `[x1, x2]`, in key order.
    pub fn entries_within(&self, x1: T, x2: T) -> Entries<'_, T, D> {
        Entries::new(self, Some(Interval::new(x1, x2)))
    }

    /// Payloads whose interval contains `x`.
    pub fn items_at(&self, x: T) -> impl Iterator<Item = &D> + '_ {
        self.entries_at(x).map(|(_, d)| d)
    }

    /// Payloads whose interval overlaps `[x1, x2]`.
    pub fn items_within(&self, x1: T, x2: T) -> impl Iterator<Item = &D> + '_ {
        self.entries_within(x1, x2).map(|(_, d)| d)
    }

    /// Call `op` on every payload whose interval overlaps `[x1, x2]`, in key order.
    pub fn visit_range<F: FnMut(&D)>(&self, x1: T, x2: T, mut op: F) {
        for d in self.items_within(x1, x2) {
            op(d);
        }
    }

    /// Render the node structure for debugging.
    pub fn dump(&self) -> TreeDump<'_, T, D> {
        TreeDump { tree: self }
    }

    fn locate(&self, key: &Interval<T>) -> Option<NodeIdx> {
        let mut cur = self.root;
        while let Some(i) = cur {
            let node = &self.nodes[i.get()];
            cur = match key.cmp(&node.interval) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(i),
            };
        }
        None
    }

    /// Shared insertion path. Returns the node holding `interval` and whether it was created.
    fn insert_with<F: FnOnce() -> D>(
        &mut self,
        interval: Interval<T>,
        make: F,
    ) -> (NodeIdx, bool) {
        debug_assert!(!interval.is_empty(), "interval min must not exceed its max");
        let mut path: Vec<(NodeIdx, Side)> = Vec::new();
        let mut cur = self.root;
        while let Some(i) = cur {
            let node = &self.nodes[i.get()];
            let side = match interval.cmp(&node.interval) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return (i, false),
            };
            path.push((i, side));
            cur = node.child(side);
        }

        let fresh = NodeIdx::new(self.nodes.len());
        self.nodes.push(Node::leaf(interval, make()));

        let mut child = fresh;
        while let Some((i, side)) = path.pop() {
            self.nodes[i.get()].set_child(side, Some(child));
            let top = self.skew(i);
            let top = self.split(top);
            self.fix_max(top);
            child = top;
        }
        self.root = Some(child);
        (fresh, true)
    }

    /// Restore levels on the way up from a removal. Returns the new subtree root.
    fn rebalance_after_remove(&mut self, t: NodeIdx) -> NodeIdx {
        let node = &self.nodes[t.get()];
        let expected = self.level_of(node.left).min(self.level_of(node.right)) + 1;
        if expected >= node.level {
            self.fix_max(t);
            return t;
        }

        let right = node.right;
        self.nodes[t.get()].level = expected;
        if let Some(r) = right {
            let rn = &mut self.nodes[r.get()];
            if rn.level > expected {
                rn.level = expected;
            }
        }

        let t = self.skew(t);
        if let Some(r) = self.nodes[t.get()].right {
            let r = self.skew(r);
            self.nodes[t.get()].right = Some(r);
            if let Some(rr) = self.nodes[r.get()].right {
                let rr = self.skew(rr);
                self.nodes[r.get()].right = Some(rr);
            }
            self.fix_max(r);
        }
        let t = self.split(t);
        if let Some(r) = self.nodes[t.get()].right {
            let r = self.split(r);
            self.nodes[t.get()].right = Some(r);
        }
        self.fix_max(t);
        t
    }

    /// Remove a left horizontal link by rotating right, repeating on the demoted
    /// node while it still has one. Returns the new subtree root.
    fn skew(&mut self, t: NodeIdx) -> NodeIdx {
        let mut top = t;
        let mut lifted: Vec<NodeIdx> = Vec::new();
        while let Some(l) = self.horizontal_left(t) {
            self.nodes[t.get()].left = self.nodes[l.get()].right;
            self.nodes[l.get()].right = Some(t);
            match lifted.last() {
                Some(&above) => self.nodes[above.get()].right = Some(l),
                None => top = l,
            }
            lifted.push(l);
        }
        self.fix_max(t);
        for &l in lifted.iter().rev() {
            self.fix_max(l);
        }
        top
    }

    /// Break a double right horizontal link by rotating left and promoting the
    /// middle node, continuing down the new right subtree. Returns the new subtree root.
    fn split(&mut self, t: NodeIdx) -> NodeIdx {
        let mut top = t;
        let mut lifted: Vec<NodeIdx> = Vec::new();
        let mut cur = t;
        while let Some(r) = self.double_horizontal_right(cur) {
            self.nodes[cur.get()].right = self.nodes[r.get()].left;
            let rn = &mut self.nodes[r.get()];
            rn.left = Some(cur);
            rn.level += 1;
            self.fix_max(cur);
            match lifted.last() {
                Some(&above) => self.nodes[above.get()].right = Some(r),
                None => top = r,
            }
            lifted.push(r);
            match self.nodes[r.get()].right {
                Some(next) => cur = next,
                None => break,
            }
        }
        for &r in lifted.iter().rev() {
            self.fix_max(r);
        }
        top
    }

    fn horizontal_left(&self, i: NodeIdx) -> Option<NodeIdx> {
        let node = &self.nodes[i.get()];
        let l = node.left?;
        (self.nodes[l.get()].level == node.level).then_some(l)
    }

    fn double_horizontal_right(&self, i: NodeIdx) -> Option<NodeIdx> {
        let node = &self.nodes[i.get()];
        let r = node.right?;
        let rr = self.nodes[r.get()].right?;
        (self.nodes[rr.get()].level == node.level).then_some(r)
    }

    fn fix_max(&mut self, i: NodeIdx) {
        let node = &self.nodes[i.get()];
        let mut m = node.interval.max;
        for c in [node.left, node.right].into_iter().flatten() {
            m = m.max(self.nodes[c.get()].max_tree);
        }
        self.nodes[i.get()].max_tree = m;
    }

    fn swap_entries(&mut self, a: NodeIdx, b: NodeIdx) {
        let (lo, hi) = if a.get() < b.get() { (a, b) } else { (b, a) };
        let (head, tail) = self.nodes.split_at_mut(hi.get());
        let x = &mut head[lo.get()];
        let y = &mut tail[0];
        core::mem::swap(&mut x.interval, &mut y.interval);
        core::mem::swap(&mut x.data, &mut y.data);
    }

    /// Free an unlinked node, keeping the arena dense.
    fn release(&mut self, doomed: NodeIdx) -> D {
        let last = NodeIdx::new(self.nodes.len() - 1);
        let node = self.nodes.swap_remove(doomed.get());
        if doomed != last {
            // The former last node now lives at `doomed`; re-point its one referrer.
            if self.root == Some(last) {
                self.root = Some(doomed);
            } else {
                let key = self.nodes[doomed.get()].interval;
                let mut cur = self.root;
                while let Some(i) = cur {
                    let n = &mut self.nodes[i.get()];
                    let side = if key < n.interval {
                        Side::Left
                    } else {
                        Side::Right
                    };
                    if n.child(side) == Some(last) {
                        n.set_child(side, Some(doomed));
                        break;
                    }
                    cur = n.child(side);
                }
            }
        }
        node.data
    }

    /// Panics if any AA-tree, ordering, or `max_tree` invariant is violated.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        for node in &self.nodes {
            let level = node.level;
            match node.left {
                Some(l) => assert_eq!(
                    self.nodes[l.get()].level + 1,
                    level,
                    "left child must sit exactly one level down"
                ),
                None => assert_eq!(level, 1, "node without a left child must be level 1"),
            }
            match node.right {
                Some(r) => {
                    let rl = self.nodes[r.get()].level;
                    assert!(
                        rl == level || rl + 1 == level,
                        "right child must be level or one below"
                    );
                    if let Some(rr) = self.nodes[r.get()].right {
                        assert!(
                            self.nodes[rr.get()].level < level,
                            "no two consecutive right horizontal links"
                        );
                    }
                }
                None => assert_eq!(level, 1, "node without a right child must be level 1"),
            }
            let mut m = node.interval.max;
            for c in [node.left, node.right].into_iter().flatten() {
                m = m.max(self.nodes[c.get()].max_tree);
            }
            assert!(m == node.max_tree, "max_tree must be exact");
        }
        let keys: Vec<_> = self.iter().map(|(k, _)| k).collect();
        assert_eq!(keys.len(), self.nodes.len(), "every node reachable once");
        assert!(
            keys.windows(2).all(|w| w[0] < w[1]),
            "in-order keys strictly increasing"
        );
    }
}

impl<T: Copy + Ord, D> FromIterator<(Interval<T>, D)> for IntervalTree<T, D> {
    fn from_iter<I: IntoIterator<Item = (Interval<T>, D)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Copy + Ord, D> Extend<(Interval<T>, D)> for IntervalTree<T, D> {
    fn extend<I: IntoIterator<Item = (Interval<T>, D)>>(&mut self, iter: I) {
        for (interval, data) in iter {
            self.insert(interval, data);
        }
    }
}

/// Trees compare equal when they hold the same entries, whatever their shape.
impl<T: Copy + Ord, D: PartialEq> PartialEq for IntervalTree<T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Copy + Ord, D: Eq> Eq for IntervalTree<T, D> {}

impl<T: Debug, D> Debug for IntervalTree<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalTree")
            .field("len", &self.nodes.len())
            .field("root_level", &self.level_of(self.root))
            .field(
                "span_max",
                &self.root.map(|r| &self.nodes[r.get()].max_tree),
            )
            .finish_non_exhaustive()
    }
}

/// In-order iterator over `(interval, payload)` entries, optionally limited to
/// entries overlapping a query interval.
///
/// Created by [`IntervalTree::iter`], [`IntervalTree::entries_at`] and
/// [`IntervalTree::entries_within`].
pub struct Entries<'a, T, D> {
    tree: &'a IntervalTree<T, D>,
    query: Option<Interval<T>>,
    stack: Vec<NodeIdx>,
}

impl<'a, T: Copy + Ord, D> Entries<'a, T, D> {
    fn new(tree: &'a IntervalTree<T, D>, query: Option<Interval<T>>) -> Self {
        let mut it = Self {
            tree,
            query,
            stack: Vec::new(),
        };
        it.descend(tree.root);
        it
    }

    /// Push the left spine of `cur`, skipping subtrees that end before the query.
    fn descend(&mut self, mut cur: Option<NodeIdx>) {
        let tree = self.tree;
        while let Some(i) = cur {
            let node = &tree.nodes[i.get()];
            if let Some(q) = self.query
                && node.max_tree < q.min
            {
                break;
            }
            self.stack.push(i);
            cur = node.left;
        }
    }
}

impl<'a, T: Copy + Ord, D> Iterator for Entries<'a, T, D> {
    type Item = (Interval<T>, &'a D);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        while let Some(i) = self.stack.pop() {
            let node = &tree.nodes[i.get()];
            let Some(q) = self.query else {
                self.descend(node.right);
                return Some((node.interval, &node.data));
            };
            if q.max < node.interval.min {
                // Everything still pending starts even later.
                self.stack.clear();
                return None;
            }
            self.descend(node.right);
            if node.interval.overlaps(&q) {
                return Some((node.interval, &node.data));
            }
        }
        None
    }
}

impl<T: Debug, D> Debug for Entries<'_, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entries")
            .field("query", &self.query)
            .field("pending", &self.stack.len())
            .finish_non_exhaustive()
    }
}

/// Indented rendering of an [`IntervalTree`]'s nodes, returned by [`IntervalTree::dump`].
///
/// Each line shows one node as `[min, max] level=.. max_tree=..`, prefixed with
/// `L`/`R` for its side; children are indented under their parent.
pub struct TreeDump<'a, T, D> {
    tree: &'a IntervalTree<T, D>,
}

impl<T: Debug, D> fmt::Display for TreeDump<'_, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = &self.tree.nodes;
        let mut stack: Vec<(NodeIdx, usize, &str)> = Vec::new();
        if let Some(root) = self.tree.root {
            stack.push((root, 0, ""));
        }
        while let Some((i, depth, side)) = stack.pop() {
            let node = &nodes[i.get()];
            writeln!(
                f,
                "{:indent$}{side}[{:?}, {:?}] level={} max_tree={:?}",
                "",
                node.interval.min,
                node.interval.max,
                node.level,
                node.max_tree,
                side = side,
                indent = depth * 2,
            )?;
            if let Some(r) = node.right {
                stack.push((r, depth + 1, "R "));
            }
            if let Some(l) = node.left {
                stack.push((l, depth + 1, "L "));
            }
        }
        Ok(())
    }
}

impl<T: Debug, D> Debug for TreeDump<'_, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
