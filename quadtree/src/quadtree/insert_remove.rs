use super::types::{quadrant_containing, Limits, Node};
use super::QuadTree;
use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::Rectangle;
use tracing::trace;

impl<T, B, E> QuadTree<T, B, E>
where
    B: Fn(&T) -> Rectangle,
    E: Fn(&T, &T) -> bool,
{
    /// Stores `value` in the deepest node whose region wholly contains its box.
    ///
    /// The box must lie inside the tree bounds; this is only checked in debug
    /// builds. Use [`QuadTree::try_add`] for a checked insert.
    pub fn add(&mut self, value: T) {
        let value_box = (self.get_box)(&value);
        debug_assert!(
            self.bounding_box.contains_rectangle(&value_box),
            "value box {:?} is outside the quadtree bounds {:?}",
            value_box,
            self.bounding_box
        );
        self.root.insert(
            0,
            self.bounding_box,
            value,
            &value_box,
            &self.get_box,
            self.limits,
        );
        self.len += 1;
    }

    pub fn try_add(&mut self, value: T) -> QuadtreeResult<()> {
        let value_box = (self.get_box)(&value);
        if !self.bounding_box.contains_rectangle(&value_box) {
            return Err(QuadtreeError::RectangleOutOfBounds {
                rect: value_box,
                bounds: self.bounding_box,
            });
        }
        self.add(value);
        Ok(())
    }

    /// Removes one stored value equal to `value` and hands it back.
    ///
    /// Removing a value that is not stored is a caller bug: debug builds panic,
    /// release builds return `None`. [`QuadTree::try_remove`] reports it instead.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let removed = self.remove_stored(value);
        debug_assert!(removed.is_some(), "value is not stored in the quadtree");
        removed
    }

    pub fn try_remove(&mut self, value: &T) -> QuadtreeResult<T> {
        self.remove_stored(value)
            .ok_or(QuadtreeError::ValueNotFound)
    }

    fn remove_stored(&mut self, value: &T) -> Option<T> {
        let value_box = (self.get_box)(value);
        let removed = self.root.remove(
            0,
            self.bounding_box,
            value,
            &value_box,
            &self.equal,
            self.limits,
        )?;
        self.len -= 1;
        Some(removed)
    }
}

impl<T> Node<T> {
    pub(crate) fn insert<B>(
        &mut self,
        depth: usize,
        bounds: Rectangle,
        value: T,
        value_box: &Rectangle,
        get_box: &B,
        limits: Limits,
    ) where
        B: Fn(&T) -> Rectangle,
    {
        match self.children.as_mut() {
            None => {
                if depth >= limits.max_depth || self.values.len() < limits.split_threshold {
                    self.values.push(value);
                } else {
                    self.split(depth, bounds, get_box);
                    self.insert(depth, bounds, value, value_box, get_box, limits);
                }
            }
            Some(children) => {
                let quadrants = bounds.quadrants();
                match quadrant_containing(&quadrants, value_box) {
                    Some(i) => children[i].insert(
                        depth + 1,
                        quadrants[i],
                        value,
                        value_box,
                        get_box,
                        limits,
                    ),
                    None => self.values.push(value),
                }
            }
        }
    }

    fn split<B>(&mut self, depth: usize, bounds: Rectangle, get_box: &B)
    where
        B: Fn(&T) -> Rectangle,
    {
        debug_assert!(self.is_leaf(), "only leaves can be split");
        let quadrants = bounds.quadrants();
        let mut children = Box::new([
            Node::new_leaf(),
            Node::new_leaf(),
            Node::new_leaf(),
            Node::new_leaf(),
        ]);
        let values = std::mem::take(&mut self.values);
        for value in values {
            match quadrant_containing(&quadrants, &get_box(&value)) {
                Some(i) => children[i].values.push(value),
                None => self.values.push(value),
            }
        }
        trace!(
            depth,
            kept = self.values.len(),
            moved = children.iter().map(|child| child.values.len()).sum::<usize>(),
            "split quadtree node"
        );
        self.children = Some(children);
    }

    pub(crate) fn remove<E>(
        &mut self,
        depth: usize,
        bounds: Rectangle,
        value: &T,
        value_box: &Rectangle,
        equal: &E,
        limits: Limits,
    ) -> Option<T>
    where
        E: Fn(&T, &T) -> bool,
    {
        if let Some(children) = self.children.as_mut() {
            let quadrants = bounds.quadrants();
            if let Some(i) = quadrant_containing(&quadrants, value_box) {
                let child = &mut children[i];
                let child_was_leaf = child.is_leaf();
                let removed =
                    child.remove(depth + 1, quadrants[i], value, value_box, equal, limits)?;
                if child_was_leaf {
                    self.try_merge(depth, limits);
                }
                return Some(removed);
            }
        }
        let index = self.values.iter().position(|stored| equal(stored, value))?;
        Some(self.values.swap_remove(index))
    }

    // Folds the children back in only when all four are leaves; never looks further up.
    fn try_merge(&mut self, depth: usize, limits: Limits) {
        let children = match self.children.as_mut() {
            Some(children) => children,
            None => return,
        };
        let mut count = self.values.len();
        for child in children.iter() {
            if !child.is_leaf() {
                return;
            }
            count += child.values.len();
        }
        if count > limits.split_threshold {
            return;
        }
        self.values.reserve(count - self.values.len());
        for child in children.iter_mut() {
            self.values.append(&mut child.values);
        }
        self.children = None;
        trace!(depth, values = count, "merged quadtree node");
    }
}
