use super::Config;
use common::shapes::Rectangle;
use smallvec::SmallVec;

/// A node is a leaf while `children` is `None`. An interior node keeps in
/// `values` only what straddles its quadrant split.
pub(crate) struct Node<T> {
    pub(crate) values: Vec<T>,
    pub(crate) children: Option<Box<[Node<T>; 4]>>,
}

impl<T> Node<T> {
    pub(crate) fn new_leaf() -> Self {
        Self {
            values: Vec::new(),
            children: None,
        }
    }

    #[inline(always)]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    #[cfg(test)]
    pub(crate) fn count_all_values(&self) -> usize {
        let mut count = self.values.len();
        if let Some(children) = &self.children {
            count += children.iter().map(Node::count_all_values).sum::<usize>();
        }
        count
    }

    pub(crate) fn count_nodes(&self) -> usize {
        match &self.children {
            Some(children) => 1 + children.iter().map(Node::count_nodes).sum::<usize>(),
            None => 1,
        }
    }

    pub(crate) fn height(&self) -> usize {
        match &self.children {
            Some(children) => 1 + children.iter().map(Node::height).max().unwrap_or(0),
            None => 0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Limits {
    pub(crate) split_threshold: usize,
    pub(crate) max_depth: usize,
}

impl Limits {
    pub(crate) fn from_config(config: &Config) -> Self {
        Self {
            split_threshold: config.node_capacity.max(1),
            max_depth: config.max_depth,
        }
    }
}

/// First quadrant, in top-left, top-right, bottom-left, bottom-right order,
/// that wholly contains `rect`.
#[inline(always)]
pub(crate) fn quadrant_containing(quadrants: &[Rectangle; 4], rect: &Rectangle) -> Option<usize> {
    quadrants
        .iter()
        .position(|quadrant| quadrant.contains_rectangle(rect))
}

pub(crate) type NodeStack<'a, T> = SmallVec<[(&'a Node<T>, Rectangle); 32]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straddling_rect_has_no_quadrant() {
        let quadrants = Rectangle::new(0.0, 0.0, 1.0, 1.0).quadrants();
        let rect = Rectangle::new(0.4, 0.1, 0.2, 0.1);
        assert_eq!(quadrant_containing(&quadrants, &rect), None);
    }

    #[test]
    fn quadrants_are_checked_in_fixed_order() {
        let quadrants = Rectangle::new(0.0, 0.0, 1.0, 1.0).quadrants();
        assert_eq!(
            quadrant_containing(&quadrants, &Rectangle::new(0.1, 0.1, 0.1, 0.1)),
            Some(0)
        );
        assert_eq!(
            quadrant_containing(&quadrants, &Rectangle::new(0.6, 0.1, 0.1, 0.1)),
            Some(1)
        );
        assert_eq!(
            quadrant_containing(&quadrants, &Rectangle::new(0.1, 0.6, 0.1, 0.1)),
            Some(2)
        );
        assert_eq!(
            quadrant_containing(&quadrants, &Rectangle::new(0.6, 0.6, 0.1, 0.1)),
            Some(3)
        );
        // A degenerate rect on the vertical split line fits both left and right; left wins.
        assert_eq!(
            quadrant_containing(&quadrants, &Rectangle::new(0.5, 0.1, 0.0, 0.1)),
            Some(0)
        );
    }

    #[test]
    fn limits_clamp_zero_capacity() {
        let limits = Limits::from_config(&Config {
            node_capacity: 0,
            max_depth: 2,
        });
        assert_eq!(limits.split_threshold, 1);
        assert_eq!(limits.max_depth, 2);
    }

    #[test]
    fn counts_walk_every_level() {
        let mut root: Node<u32> = Node::new_leaf();
        root.values.push(1);
        let mut children = Box::new([
            Node::new_leaf(),
            Node::new_leaf(),
            Node::new_leaf(),
            Node::new_leaf(),
        ]);
        children[2].values.extend([2, 3]);
        root.children = Some(children);
        assert_eq!(root.count_all_values(), 3);
        assert_eq!(root.count_nodes(), 5);
        assert_eq!(root.height(), 1);
        assert!(!root.is_leaf());
    }
}
