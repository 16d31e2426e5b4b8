use super::types::{Node, NodeStack};
use super::{Config, QuadTree};
use common::shapes::Rectangle;
use smallvec::SmallVec;
use tracing::debug;

impl<T, B, E> QuadTree<T, B, E> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bounding_box(&self) -> Rectangle {
        self.bounding_box
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Drops every node and value, leaving a single empty leaf.
    pub fn clear(&mut self) {
        debug!(values = self.len, "cleared quadtree");
        self.root = Node::new_leaf();
        self.len = 0;
    }

    /// Number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.root.count_nodes()
    }

    /// Levels below the root; 0 while the root is still a leaf.
    pub fn depth(&self) -> usize {
        self.root.height()
    }

    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Rectangle>) {
        let mut stack: NodeStack<'_, T> = SmallVec::new();
        stack.push((&self.root, self.bounding_box));
        while let Some((node, bounds)) = stack.pop() {
            bounding_boxes.push(bounds);
            if let Some(children) = &node.children {
                let quadrants = bounds.quadrants();
                for i in (0..4).rev() {
                    stack.push((&children[i], quadrants[i]));
                }
            }
        }
    }

    pub fn all_values(&self, values: &mut Vec<T>)
    where
        T: Clone,
    {
        let mut stack: SmallVec<[&Node<T>; 32]> = SmallVec::new();
        stack.push(&self.root);
        while let Some(node) = stack.pop() {
            values.extend(node.values.iter().cloned());
            if let Some(children) = &node.children {
                stack.extend(children.iter().rev());
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn stored_count(&self) -> usize {
        self.root.count_all_values()
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Config, QuadTree};
    use common::shapes::Rectangle;

    type RectBox = fn(&Rectangle) -> Rectangle;

    fn unit_tree(node_capacity: usize) -> QuadTree<Rectangle, RectBox> {
        let get_box: RectBox = |rect| *rect;
        QuadTree::new_with_config(
            Rectangle::new(0.0, 0.0, 1.0, 1.0),
            get_box,
            Config {
                node_capacity,
                max_depth: 8,
            },
        )
    }

    #[test]
    fn fresh_tree_is_a_single_empty_leaf() {
        let qt = unit_tree(4);
        assert!(qt.is_empty());
        assert_eq!(qt.node_count(), 1);
        assert_eq!(qt.depth(), 0);
        let mut boxes = Vec::new();
        qt.all_node_bounding_boxes(&mut boxes);
        assert_eq!(boxes, vec![Rectangle::new(0.0, 0.0, 1.0, 1.0)]);
    }

    #[test]
    fn split_exposes_quadrants_in_order() {
        let mut qt = unit_tree(1);
        qt.add(Rectangle::new(0.1, 0.1, 0.1, 0.1));
        qt.add(Rectangle::new(0.7, 0.7, 0.1, 0.1));
        assert_eq!(qt.node_count(), 5);
        assert_eq!(qt.depth(), 1);

        let mut boxes = Vec::new();
        qt.all_node_bounding_boxes(&mut boxes);
        assert_eq!(
            boxes,
            vec![
                Rectangle::new(0.0, 0.0, 1.0, 1.0),
                Rectangle::new(0.0, 0.0, 0.5, 0.5),
                Rectangle::new(0.5, 0.0, 0.5, 0.5),
                Rectangle::new(0.0, 0.5, 0.5, 0.5),
                Rectangle::new(0.5, 0.5, 0.5, 0.5),
            ]
        );
    }

    #[test]
    fn clear_resets_shape_and_len() {
        let mut qt = unit_tree(1);
        for i in 0..8 {
            let offset = i as f32 * 0.1;
            qt.add(Rectangle::new(offset, offset, 0.05, 0.05));
        }
        assert_eq!(qt.len(), 8);
        assert_eq!(qt.stored_count(), 8);
        qt.clear();
        assert!(qt.is_empty());
        assert_eq!(qt.stored_count(), 0);
        assert_eq!(qt.node_count(), 1);
    }

    #[test]
    fn all_values_visits_every_node() {
        let mut qt = unit_tree(2);
        let rects = [
            Rectangle::new(0.1, 0.1, 0.1, 0.1),
            Rectangle::new(0.6, 0.1, 0.1, 0.1),
            Rectangle::new(0.1, 0.6, 0.1, 0.1),
            Rectangle::new(0.4, 0.4, 0.2, 0.2),
        ];
        for rect in rects {
            qt.add(rect);
        }
        let mut values = Vec::new();
        qt.all_values(&mut values);
        assert_eq!(values.len(), rects.len());
        for rect in &rects {
            assert!(values.contains(rect));
        }
    }
}
