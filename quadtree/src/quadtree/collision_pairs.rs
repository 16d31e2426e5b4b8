use super::types::Node;
use super::QuadTree;
use common::shapes::Rectangle;
use smallvec::SmallVec;

type BoxCache = SmallVec<[Rectangle; 16]>;
type SubtreeStack<'a, T> = SmallVec<[&'a Node<T>; 32]>;

impl<T, B, E> QuadTree<T, B, E>
where
    B: Fn(&T) -> Rectangle,
{
    /// Every unordered pair of distinct stored values whose boxes overlap, each
    /// reported once.
    pub fn find_all_intersections(&self) -> Vec<(T, T)>
    where
        T: Clone,
    {
        let mut intersections = Vec::new();
        self.for_each_intersection_pair(|a, b| intersections.push((a.clone(), b.clone())));
        intersections
    }

    pub fn for_each_intersection_pair<F>(&self, mut f: F)
    where
        F: FnMut(&T, &T),
    {
        self.collision_pairs_in(&self.root, &mut f);
    }

    // A pair is found either inside one node's bag, between a bag and a value
    // somewhere below that node, or entirely within one child subtree.
    fn collision_pairs_in<F>(&self, node: &Node<T>, f: &mut F)
    where
        F: FnMut(&T, &T),
    {
        let boxes: BoxCache = node.values.iter().map(&self.get_box).collect();
        for i in 1..node.values.len() {
            for j in 0..i {
                if boxes[i].intersects(&boxes[j]) {
                    f(&node.values[i], &node.values[j]);
                }
            }
        }

        if let Some(children) = &node.children {
            if !node.values.is_empty() {
                for child in children.iter() {
                    self.collision_pairs_with_descendants(child, &node.values, &boxes, f);
                }
            }
            for child in children.iter() {
                self.collision_pairs_in(child, f);
            }
        }
    }

    fn collision_pairs_with_descendants<F>(
        &self,
        subtree: &Node<T>,
        values: &[T],
        boxes: &[Rectangle],
        f: &mut F,
    ) where
        F: FnMut(&T, &T),
    {
        let mut stack: SubtreeStack<'_, T> = SmallVec::new();
        stack.push(subtree);

        while let Some(node) = stack.pop() {
            for other in &node.values {
                let other_box = (self.get_box)(other);
                for (value, value_box) in values.iter().zip(boxes) {
                    if value_box.intersects(&other_box) {
                        f(value, other);
                    }
                }
            }
            if let Some(children) = &node.children {
                for child in children.iter().rev() {
                    stack.push(child);
                }
            }
        }
    }
}
