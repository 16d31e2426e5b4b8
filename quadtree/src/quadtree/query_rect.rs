use super::types::NodeStack;
use super::QuadTree;
use common::shapes::Rectangle;
use smallvec::SmallVec;

impl<T, B, E> QuadTree<T, B, E>
where
    B: Fn(&T) -> Rectangle,
{
    /// Every stored value whose box overlaps `region` with positive area.
    ///
    /// Results come in traversal order: a node's own values, then its children
    /// top-left, top-right, bottom-left, bottom-right.
    pub fn query(&self, region: &Rectangle) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::new();
        self.query_with(region, |value| values.push(value.clone()));
        values
    }

    pub fn query_with<F>(&self, region: &Rectangle, mut f: F)
    where
        F: FnMut(&T),
    {
        if !region.intersects(&self.bounding_box) {
            return;
        }
        let mut stack: NodeStack<'_, T> = SmallVec::new();
        stack.push((&self.root, self.bounding_box));

        while let Some((node, bounds)) = stack.pop() {
            for value in &node.values {
                if region.intersects(&(self.get_box)(value)) {
                    f(value);
                }
            }

            if let Some(children) = &node.children {
                let quadrants = bounds.quadrants();
                // Pushed in reverse so the top-left child is visited first.
                for i in (0..4).rev() {
                    if region.intersects(&quadrants[i]) {
                        stack.push((&children[i], quadrants[i]));
                    }
                }
            }
        }
    }
}
