//! Adaptive quadtree over axis-aligned boxes.
//!
//! Values of any type are stored; a caller-supplied function maps each value
//! to its [`Rectangle`]. A leaf splits into four equal quadrants once it holds
//! `node_capacity` values, and a value that straddles a split line stays in
//! the interior node where it no longer fits any single child. Removing from a
//! leaf lets its parent fold the four children back in when they are all
//! leaves and small enough together.

mod api;
mod collision_pairs;
mod config;
mod insert_remove;
mod query_rect;
mod types;

pub use config::Config;

use crate::error::{validate_rect_dims, QuadtreeResult};
use common::shapes::Rectangle;
use tracing::debug;
use types::{Limits, Node};

/// Equality used by [`QuadTree::new`]: the value type's own `PartialEq`.
pub type DefaultEqual<T> = fn(&T, &T) -> bool;

pub struct QuadTree<T, B, E = DefaultEqual<T>> {
    root: Node<T>,
    bounding_box: Rectangle,
    get_box: B,
    equal: E,
    config: Config,
    limits: Limits,
    len: usize,
}

impl<T, B> QuadTree<T, B>
where
    T: PartialEq,
    B: Fn(&T) -> Rectangle,
{
    pub fn new(bounding_box: Rectangle, get_box: B) -> Self {
        Self::new_with_config(bounding_box, get_box, Config::default())
    }

    pub fn new_with_config(bounding_box: Rectangle, get_box: B, config: Config) -> Self {
        let equal: DefaultEqual<T> = <T as PartialEq>::eq;
        QuadTree::with_equal_and_config(bounding_box, get_box, equal, config)
    }

    /// Like [`QuadTree::new_with_config`] but rejects malformed bounds or config.
    pub fn try_new_with_config(
        bounding_box: Rectangle,
        get_box: B,
        config: Config,
    ) -> QuadtreeResult<Self> {
        validate_rect_dims(&bounding_box)?;
        config.validate()?;
        Ok(Self::new_with_config(bounding_box, get_box, config))
    }
}

impl<T, B, E> QuadTree<T, B, E>
where
    B: Fn(&T) -> Rectangle,
    E: Fn(&T, &T) -> bool,
{
    /// Builds a tree whose `remove` locates values with `equal` instead of `PartialEq`.
    pub fn with_equal(bounding_box: Rectangle, get_box: B, equal: E) -> Self {
        Self::with_equal_and_config(bounding_box, get_box, equal, Config::default())
    }

    pub fn with_equal_and_config(
        bounding_box: Rectangle,
        get_box: B,
        equal: E,
        config: Config,
    ) -> Self {
        let limits = Limits::from_config(&config);
        debug!(
            ?bounding_box,
            split_threshold = limits.split_threshold,
            max_depth = limits.max_depth,
            "created quadtree"
        );
        Self {
            root: Node::new_leaf(),
            bounding_box,
            get_box,
            equal,
            config,
            limits,
            len: 0,
        }
    }
}
