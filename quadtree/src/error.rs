use common::shapes::Rectangle;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadtreeError {
    InvalidRectangleDims { width: f32, height: f32 },
    InvalidConfig { node_capacity: usize, max_depth: usize },
    RectangleOutOfBounds { rect: Rectangle, bounds: Rectangle },
    ValueNotFound,
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::InvalidRectangleDims { width, height } => {
                write!(
                    f,
                    "rectangle width/height must be finite and non-negative (width: {}, height: {})",
                    width, height
                )
            }
            QuadtreeError::InvalidConfig {
                node_capacity,
                max_depth,
            } => {
                write!(
                    f,
                    "node capacity must be at least 1 (node_capacity: {}, max_depth: {})",
                    node_capacity, max_depth
                )
            }
            QuadtreeError::RectangleOutOfBounds { rect, bounds } => {
                write!(
                    f,
                    "rectangle must be within quadtree bounds (left: {}, top: {}, right: {}, bottom: {}, bounds_left: {}, bounds_top: {}, bounds_right: {}, bounds_bottom: {})",
                    rect.left(),
                    rect.top(),
                    rect.right(),
                    rect.bottom(),
                    bounds.left(),
                    bounds.top(),
                    bounds.right(),
                    bounds.bottom()
                )
            }
            QuadtreeError::ValueNotFound => {
                write!(f, "value is not stored in the quadtree")
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}

pub(crate) fn validate_rect_dims(rect: &Rectangle) -> QuadtreeResult<()> {
    if rect.is_valid() {
        Ok(())
    } else {
        Err(QuadtreeError::InvalidRectangleDims {
            width: rect.width,
            height: rect.height,
        })
    }
}
