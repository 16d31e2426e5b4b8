use rand::Rng;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn dot(&self, other: &Vector2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, other: Vector2) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, other: Vector2) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;

    fn mul(self, scalar: f32) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }
}

impl Div<f32> for Vector2 {
    type Output = Vector2;

    fn div(self, scalar: f32) -> Vector2 {
        Vector2::new(self.x / scalar, self.y / scalar)
    }
}

/// Axis-aligned rectangle stored as its top-left corner plus size.
///
/// `width` and `height` are expected to be non-negative; nothing here checks it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rectangle {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn from_position_size(position: Vector2, size: Vector2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn top_left(&self) -> Vector2 {
        Vector2::new(self.left, self.top)
    }

    pub fn bottom_right(&self) -> Vector2 {
        Vector2::new(self.right(), self.bottom())
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn size(&self) -> Vector2 {
        Vector2::new(self.width, self.height)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Half-open test: points on the right or bottom edge are outside.
    pub fn contains_point(&self, point: Vector2) -> bool {
        self.left <= point.x
            && point.x < self.right()
            && self.top <= point.y
            && point.y < self.bottom()
    }

    /// Closed test: every edge belongs to the rectangle.
    pub fn almost_contains_point(&self, point: Vector2) -> bool {
        self.left <= point.x
            && point.x <= self.right()
            && self.top <= point.y
            && point.y <= self.bottom()
    }

    // A rectangle flush with our right or bottom edge still counts as inside.
    pub fn contains_rectangle(&self, other: &Rectangle) -> bool {
        self.left <= other.left
            && other.right() <= self.right()
            && self.top <= other.top
            && other.bottom() <= self.bottom()
    }

    /// True iff the overlap has positive area. Shared edges do not intersect.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        !(self.left >= other.right()
            || self.right() <= other.left
            || self.top >= other.bottom()
            || self.bottom() <= other.top)
    }

    /// Like [`Rectangle::intersects`] but touching edges count.
    pub fn almost_intersects(&self, other: &Rectangle) -> bool {
        !(self.left > other.right()
            || self.right() < other.left
            || self.top > other.bottom()
            || self.bottom() < other.top)
    }

    /// One quarter of this rectangle: 0 top-left, 1 top-right, 2 bottom-left, 3 bottom-right.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than 3.
    pub fn quadrant(&self, index: usize) -> Rectangle {
        let origin = self.top_left();
        let child_size = self.size() / 2.0;
        match index {
            0 => Rectangle::from_position_size(origin, child_size),
            1 => Rectangle::from_position_size(
                Vector2::new(origin.x + child_size.x, origin.y),
                child_size,
            ),
            2 => Rectangle::from_position_size(
                Vector2::new(origin.x, origin.y + child_size.y),
                child_size,
            ),
            3 => Rectangle::from_position_size(origin + child_size, child_size),
            _ => panic!("quadrant index out of range: {}", index),
        }
    }

    pub fn quadrants(&self) -> [Rectangle; 4] {
        [
            self.quadrant(0),
            self.quadrant(1),
            self.quadrant(2),
            self.quadrant(3),
        ]
    }

    pub fn is_valid(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }

    /// Random rectangle inside `self`, with each side drawn from `[0, max_size)`
    /// and clamped so it never crosses the right or bottom edge.
    pub fn get_random_rectangle_inside<R: Rng>(&self, max_size: f32, rng: &mut R) -> Rectangle {
        let left = self._safe_randf32(rng, self.left, self.right());
        let top = self._safe_randf32(rng, self.top, self.bottom());
        let width = f32::min(self.right() - left, self._safe_randf32(rng, 0.0, max_size));
        let height = f32::min(self.bottom() - top, self._safe_randf32(rng, 0.0, max_size));
        Rectangle::new(left, top, width, height)
    }

    fn _safe_randf32<R: Rng>(&self, rng: &mut R, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        rng.gen_range(min..max)
    }
}
