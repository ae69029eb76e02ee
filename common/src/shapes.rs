use rand::Rng;
use std::ops::{Index, IndexMut};

/// A point in `N`-dimensional space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector<const N: usize> {
    pub coords: [f32; N],
}

pub type Vector2 = Vector<2>;

impl<const N: usize> Vector<N> {
    pub const fn new(coords: [f32; N]) -> Self {
        Self { coords }
    }

    pub fn splat(value: f32) -> Self {
        Self { coords: [value; N] }
    }

    pub const fn dimensions(&self) -> usize {
        N
    }

    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }

    // Component-wise midpoint between two points
    pub fn midpoint(&self, other: &Vector<N>) -> Vector<N> {
        let mut coords = self.coords;
        for (c, o) in coords.iter_mut().zip(other.coords.iter()) {
            *c = (*c + *o) * 0.5;
        }
        Vector { coords }
    }

    pub fn approx_eq(&self, other: &Vector<N>, tolerance: f32) -> bool {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    pub fn scaled(&self, factor: f32) -> Vector<N> {
        let mut coords = self.coords;
        for c in coords.iter_mut() {
            *c *= factor;
        }
        Vector { coords }
    }
}

impl Vector<2> {
    pub const fn xy(x: f32, y: f32) -> Self {
        Self { coords: [x, y] }
    }

    pub fn x(&self) -> f32 {
        self.coords[0]
    }

    pub fn y(&self) -> f32 {
        self.coords[1]
    }
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::splat(0.0)
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f32;

    fn index(&self, axis: usize) -> &f32 {
        &self.coords[axis]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    fn index_mut(&mut self, axis: usize) -> &mut f32 {
        &mut self.coords[axis]
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    fn from(coords: [f32; N]) -> Self {
        Self { coords }
    }
}

/// Axis-aligned box spanned by a `lower` and an `upper` corner.
///
/// `lower[i] <= upper[i]` is expected on every axis but is not enforced;
/// the predicates below simply give meaningless answers for inverted boxes.
/// All boundaries are inclusive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb<const N: usize> {
    pub lower: Vector<N>,
    pub upper: Vector<N>,
}

pub type Rectangle = Aabb<2>;

impl<const N: usize> Aabb<N> {
    pub const fn new(lower: Vector<N>, upper: Vector<N>) -> Self {
        Self { lower, upper }
    }

    pub fn from_corners(lower: [f32; N], upper: [f32; N]) -> Self {
        Self {
            lower: Vector::new(lower),
            upper: Vector::new(upper),
        }
    }

    pub const fn dimensions(&self) -> usize {
        N
    }

    pub fn center(&self) -> Vector<N> {
        self.lower.midpoint(&self.upper)
    }

    pub fn extent(&self, axis: usize) -> f32 {
        self.upper[axis] - self.lower[axis]
    }

    // Finite on every axis and not inverted
    pub fn is_valid(&self) -> bool {
        self.lower.is_finite()
            && self.upper.is_finite()
            && (0..N).all(|axis| self.lower[axis] <= self.upper[axis])
    }

    pub fn contains_point(&self, point: &Vector<N>) -> bool {
        (0..N).all(|axis| point[axis] >= self.lower[axis] && point[axis] <= self.upper[axis])
    }

    /// Full containment of `other`, boundaries included.
    pub fn contains(&self, other: &Aabb<N>) -> bool {
        (0..N).all(|axis| {
            self.lower[axis] <= other.lower[axis] && self.upper[axis] >= other.upper[axis]
        })
    }

    /// Boxes that merely touch along an edge or corner intersect.
    pub fn intersects(&self, other: &Aabb<N>) -> bool {
        (0..N).all(|axis| {
            self.lower[axis] <= other.upper[axis] && self.upper[axis] >= other.lower[axis]
        })
    }

    pub fn approx_eq(&self, other: &Aabb<N>, tolerance: f32) -> bool {
        self.lower.approx_eq(&other.lower, tolerance)
            && self.upper.approx_eq(&other.upper, tolerance)
    }

    pub fn scaled(&self, factor: f32) -> Aabb<N> {
        Aabb {
            lower: self.lower.scaled(factor),
            upper: self.upper.scaled(factor),
        }
    }

    pub fn expand_to_include(&mut self, other: &Aabb<N>) {
        for axis in 0..N {
            self.lower[axis] = f32::min(self.lower[axis], other.lower[axis]);
            self.upper[axis] = f32::max(self.upper[axis], other.upper[axis]);
        }
    }

    /// Random box fully inside `self` whose edges are at most `max_extent` long.
    pub fn random_box_inside<R: Rng>(&self, max_extent: f32, rng: &mut R) -> Aabb<N> {
        let mut lower = Vector::default();
        let mut upper = Vector::default();
        for axis in 0..N {
            let extent = safe_randf32(rng, 0.0, max_extent.min(self.extent(axis)));
            let start = safe_randf32(rng, self.lower[axis], self.upper[axis] - extent);
            lower[axis] = start;
            upper[axis] = (start + extent).min(self.upper[axis]);
        }
        Aabb { lower, upper }
    }
}

impl Aabb<2> {
    pub fn from_min_max(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self::from_corners([min_x, min_y], [max_x, max_y])
    }

    pub fn width(&self) -> f32 {
        self.extent(0)
    }

    pub fn height(&self) -> f32 {
        self.extent(1)
    }

    /// One of the four equal sub-boxes produced by splitting at the center.
    ///
    /// Bit 0 of `index` selects the upper half along x, bit 1 along y, so
    /// 0 = (low x, low y), 1 = (high x, low y), 2 = (low x, high y), 3 = (high x, high y).
    pub fn quadrant(&self, index: usize) -> Rectangle {
        debug_assert!(index < 4);
        let center = self.center();
        let (min_x, max_x) = if index & 1 == 0 {
            (self.lower.x(), center.x())
        } else {
            (center.x(), self.upper.x())
        };
        let (min_y, max_y) = if index & 2 == 0 {
            (self.lower.y(), center.y())
        } else {
            (center.y(), self.upper.y())
        };
        Rectangle::from_min_max(min_x, min_y, max_x, max_y)
    }

    pub fn quadrants(&self) -> [Rectangle; 4] {
        [
            self.quadrant(0),
            self.quadrant(1),
            self.quadrant(2),
            self.quadrant(3),
        ]
    }
}

impl<const N: usize> Default for Aabb<N> {
    fn default() -> Self {
        Self {
            lower: Vector::default(),
            upper: Vector::default(),
        }
    }
}

fn safe_randf32<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..=max)
}
