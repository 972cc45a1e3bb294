use crate::{error::{KMeansError, Result}, memory::*};

/// A generated sample on the canvas.
///
/// ## Fields
/// - **x**, **y**: Canvas coordinates
/// - **cluster**: Index of the centroid this point is currently assigned to, `None` while unassigned
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<T: Primitive> {
    pub x: T,
    pub y: T,
    pub cluster: Option<usize>,
}
impl<T: Primitive> Point<T> {
    /// Create a new, unassigned point.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y, cluster: None }
    }

    /// Euclidean distance to the given centroid.
    #[inline(always)]
    pub fn distance(&self, centroid: &Centroid<T>) -> T {
        self.squared_distance(centroid).sqrt()
    }

    #[inline(always)]
    pub fn squared_distance(&self, centroid: &Centroid<T>) -> T {
        let (dx, dy) = (self.x - centroid.x, self.y - centroid.y);
        dx * dx + dy * dy
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A cluster center. Its index within the run's centroid sequence is the cluster label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Centroid<T: Primitive> {
    pub x: T,
    pub y: T,
}
impl<T: Primitive> Centroid<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two centroid positions (used as displacement).
    #[inline(always)]
    pub fn distance(&self, other: &Centroid<T>) -> T {
        let (dx, dy) = (self.x - other.x, self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

/// Canvas area, spanning `[0, width) x [0, height)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds<T: Primitive> {
    pub width: T,
    pub height: T,
}
impl<T: Primitive> Bounds<T> {
    /// Both dimensions have to be finite and greater than zero.
    pub fn new(width: T, height: T) -> Result<Self> {
        let bounds = Self { width, height };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> Result<()> {
        let valid = |v: T| v.is_finite() && v > T::zero();
        if !valid(self.width) || !valid(self.height) {
            return Err(KMeansError::InvalidBounds { width: self.width.as_f64(), height: self.height.as_f64() });
        }
        Ok(())
    }

    pub fn midpoint(&self) -> (T, T) {
        let two = T::cast_f64(2.0);
        (self.width / two, self.height / two)
    }

    pub fn contains(&self, x: T, y: T) -> bool {
        x >= T::zero() && x < self.width && y >= T::zero() && y < self.height
    }
}
