//! Polygon geometry

use crate::math::FIXED_SHIFT;

/// Integer vertex
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
    /// Scale by 16.16 ratios `u` (x) and `v` (y)
    ///
    /// Fractions are truncated
    ///
    ///     use page_raster::Point;
    ///
    ///     let mut p = Point::new(160, 100);
    ///     p.scale(2 << 16, 1 << 15);
    ///     assert_eq!(p, Point::new(320, 50));
    ///
    pub fn scale(&mut self, u: i32, v: i32) {
        self.x = (i32::from(self.x).wrapping_mul(u) >> FIXED_SHIFT) as i16;
        self.y = (i32::from(self.y).wrapping_mul(v) >> FIXED_SHIFT) as i16;
    }
}

impl From<(i16,i16)> for Point {
    fn from((x,y): (i16,i16)) -> Point {
        Point::new(x,y)
    }
}

/// Polygon described as a strip of trapezoid bands
///
/// Vertices run down one side of the shape and back up the other.
/// Vertex `i` from the front and vertex `len-1-i` from the back bound
/// the same band, so the front side is walked forward while the back
/// side is walked backward.
///
///     use page_raster::QuadStrip;
///
///     // Rectangle 4 wide and 3 tall, right side then left side
///     let qs = QuadStrip::from_slice(&[(3,0),(3,3),(0,3),(0,0)]);
///     assert_eq!(qs.len(), 4);
///
#[derive(Debug,Default,Clone,PartialEq)]
pub struct QuadStrip {
    pub vertices: Vec<Point>,
}

impl QuadStrip {
    /// Create an empty strip
    pub fn new() -> Self {
        Self { vertices: vec![] }
    }
    /// Create a strip from (x,y) pairs
    pub fn from_slice(pts: &[(i16,i16)]) -> Self {
        Self { vertices: pts.iter().map(|&p| p.into()).collect() }
    }
    /// Append a vertex
    pub fn push(&mut self, p: Point) {
        self.vertices.push(p);
    }
    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    /// Scale all vertices by 16.16 ratios
    pub fn scale(&mut self, u: i32, v: i32) {
        for p in self.vertices.iter_mut() {
            p.scale(u, v);
        }
    }
}

impl From<Vec<Point>> for QuadStrip {
    fn from(vertices: Vec<Point>) -> QuadStrip {
        QuadStrip { vertices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_down_truncates() {
        // 320 -> 4 pixels wide
        let u = (4 << 16) / 320;
        let mut p = Point::new(319, 199);
        p.scale(u, u);
        assert_eq!(p, Point::new(3, 2));
    }
    #[test]
    fn scale_identity() {
        let mut qs = QuadStrip::from_slice(&[(-5,7),(12,-3)]);
        qs.scale(1 << 16, 1 << 16);
        assert_eq!(qs, QuadStrip::from_slice(&[(-5,7),(12,-3)]));
    }
}
