use std::ops::Sub;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Affine transformation `[a b c d e f]` as used by `cm` and `Tm`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    pub const fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub const fn translate(x: f32, y: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// A matrix that collapses everything onto a line or a point.
    pub fn is_degenerate(&self) -> bool {
        (self.a == 0.0 && self.b == 0.0) || (self.c == 0.0 && self.d == 0.0)
    }

    /// `self` followed by `other`.
    pub fn concat(&self, other: &Matrix) -> Matrix {
        Matrix {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    pub fn as_array(&self) -> [f32; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    Move,
    Line,
    /// One of three consecutive points of a cubic bezier segment.
    Bezier,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub point: Point,
    pub kind: PointKind,
    /// The subpath is closed after this point.
    pub close: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillRule {
    Winding,
    EvenOdd,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    points: Vec<PathPoint>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn append_point(&mut self, point: Point, kind: PointKind) {
        self.points.push(PathPoint {
            point,
            kind,
            close: false,
        });
    }

    pub fn append_point_and_close(&mut self, point: Point, kind: PointKind) {
        self.points.push(PathPoint {
            point,
            kind,
            close: true,
        });
    }

    /// Append a closed rectangle, counter-clockwise from the bottom left corner.
    pub fn append_rect(&mut self, left: f32, bottom: f32, right: f32, top: f32) {
        self.append_point(Point::new(left, bottom), PointKind::Move);
        self.append_point(Point::new(left, top), PointKind::Line);
        self.append_point(Point::new(right, top), PointKind::Line);
        self.append_point(Point::new(right, bottom), PointKind::Line);
        self.append_point_and_close(Point::new(left, bottom), PointKind::Line);
    }

    /// Origin and diagonal of the path if it is a closed, axis aligned
    /// rectangle made of straight lines.
    ///
    /// Four points are accepted when the last one closes the figure, five
    /// when the last one returns to the start.
    pub fn rect(&self) -> Option<(Point, Point)> {
        let points = &self.points;
        match points.len() {
            4 if points[3].close => {}
            5 if points[0].point == points[4].point => {}
            _ => return None,
        }
        if points[0].kind != PointKind::Move || points[1..].iter().any(|p| p.kind != PointKind::Line) {
            return None;
        }
        let (p0, p1, p2, p3) = (points[0].point, points[1].point, points[2].point, points[3].point);
        if p0 == p2 || p1 == p3 {
            return None;
        }
        let horizontal_first = p0.y == p1.y && p1.x == p2.x && p2.y == p3.y && p3.x == p0.x;
        let vertical_first = p0.x == p1.x && p1.y == p2.y && p2.x == p3.x && p3.y == p0.y;
        if horizontal_first || vertical_first {
            Some((p0, p2 - p0))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appended_rect_is_recognized() {
        let mut path = Path::new();
        path.append_rect(10.0, 5.0, 13.0, 30.0);
        assert_eq!(path.points().len(), 5);
        assert_eq!(path.rect(), Some((Point::new(10.0, 5.0), Point::new(3.0, 25.0))));
    }

    #[test]
    fn four_point_closed_rect() {
        let mut path = Path::new();
        path.append_point(Point::new(0.0, 0.0), PointKind::Move);
        path.append_point(Point::new(5.2, 0.0), PointKind::Line);
        path.append_point(Point::new(5.2, 3.78), PointKind::Line);
        path.append_point_and_close(Point::new(0.0, 3.78), PointKind::Line);
        assert_eq!(path.rect(), Some((Point::new(0.0, 0.0), Point::new(5.2, 3.78))));
    }

    #[test]
    fn open_four_points_are_no_rect() {
        let mut path = Path::new();
        path.append_point(Point::new(0.0, 0.0), PointKind::Move);
        path.append_point(Point::new(5.0, 0.0), PointKind::Line);
        path.append_point(Point::new(5.0, 4.0), PointKind::Line);
        path.append_point(Point::new(0.0, 4.0), PointKind::Line);
        assert_eq!(path.rect(), None);
    }

    #[test]
    fn rotated_quad_is_no_rect() {
        let mut path = Path::new();
        path.append_point(Point::new(0.0, 0.0), PointKind::Move);
        path.append_point(Point::new(1.0, 1.0), PointKind::Line);
        path.append_point(Point::new(0.0, 2.0), PointKind::Line);
        path.append_point_and_close(Point::new(-1.0, 1.0), PointKind::Line);
        assert_eq!(path.rect(), None);
    }

    #[test]
    fn degenerate_rect_is_no_rect() {
        let mut path = Path::new();
        path.append_rect(1.0, 1.0, 1.0, 1.0);
        assert_eq!(path.rect(), None);
    }

    #[test]
    fn curves_are_no_rect() {
        let mut path = Path::new();
        path.append_point(Point::new(0.0, 0.0), PointKind::Move);
        path.append_point(Point::new(5.0, 0.0), PointKind::Bezier);
        path.append_point(Point::new(5.0, 4.0), PointKind::Bezier);
        path.append_point_and_close(Point::new(0.0, 4.0), PointKind::Bezier);
        assert_eq!(path.rect(), None);
    }

    #[test]
    fn concat_translation() {
        let m = Matrix::IDENTITY.concat(&Matrix::translate(100.0, 100.0));
        assert_eq!(m, Matrix::new(1.0, 0.0, 0.0, 1.0, 100.0, 100.0));

        let scaled = Matrix::new(2.0, 0.0, 0.0, 2.0, 0.0, 0.0).concat(&Matrix::translate(3.0, 4.0));
        assert_eq!(scaled.as_array(), [2.0, 0.0, 0.0, 2.0, 3.0, 4.0]);

        let moved_then_scaled = Matrix::translate(3.0, 4.0).concat(&Matrix::new(2.0, 0.0, 0.0, 2.0, 0.0, 0.0));
        assert_eq!(moved_then_scaled.as_array(), [2.0, 0.0, 0.0, 2.0, 6.0, 8.0]);
    }

    #[test]
    fn degenerate_matrix() {
        assert!(Matrix::new(0.0, 0.0, 0.0, 1.0, 5.0, 5.0).is_degenerate());
        assert!(Matrix::new(1.0, 0.0, 0.0, 0.0, 5.0, 5.0).is_degenerate());
        assert!(!Matrix::IDENTITY.is_degenerate());
    }
}
