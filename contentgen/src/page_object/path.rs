use crate::geometry::{FillRule, Matrix, Path};

use super::ObjectState;

#[derive(Debug, Clone, Default)]
pub struct PathObject {
    pub state: ObjectState,
    pub path: Path,
    pub matrix: Matrix,
    /// `None` leaves the interior unpainted.
    pub fill: Option<FillRule>,
    pub stroke: bool,
    pub(crate) emitted: bool,
}

impl PathObject {
    pub fn new(path: Path) -> Self {
        Self {
            path,
            ..Self::default()
        }
    }

    /// Concatenate `matrix` onto the object's transformation.
    pub fn transform(&mut self, matrix: &Matrix) {
        self.matrix = self.matrix.concat(matrix);
    }
}
