use crate::{geometry::Matrix, pdf::Reference};

use super::ObjectState;

/// Image XObject placed on the page. The matrix maps the unit square onto
/// the page.
#[derive(Debug, Clone)]
pub struct ImageObject {
    pub state: ObjectState,
    pub matrix: Matrix,
    /// Stored image stream.
    pub image: Reference,
    pub(crate) emitted: bool,
}

impl ImageObject {
    pub fn new(image: Reference, matrix: Matrix) -> Self {
        Self {
            state: ObjectState::default(),
            matrix,
            image,
            emitted: false,
        }
    }
}

/// Form XObject placed on the page.
#[derive(Debug, Clone)]
pub struct FormObject {
    pub state: ObjectState,
    pub matrix: Matrix,
    /// Stored form stream.
    pub form: Reference,
    pub(crate) emitted: bool,
}

impl FormObject {
    pub fn new(form: Reference, matrix: Matrix) -> Self {
        Self {
            state: ObjectState::default(),
            matrix,
            form,
            emitted: false,
        }
    }
}
