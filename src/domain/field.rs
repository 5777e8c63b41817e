//! Rectangular field the cars drive on.

use thiserror::Error;

use super::Position;

/// A field of `width` x `height` cells. Valid positions range from `(0,0)` to
/// `(width - 1, height - 1)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Field {
    width: i32,
    height: i32,
}

impl Field {
    pub fn new(width: i32, height: i32) -> Result<Self, FieldError> {
        if width < 1 || height < 1 {
            return Err(FieldError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        (0..self.width).contains(&position.x()) && (0..self.height).contains(&position.y())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum FieldError {
    #[error("invalid field dimensions {width} x {height}")]
    InvalidDimensions { width: i32, height: i32 },
}
