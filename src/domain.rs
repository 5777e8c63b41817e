//! The domain module encapsulates the core business logic. It defines the `Field` and `Car`
//! entities, along with the rules governing how cars move and collide on the field.
//!
//! The module has no knowledge of prompts or output formatting, so the same rules serve the
//! interactive controller and the tests alike.

mod basis;
mod car;
mod collision;
mod field;

pub use basis::{BasisError, Command, Direction, Position};
pub use car::{Car, CarError};
pub use collision::{group_by_cell, Collision, CollisionGroup, HasCollision};
pub use field::{Field, FieldError};
