//! Collision detection based on occupied grid cells.

use std::collections::BTreeMap;

use super::Position;

pub trait HasCollision {
    /// The cell taking part in collision detection, or `None` if the object is out of play.
    fn occupied_cell(&self) -> Option<Position>;
}

/// Objects sharing one cell, referenced by their index in the slice passed to
/// [`group_by_cell`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollisionGroup {
    pub position: Position,
    pub members: Vec<usize>,
}

/// Groups all objects that occupy the same cell. Only cells holding at least two objects are
/// returned. Members are listed in slice order, groups are ordered by their first member.
pub fn group_by_cell<T: HasCollision>(objects: &[T]) -> Vec<CollisionGroup> {
    let mut cells: BTreeMap<Position, Vec<usize>> = BTreeMap::new();
    for (idx, position) in objects
        .iter()
        .enumerate()
        .filter_map(|(idx, o)| o.occupied_cell().map(|p| (idx, p)))
    {
        cells.entry(position).or_default().push(idx);
    }

    let mut groups = cells
        .into_iter()
        .filter(|(_, members)| members.len() > 1)
        .map(|(position, members)| CollisionGroup { position, members })
        .collect::<Vec<_>>();
    groups.sort_by_key(|g| g.members[0]);
    groups
}

/// Collision as recorded by a single car.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Collision {
    step: usize,
    others: Vec<String>,
    position: Position,
}

impl Collision {
    pub fn new(step: usize, others: Vec<String>, position: Position) -> Self {
        let mut collision = Self {
            step,
            others: Vec::with_capacity(others.len()),
            position,
        };
        collision.merge(others);
        collision
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn others(&self) -> &[String] {
        &self.others
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub(super) fn merge(&mut self, others: Vec<String>) {
        for name in others {
            if !self.others.contains(&name) {
                self.others.push(name);
            }
        }
    }
}
