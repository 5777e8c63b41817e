//! Car driving on the field by executing a sequence of single-letter commands.

use thiserror::Error;

use super::{Collision, Command, Direction, Field, HasCollision, Position};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Car {
    name: String,
    start: Position,
    start_direction: Direction,
    position: Position,
    direction: Direction,
    commands: Vec<Command>,
    next_command: usize,
    collision: Option<Collision>,
}

impl Car {
    pub fn new(
        name: impl Into<String>,
        position: Position,
        direction: Direction,
        commands: &str,
        field: &Field,
    ) -> Result<Self, CarError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CarError::EmptyName);
        }
        if !field.contains(position) {
            return Err(CarError::InvalidStartPosition(position));
        }
        let commands = commands
            .chars()
            .enumerate()
            .map(|(index, command)| {
                Command::try_from(command).map_err(|_| CarError::InvalidCommand { command, index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name,
            start: position,
            start_direction: direction,
            position,
            direction,
            commands,
            next_command: 0,
            collision: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn start_direction(&self) -> Direction {
        self.start_direction
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn command_string(&self) -> String {
        self.commands.iter().copied().map(char::from).collect()
    }

    pub fn remaining_commands(&self) -> &[Command] {
        &self.commands[self.next_command..]
    }

    pub fn has_next_command(&self) -> bool {
        self.next_command < self.commands.len()
    }

    pub fn collision(&self) -> Option<&Collision> {
        self.collision.as_ref()
    }

    pub fn is_collided(&self) -> bool {
        self.collision.is_some()
    }

    /// A car takes part in the next round as long as it has commands left and has not crashed.
    pub fn is_active(&self) -> bool {
        !self.is_collided() && self.has_next_command()
    }

    /// Consumes and executes the next command. Returns `false` if nothing was consumed.
    pub fn step(&mut self, field: &Field) -> bool {
        if self.is_collided() {
            return false;
        }
        let Some(&command) = self.commands.get(self.next_command) else {
            return false;
        };
        self.next_command += 1;

        match command {
            Command::Left => self.direction = self.direction.rotate_left(),
            Command::Right => self.direction = self.direction.rotate_right(),
            Command::Forward => {
                let target = self.position + self.direction.offset();
                // Moves leaving the field are dropped.
                if field.contains(target) {
                    self.position = target;
                }
            }
        }
        true
    }

    /// Records a collision. The first record is kept; further calls for the same step and cell
    /// only add names of other cars.
    pub fn mark_collided(&mut self, step: usize, others: Vec<String>, position: Position) {
        if let Some(collision) = self.collision.as_mut() {
            if collision.step() == step && collision.position() == position {
                collision.merge(others);
            }
            return;
        }
        self.collision = Some(Collision::new(step, others, position));
    }

    pub fn reset(&mut self) {
        self.position = self.start;
        self.direction = self.start_direction;
        self.next_command = 0;
        self.collision = None;
    }
}

impl HasCollision for Car {
    fn occupied_cell(&self) -> Option<Position> {
        if self.is_collided() {
            None
        } else {
            Some(self.position)
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum CarError {
    #[error("car name must not be empty")]
    EmptyName,
    #[error("start position {0} is outside the field")]
    InvalidStartPosition(Position),
    #[error("invalid command {command:?} at index {index}")]
    InvalidCommand { command: char, index: usize },
}
