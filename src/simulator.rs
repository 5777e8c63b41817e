//! Simulation of cars on a shared field.
//!
//! Cars move in lockstep: every round each active car executes exactly one command, in
//! registration order. Collisions are detected once all cars have moved, so the order in which
//! cars are processed within a round never changes who collides with whom. Crashed cars stay on
//! their cell and take no further part in the simulation.

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    domain::{group_by_cell, Car, CarError, Direction, Field, Position},
    report::{CarReport, CollisionEvent, Report},
};

#[derive(Clone, Debug)]
pub struct Simulation {
    field: Field,
    cars: Vec<Car>,
    step: usize,
    collisions: Vec<CollisionEvent>,
}

impl Simulation {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            cars: Vec::new(),
            step: 0,
            collisions: Vec::new(),
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn car(&self, name: &str) -> Option<&Car> {
        self.cars.iter().find(|c| c.name() == name)
    }

    pub fn contains_car(&self, name: &str) -> bool {
        self.car(name).is_some()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn collisions(&self) -> &[CollisionEvent] {
        &self.collisions
    }

    pub fn add_car(
        &mut self,
        name: &str,
        position: Position,
        direction: Direction,
        commands: &str,
    ) -> Result<&Car, SimulationError> {
        let car = Car::new(name, position, direction, commands, &self.field)?;
        if self.contains_car(name) {
            return Err(SimulationError::DuplicateName(name.to_string()));
        }
        debug!(name, %position, %direction, commands, "Added car");
        self.cars.push(car);
        Ok(&self.cars[self.cars.len() - 1])
    }

    /// Runs all cars from their starting state until every car has either executed all of its
    /// commands or collided.
    pub fn run(&mut self) -> Report {
        self.reset();
        while self.step_round() {}
        info!(
            steps = self.step,
            cars = self.cars.len(),
            collisions = self.collisions.len(),
            "Simulation finished"
        );
        self.report()
    }

    pub fn report(&self) -> Report {
        Report {
            cars: self.cars.iter().map(CarReport::from).collect(),
            collisions: self.collisions.clone(),
            steps: self.step,
        }
    }

    fn reset(&mut self) {
        self.step = 0;
        self.collisions.clear();
        self.cars.iter_mut().for_each(Car::reset);
    }

    /// Advances every active car by one command. Returns `false` without advancing the step
    /// counter if no car is active.
    fn step_round(&mut self) -> bool {
        if !self.cars.iter().any(Car::is_active) {
            return false;
        }
        self.step += 1;

        for car in self.cars.iter_mut().filter(|c| c.is_active()) {
            car.step(&self.field);
        }
        debug!(step = self.step, "Completed round");

        self.detect_collisions();
        true
    }

    /// Marks all cars sharing a cell as collided. Returns the number of new collisions.
    fn detect_collisions(&mut self) -> usize {
        let groups = group_by_cell(&self.cars);

        for group in &groups {
            let participants = group
                .members
                .iter()
                .map(|&idx| self.cars[idx].name().to_string())
                .collect::<Vec<_>>();

            for (k, &idx) in group.members.iter().enumerate() {
                let others = participants
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != k)
                    .map(|(_, name)| name.clone())
                    .collect();
                self.cars[idx].mark_collided(self.step, others, group.position);
            }

            info!(
                step = self.step,
                position = %group.position,
                cars = ?participants,
                "Collision"
            );
            self.collisions.push(CollisionEvent {
                step: self.step,
                participants,
                position: group.position,
            });
        }

        groups.len()
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum SimulationError {
    #[error(transparent)]
    Car(#[from] CarError),
    #[error("car name {0:?} is already taken")]
    DuplicateName(String),
}
