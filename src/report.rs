//! Final state of a simulation run.

use std::fmt;

use crate::domain::{Car, Collision, Direction, Position};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Report {
    pub cars: Vec<CarReport>,
    pub collisions: Vec<CollisionEvent>,
    pub steps: usize,
}

impl Report {
    pub fn car(&self, name: &str) -> Option<&CarReport> {
        self.cars.iter().find(|c| c.name == name)
    }
}

/// Renders one line per car, in registration order.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, car) in self.cars.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{car}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CarReport {
    pub name: String,
    pub position: Position,
    pub direction: Direction,
    pub collision: Option<Collision>,
}

impl CarReport {
    pub fn is_collided(&self) -> bool {
        self.collision.is_some()
    }
}

impl From<&Car> for CarReport {
    fn from(car: &Car) -> Self {
        Self {
            name: car.name().to_string(),
            position: car.position(),
            direction: car.direction(),
            collision: car.collision().cloned(),
        }
    }
}

impl fmt::Display for CarReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.collision {
            Some(collision) => write!(
                f,
                "- {}, collides with {} at {} at step {}",
                self.name,
                collision.others().join(", "),
                collision.position(),
                collision.step()
            ),
            None => write!(f, "- {}, {} {}", self.name, self.position, self.direction),
        }
    }
}

/// One collision on one cell, shared by all participants.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollisionEvent {
    pub step: usize,
    pub participants: Vec<String>,
    pub position: Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car_report(name: &str, position: (i32, i32), direction: Direction) -> CarReport {
        CarReport {
            name: name.to_string(),
            position: position.into(),
            direction,
            collision: None,
        }
    }

    #[test]
    fn test_report_display() {
        let report = Report {
            cars: vec![
                car_report("A", (5, 4), Direction::South),
                CarReport {
                    collision: Some(Collision::new(
                        7,
                        vec!["C".into(), "D".into()],
                        Position::new(2, 3),
                    )),
                    ..car_report("B", (2, 3), Direction::West)
                },
            ],
            collisions: vec![],
            steps: 7,
        };

        insta::assert_snapshot!(report.to_string(), @r"
        - A, (5,4) S
        - B, collides with C, D at (2,3) at step 7
        ");
    }

    #[test]
    fn test_report_display_empty() {
        assert_eq!(Report::default().to_string(), "");
    }

    #[test]
    fn test_report_car() {
        let report = Report {
            cars: vec![car_report("A", (0, 0), Direction::North)],
            ..Report::default()
        };
        assert!(report.car("A").is_some_and(|c| !c.is_collided()));
        assert_eq!(report.car("B"), None);
    }
}
