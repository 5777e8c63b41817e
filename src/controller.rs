//! Controller driving the simulation.
//!
//! The controller runs an interactive session on a line-oriented prompt: it asks for the field,
//! collects cars until the user starts the simulation, prints the result and offers to start
//! over. Invalid answers are reported and never end the session. The session ends when the user
//! exits or the input is exhausted.

use std::io::{self, BufRead};

use console::{style, Term};
use thiserror::Error;
use tracing::warn;

use crate::{
    domain::{CarError, Direction, Field, FieldError, Position},
    simulator::{Simulation, SimulationError},
};

pub trait Prompt {
    /// Reads one line without its line ending. `None` signals the end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    fn write_line(&mut self, line: &str) -> io::Result<()>;

    fn write_heading(&mut self, line: &str) -> io::Result<()> {
        self.write_line(line)
    }
}

/// Prompt on the process's terminal: answers come from stdin, output goes to stdout.
pub struct TermPrompt {
    term: Term,
}

impl TermPrompt {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TermPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TermPrompt {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.term.write_line(line)
    }

    fn write_heading(&mut self, line: &str) -> io::Result<()> {
        self.term.write_line(&style(line).bold().to_string())
    }
}

pub struct Controller<P> {
    prompt: P,
}

impl<P: Prompt> Controller<P> {
    pub fn new(prompt: P) -> Self {
        Self { prompt }
    }

    pub fn into_prompt(self) -> P {
        self.prompt
    }

    pub fn run(&mut self) -> io::Result<()> {
        match self.session() {
            Ok(()) | Err(ControllerError::EndOfInput) => Ok(()),
            Err(ControllerError::Io(err)) => Err(err),
            Err(ControllerError::Rejected(err)) => Err(io::Error::other(err)),
        }
    }

    fn session(&mut self) -> Result<(), ControllerError> {
        loop {
            self.prompt
                .write_heading("Welcome to Auto Driving Car Simulation!")?;
            self.prompt.write_line("")?;

            let field = self.read_field()?;
            let mut simulation = Simulation::new(field);
            self.collect_cars(&mut simulation)?;
            self.write_cars(&simulation)?;

            let report = simulation.run();
            self.prompt.write_line("")?;
            self.prompt
                .write_heading("After simulation, the result is:")?;
            for car in &report.cars {
                self.prompt.write_line(&car.to_string())?;
            }

            if !self.start_over()? {
                return Ok(());
            }
        }
    }

    fn read_field(&mut self) -> Result<Field, ControllerError> {
        loop {
            let answer =
                self.ask("Please enter the width and height of the simulation field in x y format:")?;
            match parse_field(&answer) {
                Ok(field) => {
                    self.prompt.write_line("")?;
                    self.prompt.write_line(&format!(
                        "You have created a field of {} x {}.",
                        field.width(),
                        field.height()
                    ))?;
                    return Ok(field);
                }
                Err(err) => {
                    self.reject(&err)?;
                    self.prompt.write_line("")?;
                }
            }
        }
    }

    fn collect_cars(&mut self, simulation: &mut Simulation) -> Result<(), ControllerError> {
        loop {
            self.prompt.write_line("")?;
            match self
                .choose(&["Add a car to field", "Run simulation"])?
                .as_str()
            {
                "1" => match self.read_car(simulation) {
                    Ok(()) => self.write_cars(simulation)?,
                    Err(ControllerError::Rejected(err)) => self.reject(&err)?,
                    Err(err) => return Err(err),
                },
                "2" if simulation.cars().is_empty() => self.prompt.write_line(
                    "No cars added. Please add at least one car before running simulation.",
                )?,
                "2" => return Ok(()),
                _ => self.prompt.write_line("Invalid option. Please try again.")?,
            }
        }
    }

    fn read_car(&mut self, simulation: &mut Simulation) -> Result<(), ControllerError> {
        let name = self.ask("Please enter the name of the car:")?;
        if name.is_empty() {
            return Err(InputError::EmptyName.into());
        }
        if simulation.contains_car(&name) {
            return Err(InputError::DuplicateName.into());
        }

        let placement = self.ask(&format!(
            "Please enter initial position of car {name} in x y Direction format:"
        ))?;
        let (position, direction) = parse_placement(&placement)?;
        if !simulation.field().contains(position) {
            return Err(InputError::OutsideField.into());
        }

        let commands = self
            .ask(&format!("Please enter the commands for car {name}:"))?
            .to_uppercase();
        simulation
            .add_car(&name, position, direction, &commands)
            .map_err(InputError::from)?;
        Ok(())
    }

    fn write_cars(&mut self, simulation: &Simulation) -> Result<(), ControllerError> {
        self.prompt.write_line("")?;
        self.prompt.write_line("Your current list of cars are:")?;
        for car in simulation.cars() {
            self.prompt.write_line(&format!(
                "- {}, {} {}, {}",
                car.name(),
                car.start(),
                car.start_direction(),
                car.command_string()
            ))?;
        }
        Ok(())
    }

    fn start_over(&mut self) -> Result<bool, ControllerError> {
        self.prompt.write_line("")?;
        match self.choose(&["Start over", "Exit"])?.as_str() {
            "1" => {
                self.prompt.write_line("")?;
                Ok(true)
            }
            "2" => {
                self.prompt.write_line("")?;
                self.prompt
                    .write_line("Thank you for running the simulation. Goodbye!")?;
                Ok(false)
            }
            _ => {
                self.prompt
                    .write_line("Invalid option. Exiting simulation.")?;
                Ok(false)
            }
        }
    }

    fn choose(&mut self, options: &[&str]) -> Result<String, ControllerError> {
        self.prompt
            .write_line("Please choose from the following options:")?;
        for (idx, option) in options.iter().enumerate() {
            self.prompt.write_line(&format!("[{}] {option}", idx + 1))?;
        }
        self.answer()
    }

    fn ask(&mut self, question: &str) -> Result<String, ControllerError> {
        self.prompt.write_line(question)?;
        self.answer()
    }

    fn answer(&mut self) -> Result<String, ControllerError> {
        let line = self.prompt.read_line()?.ok_or(ControllerError::EndOfInput)?;
        Ok(line.trim().to_string())
    }

    fn reject(&mut self, err: &InputError) -> Result<(), ControllerError> {
        warn!(%err, "Rejected input");
        self.prompt.write_line(&err.to_string())?;
        Ok(())
    }
}

/// Parses `width height`.
pub fn parse_field(line: &str) -> Result<Field, InputError> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    let [width, height] = tokens.as_slice() else {
        return Err(InputError::FieldFormat);
    };
    let (Ok(width), Ok(height)) = (width.parse::<i32>(), height.parse::<i32>()) else {
        return Err(InputError::FieldNotInteger);
    };
    Ok(Field::new(width, height)?)
}

/// Parses `x y D`, the direction being case-insensitive.
pub fn parse_placement(line: &str) -> Result<(Position, Direction), InputError> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    let [x, y, direction] = tokens.as_slice() else {
        return Err(InputError::PlacementFormat);
    };
    let (Ok(x), Ok(y)) = (x.parse::<i32>(), y.parse::<i32>()) else {
        return Err(InputError::Coordinates);
    };
    let direction = direction
        .to_uppercase()
        .parse::<Direction>()
        .map_err(|_| InputError::Direction)?;
    Ok((Position::new(x, y), direction))
}

#[derive(Error, Debug)]
enum ControllerError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Rejected(#[from] InputError),
    #[error("end of input")]
    EndOfInput,
}

/// Rejected answer. The message is shown to the user as is.
#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("Invalid input. Please enter two integers separated by a space.")]
    FieldFormat,
    #[error("Invalid input. Please enter valid integers.")]
    FieldNotInteger,
    #[error("Invalid input. Width and height must be positive integers.")]
    FieldDimensions(#[from] FieldError),
    #[error("Invalid name. The name of a car must not be empty.")]
    EmptyName,
    #[error("A car with that name already exists. Please choose a unique name.")]
    DuplicateName,
    #[error("Invalid input. Please enter two integers and a direction (N, S, E, W).")]
    PlacementFormat,
    #[error("Invalid coordinates. Please enter two integers for x and y.")]
    Coordinates,
    #[error("Invalid direction. Only N, S, E, or W are allowed.")]
    Direction,
    #[error("Initial position is outside the field. Please try again.")]
    OutsideField,
    #[error("Invalid command list. Only the characters F, L, and R are allowed.")]
    Commands,
}

impl From<SimulationError> for InputError {
    fn from(value: SimulationError) -> Self {
        match value {
            SimulationError::DuplicateName(_) => InputError::DuplicateName,
            SimulationError::Car(CarError::EmptyName) => InputError::EmptyName,
            SimulationError::Car(CarError::InvalidStartPosition(_)) => InputError::OutsideField,
            SimulationError::Car(CarError::InvalidCommand { .. }) => InputError::Commands,
        }
    }
}
