//! Basic building blocks.

use std::{fmt, ops::Add, str::FromStr};

use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

impl From<(i32, i32)> for Position {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<Position> for (i32, i32) {
    fn from(value: Position) -> Self {
        (value.x, value.y)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Facing of a car. The variants are listed clockwise, starting at north.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    const CLOCKWISE: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn rotate_left(self) -> Self {
        Self::CLOCKWISE[(self as usize + 3) % 4]
    }

    pub fn rotate_right(self) -> Self {
        Self::CLOCKWISE[(self as usize + 1) % 4]
    }

    /// Offset of the cell directly ahead.
    pub fn offset(self) -> Position {
        match self {
            Direction::North => Position::new(0, 1),
            Direction::East => Position::new(1, 0),
            Direction::South => Position::new(0, -1),
            Direction::West => Position::new(-1, 0),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = BasisError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'N' => Ok(Direction::North),
            'E' => Ok(Direction::East),
            'S' => Ok(Direction::South),
            'W' => Ok(Direction::West),
            _ => Err(BasisError::InvalidDirection(value.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = BasisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Direction::try_from(symbol),
            _ => Err(BasisError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Left,
    Right,
    Forward,
}

impl TryFrom<char> for Command {
    type Error = BasisError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'L' => Ok(Command::Left),
            'R' => Ok(Command::Right),
            'F' => Ok(Command::Forward),
            _ => Err(BasisError::InvalidCommand(value)),
        }
    }
}

impl From<Command> for char {
    fn from(value: Command) -> Self {
        match value {
            Command::Left => 'L',
            Command::Right => 'R',
            Command::Forward => 'F',
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum BasisError {
    #[error("invalid direction {0:?}")]
    InvalidDirection(String),
    #[error("invalid command {0:?}")]
    InvalidCommand(char),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_position() {
        let position = Position::new(1, 2);
        assert_eq!(position.x(), 1);
        assert_eq!(position.y(), 2);
        assert_eq!(position.to_string(), "(1,2)");
        assert_eq!(position + Position::new(-1, 3), Position::new(0, 5));
    }

    #[rstest]
    #[case::north(Direction::North, Direction::West, Direction::East)]
    #[case::east(Direction::East, Direction::North, Direction::South)]
    #[case::south(Direction::South, Direction::East, Direction::West)]
    #[case::west(Direction::West, Direction::South, Direction::North)]
    fn test_direction_rotation(
        #[case] direction: Direction,
        #[case] left: Direction,
        #[case] right: Direction,
    ) {
        assert_eq!(direction.rotate_left(), left);
        assert_eq!(direction.rotate_right(), right);
        assert_eq!(direction.rotate_left().rotate_right(), direction);
    }

    #[rstest]
    #[case(Direction::North)]
    #[case(Direction::East)]
    #[case(Direction::South)]
    #[case(Direction::West)]
    fn test_direction_full_turn(#[case] direction: Direction) {
        let left = (0..4).fold(direction, |d, _| d.rotate_left());
        let right = (0..4).fold(direction, |d, _| d.rotate_right());
        assert_eq!(left, direction);
        assert_eq!(right, direction);
    }

    #[rstest]
    #[case::north(Direction::North, (0, 1))]
    #[case::east(Direction::East, (1, 0))]
    #[case::south(Direction::South, (0, -1))]
    #[case::west(Direction::West, (-1, 0))]
    fn test_direction_offset(#[case] direction: Direction, #[case] offset: (i32, i32)) {
        assert_eq!(direction.offset(), Position::from(offset));
    }

    #[rstest]
    #[case("N", Ok(Direction::North))]
    #[case("E", Ok(Direction::East))]
    #[case("S", Ok(Direction::South))]
    #[case("W", Ok(Direction::West))]
    #[case("n", Err(BasisError::InvalidDirection("n".to_string())))]
    #[case("NE", Err(BasisError::InvalidDirection("NE".to_string())))]
    #[case("", Err(BasisError::InvalidDirection(String::new())))]
    fn test_direction_from_str(#[case] input: &str, #[case] expected: Result<Direction, BasisError>) {
        assert_eq!(input.parse::<Direction>(), expected);
    }

    #[test]
    fn test_direction_display() {
        let symbols = Direction::CLOCKWISE
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        assert_eq!(symbols, ["N", "E", "S", "W"]);
    }

    #[rstest]
    #[case('L', Ok(Command::Left))]
    #[case('R', Ok(Command::Right))]
    #[case('F', Ok(Command::Forward))]
    #[case('f', Err(BasisError::InvalidCommand('f')))]
    #[case('X', Err(BasisError::InvalidCommand('X')))]
    fn test_command_try_from(#[case] symbol: char, #[case] expected: Result<Command, BasisError>) {
        assert_eq!(Command::try_from(symbol), expected);
        if let Ok(command) = expected {
            assert_eq!(char::from(command), symbol);
        }
    }
}
