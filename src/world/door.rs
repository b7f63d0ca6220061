use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Horizontal direction a door faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    North,
    East,
    South,
    West,
}

/// Side of the door frame the door swings on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hinge {
    Left,
    Right,
}

/// Which block of the two-block door
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorHalf {
    #[default]
    Lower,
    Upper,
}

/// Decoded door block state as reported by the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorState {
    pub open: bool,
    pub half: DoorHalf,
    pub hinge: Hinge,
    pub facing: Facing,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    pub fn as_str(&self) -> &'static str {
        match self {
            Facing::North => "north",
            Facing::East => "east",
            Facing::South => "south",
            Facing::West => "west",
        }
    }

    /// Doors facing north or south lie in the X/Y plane
    pub fn is_north_south(&self) -> bool {
        matches!(self, Facing::North | Facing::South)
    }
}

impl Hinge {
    pub const ALL: [Hinge; 2] = [Hinge::Left, Hinge::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Hinge::Left => "left",
            Hinge::Right => "right",
        }
    }
}

impl DoorHalf {
    pub fn as_str(&self) -> &'static str {
        match self {
            DoorHalf::Lower => "lower",
            DoorHalf::Upper => "upper",
        }
    }
}

impl DoorState {
    pub fn new(open: bool, half: DoorHalf, hinge: Hinge, facing: Facing) -> Self {
        Self { open, half, hinge, facing }
    }
}

impl FromStr for Facing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" => Ok(Facing::North),
            "east" => Ok(Facing::East),
            "south" => Ok(Facing::South),
            "west" => Ok(Facing::West),
            _ => Err(Error::UnknownFacing(s.to_string())),
        }
    }
}

impl FromStr for Hinge {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Hinge::Left),
            "right" => Ok(Hinge::Right),
            _ => Err(Error::UnknownHinge(s.to_string())),
        }
    }
}

impl FromStr for DoorHalf {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lower" => Ok(DoorHalf::Lower),
            "upper" => Ok(DoorHalf::Upper),
            _ => Err(Error::UnknownHalf(s.to_string())),
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Hinge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DoorHalf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_display() {
        for facing in Facing::ALL {
            assert_eq!(facing.to_string().parse::<Facing>().unwrap(), facing);
        }
        for hinge in Hinge::ALL {
            assert_eq!(hinge.to_string().parse::<Hinge>().unwrap(), hinge);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(" North ".parse::<Facing>().unwrap(), Facing::North);
        assert_eq!("RIGHT".parse::<Hinge>().unwrap(), Hinge::Right);
        assert_eq!("Upper".parse::<DoorHalf>().unwrap(), DoorHalf::Upper);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!("up".parse::<Facing>(), Err(Error::UnknownFacing(_))));
        assert!(matches!("middle".parse::<Hinge>(), Err(Error::UnknownHinge(_))));
        assert!(matches!("top".parse::<DoorHalf>(), Err(Error::UnknownHalf(_))));
    }

    #[test]
    fn test_state_from_yaml() {
        let state: DoorState =
            serde_yaml::from_str("open: true\nhalf: upper\nhinge: right\nfacing: west\n").unwrap();
        assert_eq!(state, DoorState::new(true, DoorHalf::Upper, Hinge::Right, Facing::West));
    }
}
