/// one annotated shot from the history. the textual form is
/// <S|W><coord>: S for a hit ("sunk"), W for a miss ("water").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shot {
    pub coord: Coord,
    pub hit: bool,
}

impl Shot {
    /// whether a candidate field agrees with this observation.
    pub fn matches(&self, field: &Field) -> bool {
        field.bit(self.coord.row(), self.coord.col()) == self.hit
    }

    /// parse a '.'-joined shot history. the empty string is
    /// an empty history.
    pub fn parse_all(s: &str) -> Result<Vec<Self>, Error> {
        if s.is_empty() {
            return Ok(vec![]);
        }
        s.split('.').map(Self::try_from).collect()
    }

    pub fn format_all(shots: &[Self]) -> String {
        shots
            .iter()
            .map(|shot| shot.to_string())
            .collect::<Vec<String>>()
            .join(".")
    }
}

impl TryFrom<&str> for Shot {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hit = match s.as_bytes().first() {
            Some(b'S') => true,
            Some(b'W') => false,
            _ => return Err(Error::MalformedShot),
        };
        let coord = Coord::try_from(&s[1..]).map_err(|_| Error::MalformedShot)?;
        Ok(Self { coord, hit })
    }
}

impl Display for Shot {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}{}", if self.hit { "S" } else { "W" }, self.coord)
    }
}

use super::coord::Coord;
use super::field::Field;
use crate::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;
