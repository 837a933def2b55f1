#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dir {
    H,
    V,
}

/// one placed ship. the textual form is <len><dir><coord>,
/// e.g. "5HJ11": length 5, extending rightward from J11.
/// H extends columns rightward, V extends rows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ship {
    pub len: usize,
    pub dir: Dir,
    pub anchor: Coord,
}

impl Ship {
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let (r, c) = (self.anchor.row(), self.anchor.col());
        (0..self.len).map(move |i| match self.dir {
            Dir::H => Coord::new(r, c + i),
            Dir::V => Coord::new(r + i, c),
        })
    }
}

impl TryFrom<&str> for Ship {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let bytes = s.as_bytes();
        let len = match bytes.first() {
            Some(b @ b'2'..=b'5') => (b - b'0') as usize,
            _ => return Err(Error::MalformedShip),
        };
        let dir = match bytes.get(1) {
            Some(b'H') => Dir::H,
            Some(b'V') => Dir::V,
            _ => return Err(Error::MalformedShip),
        };
        let anchor = Coord::try_from(&s[2..]).map_err(|_| Error::MalformedShip)?;
        let ship = Self { len, dir, anchor };
        let span = match dir {
            Dir::H => anchor.col() + len,
            Dir::V => anchor.row() + len,
        };
        if span > crate::GRID {
            return Err(Error::MalformedShip);
        }
        Ok(ship)
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Dir::H => write!(f, "H"),
            Dir::V => write!(f, "V"),
        }
    }
}

impl Display for Ship {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}{}{}", self.len, self.dir, self.anchor)
    }
}

use super::coord::Coord;
use crate::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_roundtrip() {
        for text in ["5HJ11", "2VD8", "4HF14", "3HC8"] {
            let ship = Ship::try_from(text).unwrap();
            assert!(ship.to_string() == text);
        }
    }

    #[test]
    fn cells_extend_along_direction() {
        let ship = Ship::try_from("3HC8").unwrap();
        let cells = ship.cells().collect::<Vec<Coord>>();
        assert!(cells == vec![Coord::new(7, 2), Coord::new(7, 3), Coord::new(7, 4)]);
        let ship = Ship::try_from("2VD8").unwrap();
        let cells = ship.cells().collect::<Vec<Coord>>();
        assert!(cells == vec![Coord::new(7, 3), Coord::new(8, 3)]);
    }

    #[test]
    fn rejects_bad_records() {
        assert!(Ship::try_from("1HA1") == Err(Error::MalformedShip)); // no length-1 ships
        assert!(Ship::try_from("6HA1") == Err(Error::MalformedShip));
        assert!(Ship::try_from("5XA1") == Err(Error::MalformedShip));
        assert!(Ship::try_from("5H") == Err(Error::MalformedShip));
        assert!(Ship::try_from("") == Err(Error::MalformedShip));
    }

    #[test]
    fn rejects_overboard_extent() {
        assert!(Ship::try_from("5HN1") == Err(Error::MalformedShip)); // N..R runs off the P file
        assert!(Ship::try_from("5VA13") == Err(Error::MalformedShip)); // rows 13..17 run off the board
        assert!(Ship::try_from("5HL1").is_ok()); // L..P just fits
        assert!(Ship::try_from("5VA12").is_ok()); // rows 12..16 just fit
    }
}
