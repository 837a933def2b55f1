/// the board as sixteen row bitmasks: bit c of word r is
/// the cell at (r, c). 256 bits total, cheap to copy, and
/// solution sets hold a lot of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Field([u16; crate::GRID]);

impl Field {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn bit(&self, r: usize, c: usize) -> bool {
        self.0[r] >> c & 1 == 1
    }
    pub fn set(&mut self, r: usize, c: usize) {
        self.0[r] |= 1 << c;
    }
    pub fn clear(&mut self, r: usize, c: usize) {
        self.0[r] &= !(1 << c);
    }

    /// total ship cells.
    pub fn count(&self) -> usize {
        self.0.iter().map(|row| row.count_ones() as usize).sum()
    }

    /// per-row and per-column tallies in one pass.
    pub fn counts(&self) -> (Counts, Counts) {
        let mut rows = [0; crate::GRID];
        let mut cols = [0; crate::GRID];
        for (r, word) in self.0.iter().enumerate() {
            rows[r] = word.count_ones() as u8;
            for c in 0..crate::GRID {
                cols[c] += (word >> c & 1) as u8;
            }
        }
        (Counts::from(rows), Counts::from(cols))
    }

    /// decompose into ship records by row-major scan,
    /// preferring horizontal runs. isolated cells come out
    /// as length-1 records, which only a malformed field
    /// produces; fleet_is_legal rejects them.
    pub fn ships(&self) -> Vec<Ship> {
        let mut seen = Self::empty();
        let mut ships = vec![];
        for r in 0..crate::GRID {
            for c in 0..crate::GRID {
                if !self.bit(r, c) || seen.bit(r, c) {
                    continue;
                }
                let run = |dir: Dir| match dir {
                    Dir::H => (c..crate::GRID).take_while(|&x| self.bit(r, x)).count(),
                    Dir::V => (r..crate::GRID).take_while(|&x| self.bit(x, c)).count(),
                };
                let dir = match c + 1 < crate::GRID && self.bit(r, c + 1) {
                    true => Dir::H,
                    false => Dir::V,
                };
                let ship = Ship {
                    len: run(dir),
                    dir,
                    anchor: Coord::new(r, c),
                };
                for cell in ship.cells() {
                    seen.set(cell.row(), cell.col());
                }
                ships.push(ship);
            }
        }
        ships
    }

    /// exactly the fleet, and no two ships touch, not even
    /// diagonally.
    pub fn fleet_is_legal(&self) -> bool {
        let ships = self.ships();
        let mut lengths = ships.iter().map(|ship| ship.len).collect::<Vec<usize>>();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        if lengths != crate::SHIP_LENGTHS {
            return false;
        }
        for ship in &ships {
            let own = ship.cells().collect::<Vec<Coord>>();
            let r1 = own.first().map(Coord::row).unwrap_or(0).saturating_sub(1);
            let c1 = own.first().map(Coord::col).unwrap_or(0).saturating_sub(1);
            let r2 = (own.last().map(Coord::row).unwrap_or(0) + 2).min(crate::GRID);
            let c2 = (own.last().map(Coord::col).unwrap_or(0) + 2).min(crate::GRID);
            for r in r1..r2 {
                for c in c1..c2 {
                    if self.bit(r, c) && !own.contains(&Coord::new(r, c)) {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// the ships string: records joined by '.', empty for an
    /// empty board.
    pub fn notation(&self) -> String {
        self.ships()
            .iter()
            .map(|ship| ship.to_string())
            .collect::<Vec<String>>()
            .join(".")
    }
}

/// parse a ships string. overlap between records is not
/// rejected here; fleet_is_legal is the structural check.
impl TryFrom<&str> for Field {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut field = Self::empty();
        if s.is_empty() {
            return Ok(field);
        }
        for record in s.split('.') {
            let ship = Ship::try_from(record)?;
            for cell in ship.cells() {
                field.set(cell.row(), cell.col());
            }
        }
        Ok(field)
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        for r in 0..crate::GRID {
            for c in 0..crate::GRID {
                write!(f, "{}", if self.bit(r, c) { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

use super::coord::Coord;
use super::counts::Counts;
use super::ship::Dir;
use super::ship::Ship;
use crate::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    const FLEET: &str = "5HJ11.4HK16.4HF14.3HC8.3HI4.3HE1.2HO2.2HA5.2HF16.2HK6";

    #[test]
    fn bits() {
        let mut field = Field::empty();
        assert!(!field.bit(3, 7));
        field.set(3, 7);
        assert!(field.bit(3, 7));
        assert!(field.count() == 1);
        field.clear(3, 7);
        assert!(field == Field::empty());
    }

    #[test]
    fn counts_sum_to_fleet_cells() {
        let field = Field::try_from(FLEET).unwrap();
        let (rows, cols) = field.counts();
        assert!(rows.sum() == crate::FLEET_CELLS);
        assert!(cols.sum() == crate::FLEET_CELLS);
        assert!(field.count() == crate::FLEET_CELLS);
    }

    #[test]
    fn counts_agree_with_cells() {
        let field = Field::try_from("5HJ11.2VD8").unwrap();
        let (rows, cols) = field.counts();
        assert!(rows[10] == 5); // J11 spans row 11
        assert!(rows[7] == 1);
        assert!(rows[8] == 1);
        assert!(cols[3] == 2); // the vertical pair sits on the D file
    }

    #[test]
    fn notation_roundtrip_as_set() {
        let field = Field::try_from(FLEET).unwrap();
        let there = FLEET.split('.').collect::<BTreeSet<&str>>();
        let notation = field.notation();
        let back = notation.split('.').collect::<BTreeSet<&str>>();
        assert!(there == back);
        assert!(Field::try_from(notation.as_str()) == Ok(field));
    }

    #[test]
    fn empty_notation() {
        assert!(Field::empty().notation() == "");
        assert!(Field::try_from("") == Ok(Field::empty()));
    }

    #[test]
    fn legal_fleet() {
        assert!(Field::try_from(FLEET).unwrap().fleet_is_legal());
        let other = "5HL2.4HF16.4HD13.3HD5.3HC11.3HM10.2VD8.2HJ9.2HA15.2HH3";
        assert!(Field::try_from(other).unwrap().fleet_is_legal());
    }

    #[test]
    fn illegal_fleets() {
        // nine ships
        let short = "5HJ11.4HK16.4HF14.3HC8.3HI4.3HE1.2HO2.2HA5.2HF16";
        assert!(!Field::try_from(short).unwrap().fleet_is_legal());
        // diagonal contact between the 2HA5 pair and a ship moved next to it
        let touching = "5HJ11.4HK16.4HF14.3HC8.3HI4.3HE1.2HO2.2HA5.2HC6.2HK6";
        assert!(!Field::try_from(touching).unwrap().fleet_is_legal());
        assert!(!Field::empty().fleet_is_legal());
    }

    #[test]
    fn rejects_malformed_records() {
        assert!(Field::try_from("5HJ11.").is_err());
        assert!(Field::try_from("5HJ11.bogus").is_err());
    }
}
