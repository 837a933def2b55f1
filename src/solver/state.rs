use crate::GRID;
use crate::board::Counts;
use crate::board::Field;

/// mutable partial placement state for one backtracking
/// subtree. rows and cols hold residual capacity. blocked is
/// a counter, not a flag: exclusion zones overlap, and each
/// unwind must be able to decrement its own claim without
/// clobbering a neighbor's.
#[derive(Clone, PartialEq, Eq)]
pub struct State {
    pub(super) rows: [u8; GRID],
    pub(super) cols: [u8; GRID],
    pub(super) ships: Field,
    pub(super) blocked: [[u8; GRID]; GRID],
}

impl State {
    pub fn new(rows: &Counts, cols: &Counts) -> Self {
        let mut state = Self {
            rows: [0; GRID],
            cols: [0; GRID],
            ships: Field::empty(),
            blocked: [[0; GRID]; GRID],
        };
        for i in 0..GRID {
            state.rows[i] = rows[i];
            state.cols[i] = cols[i];
        }
        state
    }

    /// the expanded rectangle a claim blocks, clipped to the
    /// board.
    fn zone(r1: usize, c1: usize, h: usize, w: usize) -> (usize, usize, usize, usize) {
        (
            r1.saturating_sub(1),
            c1.saturating_sub(1),
            (r1 + h + 1).min(GRID),
            (c1 + w + 1).min(GRID),
        )
    }

    /// full admission check for an h×w ship at (r1, c1):
    /// every spanned row keeps residual ≥ w, every spanned
    /// column ≥ h, and no cell of the rectangle is blocked.
    /// callers guarantee the rectangle lies on the board.
    pub(super) fn admissible(&self, r1: usize, c1: usize, h: usize, w: usize) -> bool {
        let (r2, c2) = (r1 + h, c1 + w);
        (r1..r2).all(|r| self.rows[r] as usize >= w)
            && (c1..c2).all(|c| self.cols[c] as usize >= h)
            && (r1..r2).all(|r| (c1..c2).all(|c| self.blocked[r][c] == 0))
    }

    pub(super) fn claim(&mut self, r1: usize, c1: usize, h: usize, w: usize) {
        let (r2, c2) = (r1 + h, c1 + w);
        let (br1, bc1, br2, bc2) = Self::zone(r1, c1, h, w);
        for r in r1..r2 {
            self.rows[r] -= w as u8;
        }
        for c in c1..c2 {
            self.cols[c] -= h as u8;
        }
        for r in r1..r2 {
            for c in c1..c2 {
                self.ships.set(r, c);
            }
        }
        for r in br1..br2 {
            for c in bc1..bc2 {
                self.blocked[r][c] += 1;
            }
        }
    }

    /// exact inverse of claim.
    pub(super) fn unclaim(&mut self, r1: usize, c1: usize, h: usize, w: usize) {
        let (r2, c2) = (r1 + h, c1 + w);
        let (br1, bc1, br2, bc2) = Self::zone(r1, c1, h, w);
        for r in br1..br2 {
            for c in bc1..bc2 {
                self.blocked[r][c] -= 1;
            }
        }
        for r in r1..r2 {
            for c in c1..c2 {
                self.ships.clear(r, c);
            }
        }
        for c in c1..c2 {
            self.cols[c] += h as u8;
        }
        for r in r1..r2 {
            self.rows[r] += w as u8;
        }
    }

    /// post-claim infeasibility prune over the rows and
    /// columns the new exclusion zone touched: a lone
    /// residual cell walled in by empty neighbors cannot
    /// host any remaining ship. sound only while every
    /// remaining ship has length ≥ 2.
    pub(super) fn feasible(&self, r1: usize, c1: usize, h: usize, w: usize) -> bool {
        let (br1, bc1, br2, bc2) = Self::zone(r1, c1, h, w);
        for r in br1..br2 {
            if self.rows[r] == 1
                && (r == 0 || self.rows[r - 1] == 0)
                && (r == GRID - 1 || self.rows[r + 1] == 0)
            {
                return false;
            }
        }
        for c in bc1..bc2 {
            if self.cols[c] == 1
                && (c == 0 || self.cols[c - 1] == 0)
                && (c == GRID - 1 || self.cols[c + 1] == 0)
            {
                return false;
            }
        }
        true
    }

    /// immutable copy of the placed cells, handed off to
    /// consumers.
    pub(super) fn field(&self) -> Field {
        self.ships
    }
}
