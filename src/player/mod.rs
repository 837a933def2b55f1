pub mod reservoir;

use self::reservoir::Reservoir;
use crate::GRID;
use crate::board::Coord;
use crate::board::Counts;
use crate::board::Field;
use crate::board::Shot;
use crate::cache::Cache;
use crate::error::Error;
use rand::Rng;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;
use std::time::Duration;

/// the opponent: owns the solution cache and picks cells to
/// fire at. one instance serves a whole process; per-game
/// state lives in the request (counts + shot history).
pub struct Player {
    cache: Cache,
    timeout: Duration,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            cache: Cache::default(),
            timeout: crate::MOVE_TIMEOUT,
        }
    }
}

impl Player {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    /// probability-driven move selection: over all candidate
    /// boards that agree with the shot history, fire at an
    /// unfired cell a ship occupies most often, ties broken
    /// uniformly. falls back to the cheap heuristic when the
    /// solver cannot answer in time. an empty surviving set
    /// means the history contradicts the counts; that is the
    /// caller's problem, not a cell of our choosing.
    pub fn shoot(&self, rows: &Counts, cols: &Counts, shots: &[Shot]) -> Result<Coord, Error> {
        let mut fired = Field::empty();
        for shot in shots {
            fired.set(shot.coord.row(), shot.coord.col());
        }
        let solutions = match self.cache.solutions(*rows, *cols, self.timeout) {
            Ok(solutions) => solutions,
            Err(Error::SolverTimeout) => {
                log::warn!("solver timed out on {}/{}; falling back to heuristic", rows, cols);
                return Self::simple(rows, cols, &fired);
            }
            Err(e) => return Err(e),
        };
        let surviving = solutions
            .iter()
            .filter(|field| shots.iter().all(|shot| shot.matches(field)))
            .collect::<Vec<&Field>>();
        if surviving.is_empty() {
            return Err(Error::Unsatisfiable);
        }
        // every cell is tallied by exactly one worker
        let hits = (0..GRID * GRID)
            .into_par_iter()
            .map(|code| {
                let (r, c) = (code / GRID, code % GRID);
                match !fired.bit(r, c) && rows[r] > 0 && cols[c] > 0 {
                    true => surviving.iter().filter(|field| field.bit(r, c)).count(),
                    false => 0,
                }
            })
            .collect::<Vec<usize>>();
        let mut reservoir = Reservoir::new();
        for (code, &n) in hits.iter().enumerate() {
            let (r, c) = (code / GRID, code % GRID);
            if !fired.bit(r, c) && rows[r] > 0 && cols[c] > 0 {
                reservoir.offer(Coord::new(r, c), n);
            }
        }
        reservoir.take().ok_or(Error::Unsatisfiable)
    }

    /// constant-time fallback: prefer unfired cells in heavy
    /// rows and columns.
    pub fn simple(rows: &Counts, cols: &Counts, fired: &Field) -> Result<Coord, Error> {
        let mut reservoir = Reservoir::new();
        for r in 0..GRID {
            for c in 0..GRID {
                if !fired.bit(r, c) && rows[r] > 0 && cols[c] > 0 {
                    reservoir.offer(Coord::new(r, c), rows[r] as usize + cols[c] as usize);
                }
            }
        }
        reservoir.take().ok_or(Error::Unsatisfiable)
    }

    /// deal our own fleet: a random solution of the built-in
    /// template.
    pub fn setup(&self) -> Field {
        let rows = Counts::from(crate::SETUP_ROWS);
        let cols = Counts::from(crate::SETUP_COLS);
        let solutions = crate::solver::enumerate(rows, cols);
        solutions[rand::rng().random_range(0..solutions.len())]
    }

    /// end of game: release the solution set for this board.
    pub fn finished(&self, field: &Field) {
        let (rows, cols) = field.counts();
        self.cache.purge(&rows, &cols);
    }
}
