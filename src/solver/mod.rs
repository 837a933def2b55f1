pub mod state;

use self::state::State;
use crate::GRID;
use crate::SHIP_LENGTHS;
use crate::board::Counts;
use crate::board::Field;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;
use std::sync::mpsc::Receiver;
use std::sync::mpsc::SyncSender;

/// a candidate rectangle: top-left corner plus extent.
type Claim = (usize, usize, usize, usize);

/// stream every fleet placement matching the given counts.
///
/// each emitted board carries exactly the fleet, matches the
/// row and column sums, and keeps ships clear of each other's
/// exclusion zones. the stream is exhaustive and duplicate
/// free; channel disconnect is the termination sentinel.
/// subtrees under the first ship fan out across rayon
/// workers, each on a deep copy of the partial state, so
/// arrival order is unspecified. the emitting thread only
/// exits once every worker has drained.
pub fn solutions(rows: Counts, cols: Counts) -> Receiver<Field> {
    let (tx, rx) = std::sync::mpsc::sync_channel(crate::SOLUTION_BUFFER);
    std::thread::spawn(move || {
        let state = State::new(&rows, &cols);
        openings(&state)
            .into_par_iter()
            .for_each_with(tx, |tx, (r1, c1, h, w)| {
                let mut fork = state.clone();
                fork.claim(r1, c1, h, w);
                if fork.feasible(r1, c1, h, w) {
                    descend(&mut fork, 1, r1, (c1 + w + 1).min(GRID), tx);
                }
            });
    });
    rx
}

/// drain the stream into a vector.
pub fn enumerate(rows: Counts, cols: Counts) -> Vec<Field> {
    solutions(rows, cols).iter().collect()
}

/// admissible placements of the first ship. these become the
/// roots of the parallel subtrees.
fn openings(state: &State) -> Vec<Claim> {
    let len = SHIP_LENGTHS[0];
    let mut claims = vec![];
    for (h, w) in [(1, len), (len, 1)] {
        for r1 in 0..=(GRID - h) {
            for c1 in 0..=(GRID - w) {
                if state.admissible(r1, c1, h, w) {
                    claims.push((r1, c1, h, w));
                }
            }
        }
    }
    claims
}

/// sequential backtracking over ships 1.., in fleet order.
///
/// when this ship's length equals the previous one's, the
/// scan starts at (start_r, start_c), the cell just past the
/// previous claim. that canonical ordering keeps
/// interchangeable ships from enumerating the same board
/// once per permutation.
fn descend(state: &mut State, ship: usize, start_r: usize, start_c: usize, tx: &SyncSender<Field>) {
    if ship == SHIP_LENGTHS.len() {
        tx.send(state.field()).ok();
        return;
    }
    let len = SHIP_LENGTHS[ship];
    let (start_r, start_c) = match SHIP_LENGTHS[ship - 1] == len {
        true => (start_r, start_c),
        false => (0, 0),
    };
    for (h, w) in [(1, len), (len, 1)] {
        for r1 in start_r..=(GRID - h) {
            if (state.rows[r1] as usize) < w {
                continue;
            }
            let from = if r1 == start_r { start_c } else { 0 };
            for c1 in from..=(GRID - w) {
                if (state.cols[c1] as usize) < h || state.blocked[r1][c1] > 0 {
                    continue;
                }
                if !state.admissible(r1, c1, h, w) {
                    continue;
                }
                state.claim(r1, c1, h, w);
                if state.feasible(r1, c1, h, w) {
                    descend(state, ship + 1, r1, (c1 + w + 1).min(GRID), tx);
                }
                state.unclaim(r1, c1, h, w);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn counts_of(ships: &str) -> (Counts, Counts) {
        Field::try_from(ships).unwrap().counts()
    }

    fn assert_all_valid(solutions: &[Field], rows: &Counts, cols: &Counts) {
        for field in solutions {
            let (r, c) = field.counts();
            assert!(r == *rows && c == *cols);
            assert!(field.fleet_is_legal());
        }
    }

    #[test]
    fn known_fleet_solution_count() {
        let (rows, cols) = counts_of("5HJ11.4HK16.4HF14.3HC8.3HI4.3HE1.2HO2.2HA5.2HF16.2HK6");
        let solutions = enumerate(rows, cols);
        assert!(solutions.len() == 6346);
        assert_all_valid(&solutions, &rows, &cols);
        let distinct = solutions.iter().collect::<HashSet<&Field>>();
        assert!(distinct.len() == solutions.len());
    }

    #[test]
    fn second_known_fleet_solution_count() {
        let (rows, cols) = counts_of("5HL2.4HF16.4HD13.3HD5.3HC11.3HM10.2VD8.2HJ9.2HA15.2HH3");
        let solutions = enumerate(rows, cols);
        assert!(solutions.len() == 1966);
        assert_all_valid(&solutions, &rows, &cols);
    }

    #[test]
    fn staircase_template_has_valid_solutions() {
        let rows = Counts::try_from("0.0.0.0.0.0.2.2.2.2.3.3.3.4.4.5").unwrap();
        let cols = Counts::try_from("2.2.2.2.2.2.2.2.2.2.2.2.2.2.2.0").unwrap();
        let solutions = enumerate(rows, cols);
        assert!(!solutions.is_empty());
        assert_all_valid(&solutions, &rows, &cols);
        let distinct = solutions.iter().collect::<HashSet<&Field>>();
        assert!(distinct.len() == solutions.len());
    }

    #[test]
    fn board_reappears_in_its_own_solutions() {
        let field =
            Field::try_from("5HL2.4HF16.4HD13.3HD5.3HC11.3HM10.2VD8.2HJ9.2HA15.2HH3").unwrap();
        let (rows, cols) = field.counts();
        assert!(enumerate(rows, cols).contains(&field));
    }

    #[test]
    fn unbalanced_counts_have_no_solutions() {
        let rows = Counts::try_from("1.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0").unwrap();
        let cols = Counts::try_from("1.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0").unwrap();
        assert!(enumerate(rows, cols).is_empty());
    }

    #[test]
    fn stream_terminates_by_disconnect() {
        let (rows, cols) = counts_of("5HL2.4HF16.4HD13.3HD5.3HC11.3HM10.2VD8.2HJ9.2HA15.2HH3");
        let rx = solutions(rows, cols);
        let mut n = 0;
        while rx.recv().is_ok() {
            n += 1;
        }
        assert!(n == 1966);
    }
}
