use crate::GRID;
use crate::board::Coord;
use crate::board::Field;
use crate::player::reservoir::Reservoir;

/// a greedy pre-solved game plan over a set of candidate
/// boards, all considered equally likely. a node lists shots
/// to fire in order: every shot but the last is a hit in all
/// surviving candidates, and the last one's outcome selects
/// the branch. a leaf has nothing left to decide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strategy {
    pub shots: Vec<Coord>,
    pub on_hit: Option<Box<Strategy>>,
    pub on_miss: Option<Box<Strategy>>,
}

impl Strategy {
    /// None iff there is nothing to plan over. reorders the
    /// slice in place so each recursive call works a disjoint
    /// subslice; no candidate is ever copied.
    pub fn build(candidates: &mut [Field]) -> Option<Self> {
        match candidates.is_empty() {
            true => None,
            false => Some(Self::descend(candidates, Field::empty())),
        }
    }

    fn descend(candidates: &mut [Field], mut fired: Field) -> Self {
        let total = candidates.len();
        let mut tally = [[0usize; GRID]; GRID];
        for field in candidates.iter() {
            for r in 0..GRID {
                for c in 0..GRID {
                    if field.bit(r, c) {
                        tally[r][c] += 1;
                    }
                }
            }
        }
        // cells every candidate agrees on are free hits
        let mut shots = vec![];
        for r in 0..GRID {
            for c in 0..GRID {
                if !fired.bit(r, c) && tally[r][c] == total {
                    shots.push(Coord::new(r, c));
                    fired.set(r, c);
                }
            }
        }
        // the most probable uncertain cell decides the branch
        let mut reservoir = Reservoir::new();
        for r in 0..GRID {
            for c in 0..GRID {
                if !fired.bit(r, c) && tally[r][c] > 0 && tally[r][c] < total {
                    reservoir.offer(Coord::new(r, c), tally[r][c]);
                }
            }
        }
        match reservoir.take() {
            None => Self {
                shots,
                on_hit: None,
                on_miss: None,
            },
            Some(decision) => {
                shots.push(decision);
                fired.set(decision.row(), decision.col());
                let cut = Self::partition(candidates, decision);
                let (hits, misses) = candidates.split_at_mut(cut);
                Self {
                    shots,
                    on_hit: Some(Box::new(Self::descend(hits, fired))),
                    on_miss: Some(Box::new(Self::descend(misses, fired))),
                }
            }
        }
    }

    /// two-pointer in-place partition: candidates containing
    /// the cell end up on the left. returns the split point.
    fn partition(candidates: &mut [Field], cell: Coord) -> usize {
        let (r, c) = (cell.row(), cell.col());
        let mut i = 0;
        let mut j = candidates.len();
        while i < j {
            if candidates[i].bit(r, c) {
                i += 1;
            } else {
                j -= 1;
                candidates.swap(i, j);
            }
        }
        i
    }

    /// shots to finish against the least convenient candidate.
    pub fn worst_case(&self) -> usize {
        let hit = self.on_hit.as_deref().map(Self::worst_case).unwrap_or(0);
        let miss = self.on_miss.as_deref().map(Self::worst_case).unwrap_or(0);
        self.shots.len() + hit.max(miss)
    }

    /// mean shots to finish, each leaf weighted by the
    /// candidates that reach it.
    pub fn expected(&self) -> f64 {
        self.weighted().0
    }

    fn weighted(&self) -> (f64, f64) {
        let shots = self.shots.len() as f64;
        match (self.on_hit.as_deref(), self.on_miss.as_deref()) {
            (None, None) => (shots, 1.0),
            (hit, miss) => {
                let (s1, w1) = hit.map(Self::weighted).unwrap_or((0.0, 0.0));
                let (s2, w2) = miss.map(Self::weighted).unwrap_or((0.0, 0.0));
                (shots + (w1 * s1 + w2 * s2) / (w1 + w2), w1 + w2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLEET: &str = "5HL2.4HF16.4HD13.3HD5.3HC11.3HM10.2VD8.2HJ9.2HA15.2HH3";

    fn solutions() -> Vec<Field> {
        let (rows, cols) = Field::try_from(FLEET).unwrap().counts();
        crate::solver::enumerate(rows, cols)
    }

    /// walk the tree against the candidate set it was built
    /// from, checking the certain/decision structure of every
    /// node along the way.
    fn audit(node: &Strategy, candidates: &[Field]) {
        assert!(!candidates.is_empty());
        let total = candidates.len();
        let occupancy = |coord: &Coord| {
            candidates
                .iter()
                .filter(|field| field.bit(coord.row(), coord.col()))
                .count()
        };
        for (i, coord) in node.shots.iter().enumerate() {
            let last = i + 1 == node.shots.len();
            match last && node.on_hit.is_some() {
                false => assert!(occupancy(coord) == total),
                true => {
                    let n = occupancy(coord);
                    assert!(n > 0 && n < total);
                }
            }
        }
        assert!(node.on_hit.is_some() == node.on_miss.is_some());
        if let (Some(on_hit), Some(on_miss)) = (&node.on_hit, &node.on_miss) {
            let decision = node.shots.last().unwrap();
            let (hits, misses) = candidates
                .iter()
                .copied()
                .partition::<Vec<Field>, _>(|field| field.bit(decision.row(), decision.col()));
            audit(on_hit, &hits);
            audit(on_miss, &misses);
        }
    }

    #[test]
    fn empty_input_yields_no_plan() {
        assert!(Strategy::build(&mut []).is_none());
    }

    #[test]
    fn single_candidate_is_all_certain_shots() {
        let field = Field::try_from(FLEET).unwrap();
        let strategy = Strategy::build(&mut [field]).unwrap();
        assert!(strategy.on_hit.is_none() && strategy.on_miss.is_none());
        assert!(strategy.shots.len() == crate::FLEET_CELLS);
        assert!(strategy.worst_case() == crate::FLEET_CELLS);
        assert!(strategy.expected() == crate::FLEET_CELLS as f64);
        assert!(
            strategy
                .shots
                .iter()
                .all(|coord| field.bit(coord.row(), coord.col()))
        );
    }

    #[test]
    fn partition_splits_cleanly() {
        let mut candidates = solutions();
        let cell = Coord::new(1, 11); // under the length-5 ship
        let cut = Strategy::partition(&mut candidates, cell);
        assert!(candidates[..cut].iter().all(|f| f.bit(1, 11)));
        assert!(candidates[cut..].iter().all(|f| !f.bit(1, 11)));
        assert!(cut > 0 && cut < candidates.len());
    }

    #[test]
    fn tree_structure_is_sound() {
        let mut candidates = solutions();
        let audited = candidates.clone();
        let strategy = Strategy::build(&mut candidates).unwrap();
        audit(&strategy, &audited);
    }

    #[test]
    fn scores_are_bounded() {
        let mut candidates = solutions();
        let strategy = Strategy::build(&mut candidates).unwrap();
        let worst = strategy.worst_case();
        assert!(worst >= 10);
        assert!(worst <= GRID * GRID);
        assert!(strategy.expected() <= worst as f64);
        assert!(strategy.expected() >= crate::FLEET_CELLS as f64);
    }
}
