use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// uniform random choice among the maxima of a scored
/// stream, in O(1) memory: the k-th candidate to tie the
/// running maximum is adopted with probability 1/k. this is
/// deliberately not an argmax; materializing the tied set
/// would cost memory for nothing.
pub struct Reservoir<T> {
    rng: SmallRng,
    best: Option<T>,
    score: usize,
    ties: u32,
}

impl<T> Reservoir<T> {
    pub fn new() -> Self {
        Self::with(SmallRng::from_os_rng())
    }

    pub fn with(rng: SmallRng) -> Self {
        Self {
            rng,
            best: None,
            score: 0,
            ties: 0,
        }
    }

    pub fn offer(&mut self, candidate: T, score: usize) {
        if self.best.is_none() || score > self.score {
            self.best = Some(candidate);
            self.score = score;
            self.ties = 1;
        } else if score == self.score {
            self.ties += 1;
            if self.rng.random_range(0..self.ties) == 0 {
                self.best = Some(candidate);
            }
        }
    }

    pub fn take(self) -> Option<T> {
        self.best
    }
}

impl<T> Default for Reservoir<T> {
    fn default() -> Self {
        Self::new()
    }
}
