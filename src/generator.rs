use crate::GRID;
use crate::SHIP_LENGTHS;
use crate::board::Field;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// place each ship of the fleet at a uniformly sampled spot,
/// retrying until it lands on the board and clear of every
/// existing exclusion zone. the distribution is biased toward
/// sparse layouts, which is acceptable for difficulty mining.
pub fn random_field(rng: &mut impl Rng) -> Field {
    let mut field = Field::empty();
    let mut blocked = [[false; GRID]; GRID];
    for len in SHIP_LENGTHS {
        loop {
            let r1 = rng.random_range(0..GRID);
            let c1 = rng.random_range(0..GRID);
            let (h, w) = match rng.random_bool(0.5) {
                true => (len, 1),
                false => (1, len),
            };
            let (r2, c2) = (r1 + h, c1 + w);
            if r2 > GRID || c2 > GRID {
                continue;
            }
            if (r1..r2).any(|r| (c1..c2).any(|c| blocked[r][c])) {
                continue;
            }
            for r in r1..r2 {
                for c in c1..c2 {
                    field.set(r, c);
                }
            }
            for r in r1.saturating_sub(1)..(r2 + 1).min(GRID) {
                for c in c1.saturating_sub(1)..(c2 + 1).min(GRID) {
                    blocked[r][c] = true;
                }
            }
            break;
        }
    }
    field
}

impl crate::Arbitrary for Field {
    fn random() -> Self {
        random_field(&mut SmallRng::from_os_rng())
    }
}

/// mine for hard set-ups, forever: a random fleet whose
/// counts admit at least `difficulty` solutions is worth
/// printing. each worker keeps its own rng; sharing one
/// behind a lock would serialize the hot path.
pub fn mine(threads: usize, difficulty: usize) {
    log::info!("mining with {} workers, difficulty {}", threads, difficulty);
    let workers = (0..threads)
        .map(|_| {
            std::thread::spawn(move || {
                let mut rng = SmallRng::from_os_rng();
                loop {
                    let field = random_field(&mut rng);
                    let (rows, cols) = field.counts();
                    let count = crate::solver::enumerate(rows, cols).len();
                    log::debug!("{}/{} admits {} solutions", rows, cols, count);
                    if count >= difficulty {
                        println!("{} {} {} {}", count, rows, cols, field.notation());
                    }
                }
            })
        })
        .collect::<Vec<std::thread::JoinHandle<_>>>();
    for worker in workers {
        worker.join().expect("miner worker");
    }
}
