pub mod board;
pub mod cache;
pub mod error;
pub mod generator;
pub mod player;
pub mod server;
pub mod solver;
pub mod strategy;

/// board dimension, rows and columns both.
pub const GRID: usize = 16;

/// the fleet, longest first. runs of equal length are
/// exploited by the solver's symmetry breaking, so the
/// ordering is load-bearing.
pub const SHIP_LENGTHS: [usize; 10] = [5, 4, 4, 3, 3, 3, 2, 2, 2, 2];

/// total ship cells on a fully placed board.
pub const FLEET_CELLS: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < SHIP_LENGTHS.len() {
        total += SHIP_LENGTHS[i];
        i += 1;
    }
    total
};

/// how long a move may wait on the solver before the
/// fallback heuristic takes over.
pub const MOVE_TIMEOUT: std::time::Duration = std::time::Duration::from_millis(4_800);

/// backpressure on the solution stream.
pub const SOLUTION_BUFFER: usize = 1_024;

/// a count template is considered hard once this many
/// solutions share it.
pub const MIN_DIFFICULTY: usize = 40_000;

// the fixed template we deal our own fleet from.
pub const SETUP_ROWS: [u8; GRID] = [2, 0, 4, 0, 2, 0, 3, 0, 7, 0, 5, 0, 3, 0, 4, 0];
pub const SETUP_COLS: [u8; GRID] = [1, 1, 2, 2, 2, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1];

/// trait for random generation, mainly (strictly?) for testing
pub trait Arbitrary {
    fn random() -> Self;
}

/// initialize logging
pub fn init() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
