pub mod coord;
pub mod counts;
pub mod field;
pub mod ship;
pub mod shot;

pub use coord::Coord;
pub use counts::Counts;
pub use field::Field;
pub use ship::Dir;
pub use ship::Ship;
pub use shot::Shot;
