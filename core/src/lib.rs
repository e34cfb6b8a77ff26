pub mod catalog;
pub mod session;
pub mod shuffle;

pub use catalog::{grid_side, puzzle, puzzle_by_folder, tile_image_path, PuzzleDef, PUZZLE_CATALOG};
pub use session::{Session, SessionPhase};
pub use shuffle::{shuffle_seed, shuffled_tiles, SHUFFLE_SEED_BASE};
