/// One fixed puzzle in the sequence: an asset folder holding numbered tile
/// images, the letter the player earns for solving it, and the tile count
/// (always a perfect square so the board renders as an N x N grid).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PuzzleDef {
    pub folder: &'static str,
    pub letter: char,
    pub tile_count: u32,
}

// PUZZLE_CATALOG is generated by build.rs from puzzles/catalog.toml. Entry
// order is significant: reward letters concatenate in catalog order.
include!(concat!(env!("OUT_DIR"), "/puzzle_catalog.rs"));

pub fn puzzle(index: usize) -> Option<&'static PuzzleDef> {
    PUZZLE_CATALOG.get(index)
}

pub fn puzzle_by_folder(folder: &str) -> Option<&'static PuzzleDef> {
    let trimmed = folder.trim();
    PUZZLE_CATALOG
        .iter()
        .find(|entry| entry.folder.eq_ignore_ascii_case(trimmed))
}

/// Side length of the square grid for a tile count. The catalog guarantees
/// perfect squares at build time; a non-square count here is a defect.
pub fn grid_side(tile_count: u32) -> u32 {
    let side = (tile_count as f64).sqrt().round() as u32;
    debug_assert_eq!(side * side, tile_count, "tile count is not a perfect square");
    side
}

/// Relative image path for one tile. Tiles are numbered from 1 in reading
/// order; the core never loads or validates the image itself.
pub fn tile_image_path(folder: &str, tile_id: u32) -> String {
    format!("images/{folder}/{tile_id}.png")
}
