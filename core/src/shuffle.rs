pub const SHUFFLE_SEED_BASE: u32 = 0x5EED_07E5;

pub fn splitmix32(mut value: u32) -> u32 {
    value = value.wrapping_add(0x9E37_79B9);
    let mut z = value;
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

/// Uniform value in [0, 1) derived from a seed and a per-use salt.
pub fn rand_unit(seed: u32, salt: u32) -> f32 {
    let mixed = splitmix32(seed ^ salt);
    let top = mixed >> 8;
    top as f32 / ((1u32 << 24) as f32)
}

/// Seed for one puzzle load, mixing the session base with a per-load nonce
/// and the tile count so reloads and differently sized boards diverge.
pub fn shuffle_seed(base: u32, nonce: u32, tile_count: u32) -> u32 {
    base ^ nonce.wrapping_mul(0x9E37_79B9) ^ tile_count ^ 0x5CA7_7EED
}

/// Fisher-Yates shuffle of the tile identifiers `1..=tile_count`. Uniform
/// over permutations for a uniform seed; the identity permutation can come
/// up with probability 1/n! and is intentionally not re-rolled.
pub fn shuffled_tiles(seed: u32, tile_count: u32) -> Vec<u32> {
    let mut tiles: Vec<u32> = (1..=tile_count).collect();
    for i in (1..tiles.len()).rev() {
        let salt = 0xC0DE_u32 + i as u32;
        let j = (rand_unit(seed, salt) * (i as f32 + 1.0)) as usize;
        tiles.swap(i, j);
    }
    tiles
}
