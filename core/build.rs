use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Deserialize)]
struct CatalogFile {
    puzzles: Vec<PuzzleEntry>,
}

#[derive(Deserialize)]
struct PuzzleEntry {
    folder: String,
    letter: String,
    tiles: u32,
}

fn main() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);

    println!("cargo:rerun-if-env-changed=PUZZLE_CATALOG_PATH");

    let catalog_path = resolve_catalog_path(workspace_root);
    println!("cargo:rerun-if-changed={}", catalog_path.display());

    let contents = fs::read_to_string(&catalog_path).unwrap_or_else(|err| {
        panic!(
            "failed to read puzzle catalog at {}: {err}",
            catalog_path.display()
        )
    });

    let catalog: CatalogFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse puzzle catalog at {}: {err}",
            catalog_path.display()
        )
    });

    if catalog.puzzles.is_empty() {
        panic!("puzzle catalog {} has no entries", catalog_path.display());
    }

    validate_entries(&catalog.puzzles, &catalog_path);

    let mut output = String::new();
    writeln!(&mut output, "pub const PUZZLE_CATALOG: &[PuzzleDef] = &[").unwrap();
    for entry in &catalog.puzzles {
        let letter = entry.letter.chars().next().unwrap();
        writeln!(&mut output, "    PuzzleDef {{").unwrap();
        writeln!(
            &mut output,
            "        folder: {},",
            rust_string(&entry.folder)
        )
        .unwrap();
        writeln!(&mut output, "        letter: {:?},", letter).unwrap();
        writeln!(&mut output, "        tile_count: {},", entry.tiles).unwrap();
        writeln!(&mut output, "    }},").unwrap();
    }
    writeln!(&mut output, "];").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("puzzle_catalog.rs");
    fs::write(&out_path, output)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_path.display()));
}

fn resolve_catalog_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("PUZZLE_CATALOG_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("puzzles/catalog.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn is_perfect_square(tiles: u32) -> bool {
    let side = (tiles as f64).sqrt().round() as u32;
    side * side == tiles
}

fn validate_entries(entries: &[PuzzleEntry], catalog_path: &Path) {
    let mut folders = HashSet::new();

    for entry in entries {
        if entry.folder.trim().is_empty() {
            panic!("puzzle folder cannot be empty in {}", catalog_path.display());
        }
        if entry.folder.contains('/') || entry.folder.contains('\\') {
            panic!(
                "puzzle folder '{}' must be a bare directory name in {}",
                entry.folder,
                catalog_path.display()
            );
        }
        if entry.letter.chars().count() != 1 {
            panic!(
                "puzzle '{}' reward letter must be a single character in {}",
                entry.folder,
                catalog_path.display()
            );
        }
        if entry.tiles < 4 || !is_perfect_square(entry.tiles) {
            panic!(
                "puzzle '{}' tile count {} is not a perfect square of at least 4 in {}",
                entry.folder,
                entry.tiles,
                catalog_path.display()
            );
        }
        if !folders.insert(entry.folder.clone()) {
            panic!(
                "duplicate puzzle folder '{}' in {}",
                entry.folder,
                catalog_path.display()
            );
        }
    }
}
