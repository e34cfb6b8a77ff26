use crate::catalog::{PuzzleDef, PUZZLE_CATALOG};
use crate::shuffle::{shuffle_seed, shuffled_tiles, SHUFFLE_SEED_BASE};

/// Where one playthrough currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    Playing,
    Finished,
}

/// One playthrough of the puzzle sequence. All session fields live in this
/// single value with one writer; operations mutate it synchronously and
/// re-derive the solved flag themselves, so nothing can drift out of sync.
///
/// The presentation layer only ever hands in indices taken from the rendered
/// grid, so out-of-range arguments are programming defects. Operations guard
/// them with a debug assertion and a no-op rather than corrupting the board.
#[derive(Clone, Debug)]
pub struct Session {
    catalog: &'static [PuzzleDef],
    seed_base: u32,
    shuffle_nonce: u32,
    started: bool,
    current_puzzle: usize,
    arrangement: Vec<u32>,
    selected_tile: Option<usize>,
    solved: bool,
    letter_awarded: bool,
    collected_letters: Vec<char>,
    elapsed_seconds: u64,
    game_over: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::with_catalog(PUZZLE_CATALOG, SHUFFLE_SEED_BASE)
    }

    /// Session over an explicit catalog with a caller-chosen seed base. The
    /// shell passes wall-clock entropy here so every playthrough shuffles
    /// differently; tests pass a fixed base for determinism.
    pub fn with_catalog(catalog: &'static [PuzzleDef], seed_base: u32) -> Self {
        Self {
            catalog,
            seed_base,
            shuffle_nonce: 0,
            started: false,
            current_puzzle: 0,
            arrangement: Vec::new(),
            selected_tile: None,
            solved: false,
            letter_awarded: false,
            collected_letters: Vec::new(),
            elapsed_seconds: 0,
            game_over: false,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.game_over {
            SessionPhase::Finished
        } else if self.started {
            SessionPhase::Playing
        } else {
            SessionPhase::NotStarted
        }
    }

    /// Leaves the landing screen and loads the first puzzle. Calling it on a
    /// session that is already running is a no-op.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.load_puzzle(0);
    }

    /// Replaces the board with a fresh shuffle of the given puzzle's tiles
    /// and clears the per-puzzle flags. An index outside the catalog is a
    /// defect; the board is left untouched.
    pub fn load_puzzle(&mut self, index: usize) {
        debug_assert!(index < self.catalog.len(), "puzzle index out of catalog");
        let Some(def) = self.catalog.get(index) else {
            return;
        };
        self.shuffle_nonce = self.shuffle_nonce.wrapping_add(1);
        let seed = shuffle_seed(self.seed_base, self.shuffle_nonce, def.tile_count);
        self.current_puzzle = index;
        self.arrangement = shuffled_tiles(seed, def.tile_count);
        self.solved = false;
        self.letter_awarded = false;
        self.selected_tile = None;
    }

    /// Exchanges two tiles and re-evaluates completion. A self-swap or an
    /// out-of-range index never mutates anything. Returns whether the board
    /// changed.
    pub fn request_swap(&mut self, from: usize, to: usize) -> bool {
        if self.game_over || from == to {
            return false;
        }
        if from >= self.arrangement.len() || to >= self.arrangement.len() {
            debug_assert!(false, "swap index out of grid");
            return false;
        }
        self.arrangement.swap(from, to);
        self.evaluate_completion();
        true
    }

    /// Arms a tile for the tap interaction mode. At most one tile is armed.
    pub fn arm_selection(&mut self, index: usize) {
        if index < self.arrangement.len() {
            self.selected_tile = Some(index);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_tile = None;
    }

    /// Tap protocol: first tap arms a tile, second tap swaps it with the
    /// tapped one and disarms. Tapping the armed tile again just deselects,
    /// because a self-swap is already a no-op.
    pub fn tap_tile(&mut self, index: usize) {
        match self.selected_tile.take() {
            None => self.arm_selection(index),
            Some(armed) => {
                self.request_swap(armed, index);
            }
        }
    }

    /// Moves on from a solved puzzle: either the next board loads, or the
    /// session finishes after the last one. Without `solved` this is a
    /// no-op; the shell only shows the control once the board is solved.
    pub fn advance(&mut self) -> bool {
        if !self.solved || self.game_over {
            return false;
        }
        if self.current_puzzle + 1 < self.catalog.len() {
            self.load_puzzle(self.current_puzzle + 1);
        } else {
            self.game_over = true;
        }
        true
    }

    /// The shell owns the one-second timer and reports elapsed wall-clock
    /// seconds here. Monotonic: a stale report never winds the clock back,
    /// and nothing moves once the session is over.
    pub fn record_elapsed(&mut self, seconds: u64) {
        if !self.started || self.game_over {
            return;
        }
        self.elapsed_seconds = self.elapsed_seconds.max(seconds);
    }

    fn evaluate_completion(&mut self) {
        self.solved = self
            .arrangement
            .iter()
            .enumerate()
            .all(|(slot, id)| *id == slot as u32 + 1);
        // First solve of this load earns the letter; disturbing the board
        // afterwards never takes it back.
        if self.solved && !self.letter_awarded {
            self.letter_awarded = true;
            if let Some(def) = self.catalog.get(self.current_puzzle) {
                self.collected_letters.push(def.letter);
            }
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn solved(&self) -> bool {
        self.solved
    }

    pub fn current_index(&self) -> usize {
        self.current_puzzle
    }

    pub fn current_puzzle(&self) -> Option<&'static PuzzleDef> {
        self.catalog.get(self.current_puzzle)
    }

    pub fn puzzle_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_last_puzzle(&self) -> bool {
        self.current_puzzle + 1 == self.catalog.len()
    }

    pub fn arrangement(&self) -> &[u32] {
        &self.arrangement
    }

    pub fn selected_tile(&self) -> Option<usize> {
        self.selected_tile
    }

    pub fn collected_letters(&self) -> &[char] {
        &self.collected_letters
    }

    /// Concatenation of the earned letters in catalog order.
    pub fn collected_word(&self) -> String {
        self.collected_letters.iter().collect()
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
