mod state;

#[cfg(test)]
mod tests;

pub use state::{ChunkSession, PanelState, SizeSelection, TextStats};

/// Preset sizes offered by the chunk-size menu
pub const PRESET_CHUNK_SIZES: [usize; 8] = [
    15_000, 20_000, 25_000, 30_000, 35_000, 40_000, 45_000, 50_000,
];

/// Chunk size selected before the user picks anything
pub const DEFAULT_CHUNK_SIZE: usize = 50_000;
