// Public API exports
pub mod chunker;
pub mod session;

// Re-export main types for convenience
pub use chunker::{
    DEFAULT_CAPACITY, SplitMode, SplitOutcome, Truncation, UnitKind, split_text,
    split_text_with_capacity, unit_count,
};

pub use session::{
    ChunkSession, PanelState, SizeSelection, TextStats, DEFAULT_CHUNK_SIZE, PRESET_CHUNK_SIZES,
};
