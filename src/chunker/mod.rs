mod splitter;


pub use splitter::{
    SplitMode, SplitOutcome, Truncation, UnitKind, split_text, split_text_with_capacity,
    unit_count,
};

/// Maximum total units (characters or words) chunked in one invocation
///
/// Bounds the chunk count at `DEFAULT_CAPACITY / size` no matter how long
/// the input is. Only binding for pathologically small sizes against very
/// large inputs; a safety valve, not a typical code path.
pub const DEFAULT_CAPACITY: u64 = u32::MAX as u64;
