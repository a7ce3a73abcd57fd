use serde::{Deserialize, Serialize};

use super::DEFAULT_CAPACITY;

/// Unit counted when sizing chunks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// Fixed runs of Unicode scalar values
    Character,
    /// Fixed groups of whitespace-delimited words
    Word,
}

impl SplitMode {
    /// The unit a truncation record reports for this mode
    pub fn unit_kind(self) -> UnitKind {
        match self {
            SplitMode::Character => UnitKind::Characters,
            SplitMode::Word => UnitKind::Words,
        }
    }
}

/// Kind of unit dropped at the capacity ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Characters,
    Words,
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitKind::Characters => write!(f, "characters"),
            UnitKind::Words => write!(f, "words"),
        }
    }
}

/// Record of trailing units dropped at the capacity ceiling
///
/// Carried as a tagged record next to the chunk list, never as a warning
/// string appended to it, so consumers can always tell it apart from chunk
/// content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Truncation {
    /// Number of trailing units that were not chunked
    pub dropped: u64,
    /// Kind of unit dropped
    pub unit: UnitKind,
}

impl Truncation {
    /// Human-readable warning line for display layers
    pub fn notice(&self) -> String {
        format!(
            "Warning: {} {} were not included due to chunk capacity limits.",
            self.dropped, self.unit
        )
    }
}

/// Ordered chunks plus an optional truncation record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitOutcome {
    /// Chunks in left-to-right input order
    pub chunks: Vec<String>,
    /// Present when trailing units were dropped at the capacity ceiling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncation: Option<Truncation>,
}

impl SplitOutcome {
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

/// Split `text` into consecutive chunks of at most `size` units
///
/// `size == 0` and empty input are defined no-ops yielding an empty
/// outcome, not errors: a half-typed custom size means there is nothing to
/// compute yet. Word mode splits on whitespace runs and rejoins each group
/// with single spaces, which is intentionally lossy with respect to the
/// original spacing.
pub fn split_text(text: &str, mode: SplitMode, size: usize) -> SplitOutcome {
    split_text_with_capacity(text, mode, size, DEFAULT_CAPACITY)
}

/// Same as [`split_text`] with an explicit unit capacity
///
/// At most `capacity / size` chunks are produced; anything beyond that is
/// reported in the truncation record. The capacity parameter exists so the
/// truncation path can be exercised without gigabyte-scale inputs.
pub fn split_text_with_capacity(
    text: &str,
    mode: SplitMode,
    size: usize,
    capacity: u64,
) -> SplitOutcome {
    if size == 0 || text.is_empty() {
        return SplitOutcome::default();
    }

    let max_chunks = capacity / size as u64;

    let (chunks, total_units) = match mode {
        SplitMode::Character => (
            split_characters(text, size, max_chunks),
            text.chars().count() as u64,
        ),
        SplitMode::Word => {
            let words: Vec<&str> = text.split_whitespace().collect();
            let total = words.len() as u64;
            (group_words(&words, size, max_chunks), total)
        }
    };

    // max_chunks * size <= capacity, so the product cannot overflow.
    let chunked_budget = size as u64 * max_chunks;
    let truncation = if total_units > chunked_budget {
        Some(Truncation {
            dropped: total_units - chunked_budget,
            unit: mode.unit_kind(),
        })
    } else {
        None
    };

    SplitOutcome { chunks, truncation }
}

/// Total units in `text` under `mode`
///
/// Characters are Unicode scalar values; words are whitespace-delimited
/// tokens with empty tokens dropped. Display layers count through here so
/// their numbers always agree with truncation accounting.
pub fn unit_count(text: &str, mode: SplitMode) -> u64 {
    match mode {
        SplitMode::Character => text.chars().count() as u64,
        SplitMode::Word => text.split_whitespace().count() as u64,
    }
}

/// Consecutive runs of `size` characters, stopping at `max_chunks`
fn split_characters(text: &str, size: usize, max_chunks: u64) -> Vec<String> {
    if max_chunks == 0 {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut filled = 0;

    for ch in text.chars() {
        current.push(ch);
        filled += 1;

        if filled == size {
            chunks.push(std::mem::take(&mut current));
            filled = 0;

            if chunks.len() as u64 >= max_chunks {
                return chunks;
            }
        }
    }

    // Trailing partial chunk
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Groups of `size` words rejoined with single spaces, stopping at `max_chunks`
fn group_words(words: &[&str], size: usize, max_chunks: u64) -> Vec<String> {
    let limit = usize::try_from(max_chunks).unwrap_or(usize::MAX);

    words
        .chunks(size)
        .take(limit)
        .map(|group| group.join(" "))
        .collect()
}
