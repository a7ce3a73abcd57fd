use serde::{Deserialize, Serialize};

use crate::chunker::{self, SplitMode, SplitOutcome, Truncation};

use super::DEFAULT_CHUNK_SIZE;

/// How the chunk size is currently chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSelection {
    /// One of the preset menu sizes
    Preset(usize),
    /// User-entered size, inert until submitted
    Custom {
        /// In-progress entry, `None` while the field is blank or unparsable
        entry: Option<usize>,
        /// Whether the entry has been activated
        submitted: bool,
    },
}

/// Per-chunk display flags, keyed by chunk index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelState {
    /// Chunk body is shown
    pub expanded: bool,
    /// Chunk content was handed to the clipboard collaborator
    pub copied: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            expanded: true,
            copied: false,
        }
    }
}

/// Input statistics shown alongside the chunk list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub characters: usize,
    pub words: usize,
}

/// Headless state model for one chunking surface
///
/// Owns the input text, the mode and size selections, the latest outcome,
/// and the per-chunk display flags the front-end renders. Every
/// input-changing call recomputes the outcome from scratch; the core has
/// no observer mechanism and nothing is cached between calls.
pub struct ChunkSession {
    text: String,
    mode: SplitMode,
    selection: SizeSelection,
    outcome: SplitOutcome,
    panels: Vec<PanelState>,
}

impl ChunkSession {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            mode: SplitMode::Character,
            selection: SizeSelection::Preset(DEFAULT_CHUNK_SIZE),
            outcome: SplitOutcome::default(),
            panels: Vec::new(),
        }
    }

    /// Replace the input text (typed or pasted) and rechunk
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.recompute();
    }

    /// Drop the input text and every chunk with it
    pub fn clear(&mut self) {
        self.text.clear();
        self.recompute();
    }

    pub fn set_mode(&mut self, mode: SplitMode) {
        self.mode = mode;
        self.recompute();
    }

    /// Choose a preset size; takes effect immediately
    pub fn select_preset(&mut self, size: usize) {
        self.selection = SizeSelection::Preset(size);
        self.recompute();
    }

    /// Switch to custom entry; chunks clear until a size is submitted
    pub fn select_custom(&mut self) {
        self.selection = SizeSelection::Custom {
            entry: None,
            submitted: false,
        };
        self.recompute();
    }

    /// Record the in-progress custom entry without activating it
    pub fn set_custom_entry(&mut self, entry: Option<usize>) {
        if let SizeSelection::Custom { .. } = self.selection {
            self.selection = SizeSelection::Custom {
                entry,
                submitted: false,
            };
            self.recompute();
        }
    }

    /// Activate the custom entry; inert while the entry or the text is empty
    pub fn submit_custom(&mut self) {
        if let SizeSelection::Custom {
            entry: Some(size), ..
        } = self.selection
        {
            if !self.text.is_empty() {
                self.selection = SizeSelection::Custom {
                    entry: Some(size),
                    submitted: true,
                };
                self.recompute();
            }
        }
    }

    /// The size the chunker will be called with, if any
    pub fn effective_size(&self) -> Option<usize> {
        match self.selection {
            SizeSelection::Preset(size) => Some(size),
            SizeSelection::Custom {
                entry,
                submitted: true,
            } => entry,
            SizeSelection::Custom { .. } => None,
        }
    }

    fn recompute(&mut self) {
        self.outcome = match self.effective_size() {
            Some(size) => chunker::split_text(&self.text, self.mode, size),
            None => SplitOutcome::default(),
        };
        // Fresh outcome: every panel open, nothing marked copied
        self.panels = vec![PanelState::default(); self.outcome.len()];
    }

    /// Flip a panel open or closed; re-opening clears its copied flag
    pub fn toggle_panel(&mut self, index: usize) {
        if let Some(panel) = self.panels.get_mut(index) {
            panel.expanded = !panel.expanded;
            if panel.expanded {
                panel.copied = false;
            }
        }
    }

    /// Hand a chunk's full content to the clipboard collaborator
    ///
    /// Marks the panel copied and collapses it. The session performs no
    /// I/O; the caller owns the actual clipboard write.
    pub fn mark_copied(&mut self, index: usize) -> Option<&str> {
        let panel = self.panels.get_mut(index)?;
        panel.copied = true;
        panel.expanded = false;
        self.outcome.chunks.get(index).map(String::as_str)
    }

    /// Panel label, e.g. "Chunk 2 of 5"
    pub fn chunk_label(&self, index: usize) -> String {
        format!("Chunk {} of {}", index + 1, self.outcome.len())
    }

    /// Chunk count preview for the currently entered size
    pub fn projected_chunk_count(&self) -> Option<u64> {
        let size = match self.selection {
            SizeSelection::Preset(size) => size,
            SizeSelection::Custom {
                entry: Some(size), ..
            } => size,
            SizeSelection::Custom { entry: None, .. } => return None,
        };

        if size == 0 || self.text.is_empty() {
            return None;
        }

        let units = chunker::unit_count(&self.text, self.mode);
        Some(units.div_ceil(size as u64))
    }

    pub fn stats(&self) -> TextStats {
        TextStats {
            characters: chunker::unit_count(&self.text, SplitMode::Character) as usize,
            words: chunker::unit_count(&self.text, SplitMode::Word) as usize,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> SplitMode {
        self.mode
    }

    pub fn selection(&self) -> SizeSelection {
        self.selection
    }

    pub fn chunks(&self) -> &[String] {
        &self.outcome.chunks
    }

    pub fn truncation(&self) -> Option<&Truncation> {
        self.outcome.truncation.as_ref()
    }

    pub fn panel(&self, index: usize) -> Option<PanelState> {
        self.panels.get(index).copied()
    }
}

impl Default for ChunkSession {
    fn default() -> Self {
        Self::new()
    }
}
