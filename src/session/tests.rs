use super::*;
use crate::chunker::SplitMode;

#[test]
fn test_new_session_uses_default_preset() {
    let session = ChunkSession::new();
    assert_eq!(session.effective_size(), Some(DEFAULT_CHUNK_SIZE));
    assert!(session.chunks().is_empty());
}

#[test]
fn test_set_text_rechunks_immediately() {
    let mut session = ChunkSession::new();
    session.select_preset(3);
    session.set_text("abcdef");

    assert_eq!(session.chunks(), ["abc", "def"]);
}

#[test]
fn test_clear_drops_chunks() {
    let mut session = ChunkSession::new();
    session.select_preset(3);
    session.set_text("abcdef");
    session.clear();

    assert!(session.chunks().is_empty());
    assert_eq!(session.text(), "");
}

#[test]
fn test_mode_switch_regroups() {
    let mut session = ChunkSession::new();
    session.select_preset(2);
    session.set_text("one two three four");
    session.set_mode(SplitMode::Word);

    assert_eq!(session.chunks(), ["one two", "three four"]);
}

#[test]
fn test_custom_selection_clears_chunks_until_submit() {
    let mut session = ChunkSession::new();
    session.select_preset(3);
    session.set_text("abcdef");
    assert_eq!(session.chunks().len(), 2);

    session.select_custom();
    assert_eq!(session.effective_size(), None);
    assert!(session.chunks().is_empty());

    // Typing a value is still not enough
    session.set_custom_entry(Some(2));
    assert_eq!(session.effective_size(), None);
    assert!(session.chunks().is_empty());

    session.submit_custom();
    assert_eq!(session.effective_size(), Some(2));
    assert_eq!(session.chunks(), ["ab", "cd", "ef"]);
}

#[test]
fn test_submit_is_inert_without_entry_or_text() {
    let mut session = ChunkSession::new();
    session.select_custom();
    session.submit_custom();
    assert_eq!(session.effective_size(), None);

    // Entry present but no text
    session.set_custom_entry(Some(4));
    session.submit_custom();
    assert_eq!(session.effective_size(), None);
}

#[test]
fn test_reentering_custom_entry_resets_submission() {
    let mut session = ChunkSession::new();
    session.set_text("abcdef");
    session.select_custom();
    session.set_custom_entry(Some(2));
    session.submit_custom();
    assert_eq!(session.chunks().len(), 3);

    // Editing the field again deactivates the old size
    session.set_custom_entry(Some(3));
    assert_eq!(session.effective_size(), None);
    assert!(session.chunks().is_empty());
}

#[test]
fn test_panels_start_expanded_and_uncopied() {
    let mut session = ChunkSession::new();
    session.select_preset(3);
    session.set_text("abcdef");

    for index in 0..session.chunks().len() {
        let panel = session.panel(index).unwrap();
        assert!(panel.expanded);
        assert!(!panel.copied);
    }
}

#[test]
fn test_mark_copied_collapses_and_flags() {
    let mut session = ChunkSession::new();
    session.select_preset(3);
    session.set_text("abcdef");

    let payload = session.mark_copied(0);
    assert_eq!(payload, Some("abc"));

    let panel = session.panel(0).unwrap();
    assert!(panel.copied);
    assert!(!panel.expanded);
}

#[test]
fn test_reopening_a_panel_clears_copied() {
    let mut session = ChunkSession::new();
    session.select_preset(3);
    session.set_text("abcdef");
    session.mark_copied(1);

    session.toggle_panel(1);

    let panel = session.panel(1).unwrap();
    assert!(panel.expanded);
    assert!(!panel.copied);
}

#[test]
fn test_panel_flags_reset_on_recompute() {
    let mut session = ChunkSession::new();
    session.select_preset(3);
    session.set_text("abcdef");
    session.mark_copied(0);

    session.set_text("ghijkl");

    let panel = session.panel(0).unwrap();
    assert!(panel.expanded);
    assert!(!panel.copied);
}

#[test]
fn test_out_of_range_panel_ops_are_ignored() {
    let mut session = ChunkSession::new();
    session.select_preset(3);
    session.set_text("abc");

    assert_eq!(session.mark_copied(5), None);
    session.toggle_panel(5);
    assert_eq!(session.panel(5), None);
}

#[test]
fn test_chunk_labels() {
    let mut session = ChunkSession::new();
    session.select_preset(2);
    session.set_text("abcdef");

    assert_eq!(session.chunk_label(0), "Chunk 1 of 3");
    assert_eq!(session.chunk_label(2), "Chunk 3 of 3");
}

#[test]
fn test_projected_chunk_count_rounds_up() {
    let mut session = ChunkSession::new();
    session.set_text("abcdefg");
    session.select_custom();
    session.set_custom_entry(Some(3));

    assert_eq!(session.projected_chunk_count(), Some(3));

    session.set_custom_entry(None);
    assert_eq!(session.projected_chunk_count(), None);
}

#[test]
fn test_stats_track_both_unit_kinds() {
    let mut session = ChunkSession::new();
    session.set_text("  a \t b  ");

    let stats = session.stats();
    assert_eq!(stats.characters, 9);
    assert_eq!(stats.words, 2);
}
