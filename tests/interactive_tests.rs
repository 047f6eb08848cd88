// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::sync::Arc;

use interactive_window::backup::BackupStore;
use interactive_window::config::InteractiveConfig;
use interactive_window::error::InteractiveError;
use interactive_window::interactive::mock::{MockEditorHost, MockExecutor};
use interactive_window::interactive::{
    ActiveInteractive, InteractiveWindow, InteractiveWindowState, OpenOptions, ViewColumn,
};
use interactive_window::notebook::{mint_pair, CellKind, CellOutput, DocumentUri, OutputItem};
use proptest::prelude::*;
use tempfile::TempDir;

struct Harness {
    window: InteractiveWindow,
    editor: Arc<MockEditorHost>,
    executor: Arc<MockExecutor>,
}

fn harness_with(config: InteractiveConfig, executor: MockExecutor) -> Harness {
    let editor = Arc::new(MockEditorHost::new());
    let executor = Arc::new(executor);
    let window = InteractiveWindow::new(config, editor.clone(), executor.clone());
    Harness {
        window,
        editor,
        executor,
    }
}

fn harness() -> Harness {
    harness_with(InteractiveConfig::default(), MockExecutor::new())
}

async fn submit(h: &mut Harness, input: &DocumentUri, text: &str) -> Option<usize> {
    h.editor.type_input(input, text);
    h.window.execute(None).await.unwrap()
}

// ==================== Open ====================

#[tokio::test]
async fn test_open_mints_increasing_suffixes() {
    let mut h = harness();
    let (first, first_input) = h.window.open(OpenOptions::default()).await.unwrap();
    let (second, second_input) = h.window.open(OpenOptions::default()).await.unwrap();

    assert_eq!(first.suffix(), Some(1));
    assert_eq!(first_input.suffix(), Some(1));
    assert_eq!(second.suffix(), Some(2));
    assert_eq!(second_input.suffix(), Some(2));

    let opened = h.editor.opened();
    assert_eq!(opened[0].3, "Interactive-1");
    assert_eq!(opened[1].3, "Interactive-2");
}

#[tokio::test]
async fn test_open_reuses_lowest_free_suffix_after_close() {
    let mut h = harness();
    let (first, _) = h.window.open(OpenOptions::default()).await.unwrap();
    h.window.open(OpenOptions::default()).await.unwrap();

    assert!(h.window.close(&first));
    assert!(!h.window.close(&first));

    let (third, _) = h.window.open(OpenOptions::default()).await.unwrap();
    assert_eq!(third.suffix(), Some(1));
}

#[tokio::test]
async fn test_open_existing_resource_reveals() {
    let mut h = harness();
    let (notebook, input) = h.window.open(OpenOptions::default()).await.unwrap();

    let pair = h
        .window
        .open(OpenOptions {
            column: Some(ViewColumn::Index(2)),
            resource: Some(notebook.clone()),
            title: None,
        })
        .await
        .unwrap();

    assert_eq!(pair, (notebook.clone(), input));
    assert_eq!(h.editor.opened().len(), 1);
    assert_eq!(h.editor.revealed(), vec![(notebook, ViewColumn::Index(2))]);
}

#[tokio::test]
async fn test_open_unknown_resource_mints_new_window() {
    let mut h = harness();
    let (notebook, _) = h
        .window
        .open(OpenOptions {
            resource: Some(DocumentUri::interactive(9)),
            title: Some("Scratch".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(notebook, DocumentUri::interactive(1));
    assert_eq!(h.editor.opened()[0].3, "Scratch");
    assert!(h.editor.revealed().is_empty());
}

#[tokio::test]
async fn test_open_uses_configured_column() {
    let config = InteractiveConfig {
        default_column: ViewColumn::Active,
        ..Default::default()
    };
    let mut h = harness_with(config, MockExecutor::new());
    h.window.open(OpenOptions::default()).await.unwrap();
    assert_eq!(h.editor.opened()[0].2, ViewColumn::Active);
}

#[tokio::test]
async fn test_new_session_does_not_inherit_history() {
    let mut h = harness();
    let (notebook, input) = h.window.open(OpenOptions::default()).await.unwrap();
    submit(&mut h, &input, "secret = 1").await;
    assert!(h.window.close(&notebook));

    let (reopened, input) = h.window.open(OpenOptions::default()).await.unwrap();
    assert_eq!(reopened, notebook);
    h.editor.type_input(&input, "");
    assert!(!h.window.history_previous());
}

#[tokio::test]
async fn test_close_forgets_history() {
    let mut h = harness();
    let (notebook, input) = h.window.open(OpenOptions::default()).await.unwrap();
    submit(&mut h, &input, "x = 1").await;
    assert!(h.window.history().history(&notebook).is_some());

    assert!(h.window.close(&notebook));
    assert!(h.window.history().history(&notebook).is_none());
}

// ==================== Execute ====================

#[tokio::test]
async fn test_execute_appends_cell_and_clears_input() {
    let mut h = harness();
    let (notebook, input) = h.window.open(OpenOptions::default()).await.unwrap();

    assert_eq!(submit(&mut h, &input, "x = 1").await, Some(0));
    assert_eq!(submit(&mut h, &input, "print(x)").await, Some(1));

    let doc = h.window.documents().get(&notebook).unwrap();
    assert_eq!(doc.cells.len(), 2);
    assert_eq!(doc.cells[1].kind, CellKind::Code);
    assert_eq!(doc.cells[1].language, "python");
    assert_eq!(doc.cells[1].source, "print(x)");
    assert_eq!(h.editor.text(&input).as_deref(), Some(""));

    let history = h.window.history().history(&notebook).unwrap();
    assert_eq!(history.entries(), &["x = 1", "print(x)"]);

    let executed = h.executor.executed();
    assert_eq!(executed.len(), 2);
    assert_eq!(executed[1], (notebook, 1, "print(x)".to_string()));
}

#[tokio::test]
async fn test_execute_writes_outputs() {
    let output = CellOutput::new("o-1", vec![OutputItem::text("text/plain", "1\n")]);
    let mut h = harness_with(
        InteractiveConfig::default(),
        MockExecutor::new().with_outputs(vec![output.clone()]),
    );
    let (notebook, input) = h.window.open(OpenOptions::default()).await.unwrap();

    submit(&mut h, &input, "print(1)").await;

    let doc = h.window.documents().get(&notebook).unwrap();
    assert_eq!(doc.cells[0].outputs, vec![output]);
}

#[tokio::test]
async fn test_execute_without_auto_run() {
    let config = InteractiveConfig {
        execute_on_submit: false,
        ..Default::default()
    };
    let mut h = harness_with(config, MockExecutor::new());
    let (notebook, input) = h.window.open(OpenOptions::default()).await.unwrap();

    assert_eq!(submit(&mut h, &input, "x").await, Some(0));
    assert!(h.executor.executed().is_empty());
    assert_eq!(h.window.documents().get(&notebook).unwrap().cells.len(), 1);
}

#[tokio::test]
async fn test_execute_reports_executor_failure() {
    let mut h = harness_with(
        InteractiveConfig::default(),
        MockExecutor::new().failing("kernel died"),
    );
    let (notebook, input) = h.window.open(OpenOptions::default()).await.unwrap();
    h.editor.type_input(&input, "1/0");

    let result = h.window.execute(None).await;
    assert!(matches!(result, Err(InteractiveError::Execution(_))));
    // The cell stays in the document even though the run failed.
    assert_eq!(h.window.documents().get(&notebook).unwrap().cells.len(), 1);
}

#[tokio::test]
async fn test_execute_explicit_target() {
    let mut h = harness();
    let (first, first_input) = h.window.open(OpenOptions::default()).await.unwrap();
    let (second, _) = h.window.open(OpenOptions::default()).await.unwrap();

    h.editor.type_input(&first_input, "a = 1");
    assert_eq!(h.window.execute(Some(&first)).await.unwrap(), Some(0));
    assert_eq!(h.window.documents().get(&first).unwrap().cells.len(), 1);
    assert!(h.window.documents().get(&second).unwrap().cells.is_empty());

    let unknown = DocumentUri::interactive(42);
    assert_eq!(h.window.execute(Some(&unknown)).await.unwrap(), None);
}

#[tokio::test]
async fn test_execute_with_closed_document_is_noop() {
    let mut h = harness();
    let (notebook, input) = h.window.open(OpenOptions::default()).await.unwrap();
    h.window.close(&notebook);
    h.editor.set_active(Some(ActiveInteractive {
        notebook: notebook.clone(),
        input: input.clone(),
    }));
    h.editor.type_input(&input, "x");

    assert_eq!(h.window.execute(None).await.unwrap(), None);
    assert_eq!(h.editor.text(&input).as_deref(), Some("x"));
}

// ==================== History navigation ====================

#[tokio::test]
async fn test_history_previous_and_next() {
    let mut h = harness();
    let (_, input) = h.window.open(OpenOptions::default()).await.unwrap();
    submit(&mut h, &input, "a").await;
    submit(&mut h, &input, "b").await;

    assert!(h.window.history_previous());
    assert_eq!(h.editor.text(&input).as_deref(), Some("b"));
    assert!(h.window.history_previous());
    assert_eq!(h.editor.text(&input).as_deref(), Some("a"));
    assert!(!h.window.history_previous());
    assert_eq!(h.editor.text(&input).as_deref(), Some("a"));

    assert!(h.window.history_next());
    assert_eq!(h.editor.text(&input).as_deref(), Some("b"));
    assert!(!h.window.history_next());
    assert_eq!(h.editor.text(&input).as_deref(), Some("b"));
}

#[tokio::test]
async fn test_history_gated_by_cursor_boundary() {
    let mut h = harness();
    let (_, input) = h.window.open(OpenOptions::default()).await.unwrap();
    submit(&mut h, &input, "first\nsecond").await;
    submit(&mut h, &input, "single").await;

    // Cursor on the last line of a three line draft: previous is gated.
    h.editor.type_input(&input, "draft\nmore\nlines");
    assert!(!h.window.history_previous());
    assert_eq!(h.editor.text(&input).as_deref(), Some("draft\nmore\nlines"));

    h.editor.move_cursor(&input, 1);
    assert!(!h.window.history_previous());
    assert!(!h.window.history_next());

    h.editor.move_cursor(&input, 0);
    assert!(h.window.history_previous());
    assert_eq!(h.editor.text(&input).as_deref(), Some("single"));
    assert!(h.window.history_previous());
    assert_eq!(h.editor.text(&input).as_deref(), Some("first\nsecond"));
    assert_eq!(h.editor.cursor(&input), Some(0));

    // Cursor sits on the first of two lines, so next is gated until it moves.
    assert!(!h.window.history_next());
    h.editor.move_cursor(&input, 1);
    assert!(h.window.history_next());
    assert_eq!(h.editor.text(&input).as_deref(), Some("single"));
    assert_eq!(h.editor.cursor(&input), Some(0));
}

#[tokio::test]
async fn test_history_next_moves_cursor_to_last_line() {
    let mut h = harness();
    let (_, input) = h.window.open(OpenOptions::default()).await.unwrap();
    submit(&mut h, &input, "one").await;
    submit(&mut h, &input, "two\nlines").await;
    submit(&mut h, &input, "three").await;

    h.editor.type_input(&input, "");
    assert!(h.window.history_previous());
    assert!(h.window.history_previous());
    assert!(h.window.history_previous());
    assert_eq!(h.editor.text(&input).as_deref(), Some("one"));

    assert!(h.window.history_next());
    assert_eq!(h.editor.text(&input).as_deref(), Some("two\nlines"));
    assert_eq!(h.editor.cursor(&input), Some(1));
}

#[tokio::test]
async fn test_history_without_focus_is_noop() {
    let mut h = harness();
    let (_, input) = h.window.open(OpenOptions::default()).await.unwrap();
    submit(&mut h, &input, "a").await;
    h.editor.set_active(None);

    assert!(!h.window.history_previous());
    assert!(!h.window.history_next());
}

// ==================== Persistence ====================

#[tokio::test]
async fn test_save_never_succeeds() {
    let mut h = harness();
    let (notebook, _) = h.window.open(OpenOptions::default()).await.unwrap();
    assert!(!h.window.save(&notebook));
}

#[tokio::test]
async fn test_persist_and_restore_window() {
    let temp = TempDir::new().unwrap();
    let store = BackupStore::new(temp.path());

    let mut h = harness();
    let (notebook, input) = h.window.open(OpenOptions::default()).await.unwrap();
    submit(&mut h, &input, "x = 41").await;
    submit(&mut h, &input, "x + 1").await;

    let serialized = h.window.serialize_window(&notebook).unwrap().unwrap();
    assert!(h.window.persist_backup(&notebook, &store).await.unwrap().is_some());

    // Fresh process: nothing open yet.
    let mut restarted = harness();
    let pair = restarted
        .window
        .restore_window(&serialized, &store)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(pair, (notebook.clone(), input.clone()));

    let doc = restarted.window.documents().get(&notebook).unwrap();
    let sources: Vec<_> = doc.cells.iter().map(|c| c.source.as_str()).collect();
    assert_eq!(sources, vec!["x = 41", "x + 1"]);

    // Restored windows count as open when minting.
    let (next, _) = restarted.window.open(OpenOptions::default()).await.unwrap();
    assert_eq!(next.suffix(), Some(2));
}

#[tokio::test]
async fn test_restore_window_without_backup_starts_empty() {
    let temp = TempDir::new().unwrap();
    let store = BackupStore::new(temp.path());
    let state = InteractiveWindowState::new(
        DocumentUri::interactive(3),
        DocumentUri::interactive_input(3),
    );

    let mut h = harness();
    let pair = h
        .window
        .restore_window(&state.to_json().unwrap(), &store)
        .await
        .unwrap();

    assert_eq!(pair, Some((state.resource.clone(), state.input_resource.clone())));
    let doc = h.window.documents().get(&state.resource).unwrap();
    assert!(doc.cells.is_empty());
}

#[tokio::test]
async fn test_restore_window_ignores_garbage() {
    let temp = TempDir::new().unwrap();
    let store = BackupStore::new(temp.path());
    let mut h = harness();

    assert_eq!(
        h.window.restore_window("{{nope", &store).await.unwrap(),
        None
    );
    assert!(h.window.documents().is_empty());
}

#[tokio::test]
async fn test_restore_window_with_unreadable_backup_starts_empty() {
    let temp = TempDir::new().unwrap();
    let store = BackupStore::new(temp.path());
    let state = InteractiveWindowState::new(
        DocumentUri::interactive(1),
        DocumentUri::interactive_input(1),
    );
    std::fs::create_dir_all(store.path_for(&state.resource)).unwrap();

    let mut h = harness();
    let pair = h
        .window
        .restore_window(&state.to_json().unwrap(), &store)
        .await
        .unwrap();

    assert_eq!(pair, Some((state.resource.clone(), state.input_resource.clone())));
    let doc = h.window.documents().get(&state.resource).unwrap();
    assert!(doc.cells.is_empty());
    assert!(h.window.window(&state.resource).is_some());
}

#[tokio::test]
async fn test_restore_window_fills_empty_window_opened_first() {
    let temp = TempDir::new().unwrap();
    let store = BackupStore::new(temp.path());

    let mut before = harness();
    let (notebook, input) = before.window.open(OpenOptions::default()).await.unwrap();
    submit(&mut before, &input, "print('kept')").await;
    let serialized = before.window.serialize_window(&notebook).unwrap().unwrap();
    before.window.persist_backup(&notebook, &store).await.unwrap();

    let mut h = harness();
    let (fresh, _) = h.window.open(OpenOptions::default()).await.unwrap();
    assert_eq!(fresh, notebook);

    let pair = h
        .window
        .restore_window(&serialized, &store)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(pair.0, notebook);

    let doc = h.window.documents().get(&notebook).unwrap();
    let sources: Vec<_> = doc.cells.iter().map(|c| c.source.as_str()).collect();
    assert_eq!(sources, vec!["print('kept')"]);
}

#[tokio::test]
async fn test_restore_window_keeps_cells_of_busy_window() {
    let temp = TempDir::new().unwrap();
    let store = BackupStore::new(temp.path());

    let mut before = harness();
    let (notebook, input) = before.window.open(OpenOptions::default()).await.unwrap();
    submit(&mut before, &input, "old").await;
    let serialized = before.window.serialize_window(&notebook).unwrap().unwrap();
    before.window.persist_backup(&notebook, &store).await.unwrap();

    let mut h = harness();
    let (_, fresh_input) = h.window.open(OpenOptions::default()).await.unwrap();
    submit(&mut h, &fresh_input, "new").await;

    h.window.restore_window(&serialized, &store).await.unwrap();

    let doc = h.window.documents().get(&notebook).unwrap();
    let sources: Vec<_> = doc.cells.iter().map(|c| c.source.as_str()).collect();
    assert_eq!(sources, vec!["new"]);
}

#[tokio::test]
async fn test_persist_backup_of_unknown_window() {
    let temp = TempDir::new().unwrap();
    let store = BackupStore::new(temp.path());
    let h = harness();

    let written = h
        .window
        .persist_backup(&DocumentUri::interactive(1), &store)
        .await
        .unwrap();
    assert!(written.is_none());
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_serialize_unknown_window() {
    let h = harness();
    assert_eq!(
        h.window
            .serialize_window(&DocumentUri::interactive(1))
            .unwrap(),
        None
    );
}

// ==================== Minting ====================

proptest! {
    #[test]
    fn prop_minted_suffix_skips_open(used in prop::collection::hash_set(1u32..30, 0..20)) {
        let open: Vec<DocumentUri> = used.iter().map(|n| DocumentUri::interactive(*n)).collect();
        let (notebook, input) = mint_pair(open.iter());
        let n = notebook.suffix().unwrap();

        prop_assert!(!used.contains(&n));
        prop_assert!((1..n).all(|m| used.contains(&m)));
        prop_assert_eq!(input.suffix(), Some(n));
    }

    #[test]
    fn prop_minting_while_open_is_strictly_increasing(count in 1usize..15) {
        let mut open = Vec::new();
        let mut last = 0;
        for _ in 0..count {
            let (notebook, input) = mint_pair(open.iter());
            let n = notebook.suffix().unwrap();
            prop_assert!(n > last);
            last = n;
            open.push(notebook);
            open.push(input);
        }
    }
}
