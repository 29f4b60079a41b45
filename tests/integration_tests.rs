//! Integration tests for the full load / reconcile / edit lifecycle

use gridmark::{
    add_column_to_focused, add_row_to_focused, app_data_to_markdown, find_app_data,
    insert_empty_table, load_document, load_table, migrate_settings, parse_markdown_table,
    update_from_saved_state, validate, ColumnType, Error, Settings, SortOrder, ViewMode,
};

fn table_markup() -> &'static str {
    "\
| <!--gm:tbl:9f2c11ab-->Item | Amount |
| --- | --- |
| text | number |
| <!--gm:col:0ab4c9d2--> | <!--gm:col:77ee01b3--> |
| <!--gm:row:41d2f0aa-->apples | 12 |
| <!--gm:row:5be80c1d-->pears | 7 |
"
}

// ============================================================================
// Load Lifecycle
// ============================================================================

mod lifecycle {
    use super::*;

    #[test]
    fn test_first_load_creates_state() {
        let mut settings = Settings::default();
        let loaded =
            load_table(&mut settings, table_markup(), "a.md", ViewMode::LivePreview).unwrap();

        assert_eq!(loaded.table_id, "9f2c11ab");
        assert!(loaded.data.is_complete_grid());
        assert_eq!(loaded.data.columns[1].column_type, ColumnType::Number);

        let entry = settings.load_state("a.md", "9f2c11ab").unwrap();
        assert_eq!(entry.data, loaded.data);
        assert_eq!(entry.view_mode, ViewMode::LivePreview);
        assert!(!entry.should_update);
    }

    #[test]
    fn test_insert_then_grow_through_commands() {
        let mut settings = Settings::default();
        let markup = insert_empty_table();
        let loaded = load_table(&mut settings, &markup, "a.md", ViewMode::LivePreview).unwrap();
        assert!(loaded.data.rows.is_empty());

        let with_row = add_row_to_focused(&mut settings, Some(&loaded.focus)).unwrap();
        assert_eq!(with_row.rows.len(), 1);
        let with_col = add_column_to_focused(&mut settings, Some(&loaded.focus)).unwrap();
        assert_eq!(with_col.columns.len(), 2);
        assert_eq!(with_col.rows.len(), 1, "edits compound on persisted state");
        assert!(with_col.is_complete_grid());

        // Emitted markup for the grown table loads back identically
        let markup = app_data_to_markdown(&loaded.table_id, &with_col);
        let reloaded = load_table(&mut settings, &markup, "a.md", ViewMode::LivePreview).unwrap();
        assert_eq!(reloaded.data, with_col);
    }

    #[test]
    fn test_structural_edit_without_focus_is_a_reported_noop() {
        let mut settings = Settings::default();
        load_table(&mut settings, table_markup(), "a.md", ViewMode::LivePreview).unwrap();
        let before = settings.clone();

        let err = add_row_to_focused(&mut settings, None).unwrap_err();
        assert_eq!(err, Error::MissingFocus);
        assert!(err.to_string().contains("No table focused"));
        assert_eq!(settings, before);
    }

    #[test]
    fn test_document_with_malformed_table_keeps_the_valid_one() {
        let document = format!(
            "# Inventory\n\n{}\n\n| Plain | Table |\n| --- | --- |\n| not | gridmark |\n",
            table_markup()
        );
        let mut settings = Settings::default();
        let results = load_document(&mut settings, &document, "a.md", ViewMode::Reading);

        assert_eq!(results.len(), 2);
        assert!(results[0].1.is_ok());
        let err = results[1].1.as_ref().unwrap_err();
        assert!(err.is_malformed());
        // Only the valid table reached the store
        assert_eq!(settings.state["a.md"].len(), 1);
    }
}

// ============================================================================
// Reconciliation
// ============================================================================

mod reconciliation {
    use super::*;

    /// Persisted state holds a typed column and one row; the markup is
    /// re-parsed showing the same ids plus a hand-added empty row.
    #[test]
    fn test_hand_added_row_scenario() {
        let mut settings = Settings::default();
        let markup_v1 = "\
| <!--gm:tbl:9f2c11ab-->Amount |
| --- |
| number |
| <!--gm:col:c1--> |
| <!--gm:row:r1-->12 |
";
        let loaded = load_table(&mut settings, markup_v1, "a.md", ViewMode::LivePreview).unwrap();

        // Host-side metadata the markup cannot express
        let mut data = loaded.data.clone();
        data.columns[0].sort_order = SortOrder::Ascending;
        data.columns[0].width = Some(120);
        settings.save_state("a.md", "9f2c11ab", data, ViewMode::LivePreview, false);

        let markup_v2 = "\
| <!--gm:tbl:9f2c11ab-->Amount |
| --- |
| number |
| <!--gm:col:c1--> |
| <!--gm:row:r1-->12 |
| <!--gm:row:r2--> |
";
        let merged = load_table(&mut settings, markup_v2, "a.md", ViewMode::LivePreview)
            .unwrap()
            .data;

        let ids: Vec<&str> = merged.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2"]);
        assert_eq!(merged.columns[0].column_type, ColumnType::Number);
        assert_eq!(merged.columns[0].sort_order, SortOrder::Ascending);
        assert_eq!(merged.columns[0].width, Some(120));
        assert_eq!(merged.cell("r1", "c1").unwrap().content, "12");
        assert_eq!(merged.cell("r2", "c1").unwrap().content, "");
    }

    #[test]
    fn test_external_row_reorder_is_honored() {
        let mut settings = Settings::default();
        load_table(&mut settings, table_markup(), "a.md", ViewMode::LivePreview).unwrap();

        let reordered = "\
| <!--gm:tbl:9f2c11ab-->Item | Amount |
| --- | --- |
| text | number |
| <!--gm:col:0ab4c9d2--> | <!--gm:col:77ee01b3--> |
| <!--gm:row:5be80c1d-->pears | 7 |
| <!--gm:row:41d2f0aa-->apples | 12 |
";
        let merged = load_table(&mut settings, reordered, "a.md", ViewMode::LivePreview)
            .unwrap()
            .data;
        let ids: Vec<&str> = merged.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["5be80c1d", "41d2f0aa"]);
        assert_eq!(merged.rows[0].order, 0);
    }

    #[test]
    fn test_deleted_column_metadata_is_not_resurrected() {
        let mut settings = Settings::default();
        let loaded =
            load_table(&mut settings, table_markup(), "a.md", ViewMode::LivePreview).unwrap();

        let mut data = loaded.data.clone();
        data.columns[1].width = Some(200);
        settings.save_state("a.md", "9f2c11ab", data, ViewMode::LivePreview, false);

        // External edit deleted the Amount column entirely
        let narrowed = "\
| <!--gm:tbl:9f2c11ab-->Item |
| --- |
| text |
| <!--gm:col:0ab4c9d2--> |
| <!--gm:row:41d2f0aa-->apples |
| <!--gm:row:5be80c1d-->pears |
";
        let merged = load_table(&mut settings, narrowed, "a.md", ViewMode::LivePreview)
            .unwrap()
            .data;
        assert_eq!(merged.columns.len(), 1);
        assert!(merged.column("77ee01b3").is_none());

        // Re-adding the column id by hand starts from defaults
        let merged = load_table(&mut settings, table_markup(), "a.md", ViewMode::LivePreview)
            .unwrap()
            .data;
        assert_eq!(merged.column("77ee01b3").unwrap().width, None);
    }

    #[test]
    fn test_merge_idempotence_over_load_boundary() {
        let mut settings = Settings::default();
        load_table(&mut settings, table_markup(), "a.md", ViewMode::LivePreview).unwrap();
        let once = settings.load_state("a.md", "9f2c11ab").unwrap().data.clone();

        load_table(&mut settings, table_markup(), "a.md", ViewMode::LivePreview).unwrap();
        let twice = settings.load_state("a.md", "9f2c11ab").unwrap().data.clone();
        assert_eq!(once, twice);

        // And directly over the merge function
        let parsed = find_app_data(&parse_markdown_table(table_markup()));
        let merged = update_from_saved_state(&once, &parsed).unwrap();
        assert_eq!(merged, update_from_saved_state(&merged, &parsed).unwrap());
    }
}

// ============================================================================
// Persistence, Rename, Migration
// ============================================================================

mod persistence {
    use super::*;

    #[test]
    fn test_rename_relocates_and_old_path_is_absent() {
        let mut settings = Settings::default();
        load_table(&mut settings, table_markup(), "a.md", ViewMode::LivePreview).unwrap();

        assert!(settings.on_path_renamed("a.md", "b.md"));
        assert!(settings.load_state("a.md", "9f2c11ab").is_none());
        let entry = settings.load_state("b.md", "9f2c11ab").unwrap();
        assert_eq!(entry.data.rows.len(), 2);
    }

    #[test]
    fn test_reload_under_new_path_after_rename_merges() {
        let mut settings = Settings::default();
        let loaded =
            load_table(&mut settings, table_markup(), "a.md", ViewMode::LivePreview).unwrap();

        let mut data = loaded.data.clone();
        data.columns[0].width = Some(90);
        settings.save_state("a.md", "9f2c11ab", data, ViewMode::LivePreview, false);

        settings.on_path_renamed("a.md", "b.md");
        let merged = load_table(&mut settings, table_markup(), "b.md", ViewMode::LivePreview)
            .unwrap()
            .data;
        assert_eq!(merged.columns[0].width, Some(90));
    }

    #[test]
    fn test_settings_json_roundtrip_through_lifecycle() {
        let mut settings = Settings::default();
        let loaded =
            load_table(&mut settings, table_markup(), "a.md", ViewMode::Reading).unwrap();
        add_row_to_focused(&mut settings, Some(&loaded.focus)).unwrap();

        let json = settings.to_json().unwrap();
        let restored = Settings::from_json(&json).unwrap();
        assert_eq!(restored, settings);
        assert!(restored.load_state("a.md", "9f2c11ab").unwrap().should_update);
    }

    #[test]
    fn test_legacy_payload_migrates_once_then_loads() {
        let json = r#"{
            "appData": {
                "a.md": {
                    "9f2c11ab": {
                        "columns": [{"id": "0ab4c9d2", "name": "Item", "columnType": "text"},
                                    {"id": "77ee01b3", "name": "Amount", "columnType": "number"}],
                        "rows": [{"id": "41d2f0aa", "order": 0}, {"id": "5be80c1d", "order": 1}],
                        "cells": [
                            {"rowId": "41d2f0aa", "columnId": "0ab4c9d2", "content": "apples"},
                            {"rowId": "41d2f0aa", "columnId": "77ee01b3", "content": "12"},
                            {"rowId": "5be80c1d", "columnId": "0ab4c9d2", "content": "pears"},
                            {"rowId": "5be80c1d", "columnId": "77ee01b3", "content": "7"}
                        ]
                    }
                }
            }
        }"#;
        let mut settings = Settings::from_json(json).unwrap();
        assert!(migrate_settings(&mut settings));
        assert!(!migrate_settings(&mut settings));

        // The migrated entry participates in reconciliation as prior state
        let mut entry = settings.load_state("a.md", "9f2c11ab").unwrap().clone();
        entry.data.columns[1].sort_order = SortOrder::Descending;
        settings.save_state("a.md", "9f2c11ab", entry.data, entry.view_mode, false);

        let merged = load_table(&mut settings, table_markup(), "a.md", ViewMode::LivePreview)
            .unwrap()
            .data;
        assert_eq!(merged.columns[1].sort_order, SortOrder::Descending);
    }
}

// ============================================================================
// Markup Round-Trip
// ============================================================================

mod roundtrip {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_emit_parse_validate_rebuild() {
        let parsed = parse_markdown_table(table_markup());
        let data = find_app_data(&parsed);

        let emitted = app_data_to_markdown("9f2c11ab", &data);
        let reparsed = parse_markdown_table(&emitted);
        assert_eq!(validate(&reparsed), Ok(()));
        assert_eq!(find_app_data(&reparsed), data);
    }

    #[test]
    fn test_pipes_in_content_survive() {
        let mut settings = Settings::default();
        let markup = "\
| <!--gm:tbl:9f2c11ab-->Note |
| --- |
| text |
| <!--gm:col:c1--> |
| <!--gm:row:r1-->either \\| or |
";
        let loaded = load_table(&mut settings, markup, "a.md", ViewMode::LivePreview).unwrap();
        assert_eq!(loaded.data.cell("r1", "c1").unwrap().content, "either | or");

        let emitted = app_data_to_markdown(&loaded.table_id, &loaded.data);
        let reparsed = find_app_data(&parse_markdown_table(&emitted));
        assert_eq!(reparsed.cell("r1", "c1").unwrap().content, "either | or");
    }
}
