#![cfg(feature = "serde")]

use line_diff::{diff_lines, ChangeKind, DiffResult, LineChange};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_wire_field_names() {
    let value = serde_json::to_value(LineChange::added(0, "line1")).unwrap();

    assert_eq!(
        value,
        json!({ "type": "added", "lineNum": 0, "oldLine": -1, "content": "line1" })
    );
}

#[test]
fn test_removed_line_on_the_wire() {
    let value = serde_json::to_value(diff_lines("line1\nline2\nline3", "line1\nline3")).unwrap();

    assert_eq!(
        value,
        json!({ "changes": [{ "type": "removed", "lineNum": 1, "oldLine": 1, "content": "" }] })
    );
}

#[test]
fn test_old_content_only_when_present() {
    let change = LineChange::changed(2, "new").with_old_content("old");
    let value = serde_json::to_value(&change).unwrap();

    assert_eq!(
        value,
        json!({ "type": "changed", "lineNum": 2, "oldLine": -1, "content": "new", "oldContent": "old" })
    );
}

#[test]
fn test_identical_texts_serialize_to_empty_list() {
    let json = serde_json::to_string(&diff_lines("same", "same")).unwrap();

    assert_eq!(json, r#"{"changes":[]}"#);
}

#[test]
fn test_parse_records() {
    let json = r#"{"changes":[
        {"type":"changed","lineNum":0,"oldLine":-1,"content":"new line"},
        {"type":"removed","lineNum":1,"oldLine":1,"content":""}
    ]}"#;
    let result: DiffResult = serde_json::from_str(json).unwrap();

    assert_eq!(
        result.changes(),
        &[LineChange::changed(0, "new line"), LineChange::removed(1, 1)]
    );
    assert_eq!(result.changes()[1].kind, ChangeKind::Removed);
}

#[test]
fn test_parse_without_content() {
    let change: LineChange = serde_json::from_str(r#"{"type":"removed","lineNum":4,"oldLine":7}"#).unwrap();

    assert_eq!(change, LineChange::removed(4, 7));
}
