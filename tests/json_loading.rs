//! Loading records from JSON text and files.

use std::fs::File;
use std::io::{self, Read, Write};

use tempfile::tempdir;
use treeindex::{Error, ItemId, ItemType, TreeIndex};

const CANONICAL_JSON: &str = r#"[
    { "id": 1, "parent": "root" },
    { "id": 2, "parent": 1, "type": "test" },
    { "id": 3, "parent": 1, "type": "test" },
    { "id": 4, "parent": 2, "type": "test" },
    { "id": 5, "parent": 2, "type": "test" },
    { "id": 6, "parent": 2, "type": "test" },
    { "id": 7, "parent": 4, "type": null },
    { "id": 8, "parent": 4, "type": null }
]"#;

#[test]
fn test_from_json_str() {
    let index = TreeIndex::from_json_str(CANONICAL_JSON).unwrap();

    assert_eq!(index.len(), 8);
    assert_eq!(index.get_item(7).unwrap().item_type, ItemType::Null);
    assert_eq!(index.get_item(1).unwrap().item_type, ItemType::Absent);
}

#[test]
fn test_query_output_serializes_like_input() {
    let index = TreeIndex::from_json_str(CANONICAL_JSON).unwrap();

    let json = serde_json::to_string(&index.get_all_parents(7)).unwrap();
    assert_eq!(
        json,
        r#"[{"id":1,"parent":"root"},{"id":2,"parent":1,"type":"test"},{"id":4,"parent":2,"type":"test"}]"#
    );

    let json = serde_json::to_string(&index.get_children(4)).unwrap();
    assert_eq!(
        json,
        r#"[{"id":7,"parent":4,"type":null},{"id":8,"parent":4,"type":null}]"#
    );
}

#[test]
fn test_from_reader_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("records.json");
    {
        let mut file = File::create(&path).unwrap();
        file.write_all(CANONICAL_JSON.as_bytes()).unwrap();
    }

    let index = TreeIndex::from_reader(File::open(&path).unwrap()).unwrap();

    let descendants: Vec<ItemId> = index
        .get_all_children(2)
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(
        descendants,
        [4, 7, 8, 5, 6].into_iter().map(ItemId::from).collect::<Vec<_>>()
    );
}

#[test]
fn test_mixed_id_kinds() {
    let index = TreeIndex::from_json_str(
        r#"[
            { "id": "top", "parent": "root" },
            { "id": 1, "parent": "top" },
            { "id": "1", "parent": 1, "type": "string-one" }
        ]"#,
    )
    .unwrap();

    assert_eq!(index.len(), 3);
    assert_eq!(index.get_all_parents("1").len(), 2);
    assert_eq!(index.depth_of(1), Some(1));
}

#[test]
fn test_invalid_json_is_reported() {
    let result = TreeIndex::from_json_str(r#"[{ "id": 1 }]"#);
    assert!(matches!(result, Err(Error::Json(_))));

    let result = TreeIndex::from_json_str("not json");
    assert!(matches!(result, Err(Error::Json(_))));
}

#[test]
fn test_construction_errors_pass_through() {
    let result = TreeIndex::from_json_str(
        r#"[{ "id": 1, "parent": "root" }, { "id": 1, "parent": 1 }]"#,
    );
    assert!(matches!(result, Err(Error::DuplicateId(_))));
}

/// Reader that fails on every call.
struct DeniedReader;

impl Read for DeniedReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
    }
}

#[test]
fn test_from_reader_io_failure() {
    match TreeIndex::from_reader(DeniedReader) {
        Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_from_reader_bad_json_is_json_error() {
    let result = TreeIndex::from_reader(&b"[{ \"id\": 1 }]"[..]);
    assert!(matches!(result, Err(Error::Json(_))));
}
