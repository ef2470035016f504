// Copyright (c) 2025 Fintrack Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::db;
use fintrack::store::SqliteStore;

#[test]
fn open_at_creates_schema_and_seeds_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fintrack.sqlite");

    let conn = db::open_at(&path).unwrap();
    let store = SqliteStore::new(&conn);
    let names: Vec<String> = store
        .categories()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names.len(), 9);
    assert!(names.contains(&"Food".to_string()));
    assert!(names.contains(&"Salary".to_string()));
    drop(conn);

    // Re-opening must not duplicate the seeds.
    let conn = db::open_at(&path).unwrap();
    let store = SqliteStore::new(&conn);
    assert_eq!(store.categories().unwrap().len(), 9);
}

#[test]
fn unrecognized_type_is_rejected_by_the_schema() {
    let dir = tempfile::tempdir().unwrap();
    let conn = db::open_at(&dir.path().join("fintrack.sqlite")).unwrap();
    let res = conn.execute(
        "INSERT INTO transactions(type, amount, category, date)
         VALUES ('transfer', '10', 'Food', '2025-01-05')",
        [],
    );
    assert!(res.is_err());
}
