// Copyright (c) 2025 Fintrack Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::store::SqliteStore;
use crate::utils::pretty_table;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let store = SqliteStore::new(conn);
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            store.add_category(name)?;
            println!("Added category '{}'", name);
        }
        Some(("list", _)) => {
            let data = store
                .categories()?
                .into_iter()
                .map(|c| vec![c.name])
                .collect();
            println!("{}", pretty_table(&["Category"], data));
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            if store.delete_category(name)? {
                println!("Removed category '{}'", name);
            } else {
                println!("Category '{}' not found", name);
            }
        }
        _ => {}
    }
    Ok(())
}
