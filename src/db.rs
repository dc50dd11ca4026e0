// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::types::Type;
use rusqlite::{Connection, Row, params};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::Error;
use crate::models::{Crypto, Direction, Exchange, Fiat, Operation};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Tradeclip", "tradeclip"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("tradeclip.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let mut conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&mut conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &mut Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS operations(
        id TEXT PRIMARY KEY,
        order_id TEXT NOT NULL,
        user_id TEXT NOT NULL,
        exchange TEXT NOT NULL,
        direction TEXT NOT NULL CHECK(direction IN ('Sell','Buy')),
        crypto TEXT NOT NULL,
        fiat TEXT NOT NULL,
        crypto_amount REAL NOT NULL,
        exchange_rate REAL NOT NULL,
        fee REAL NOT NULL DEFAULT 0,
        fiat_amount REAL NOT NULL,
        timestamp TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_operations_user ON operations(user_id);
    CREATE INDEX IF NOT EXISTS idx_operations_timestamp ON operations(timestamp);
    "#,
    )?;
    Ok(())
}

/// Persist one operation. Records are write-once; nothing ever updates or
/// deletes a stored row.
pub fn insert_operation(conn: &Connection, op: &Operation) -> Result<(), Error> {
    conn.execute(
        "INSERT INTO operations(id, order_id, user_id, exchange, direction, crypto, fiat,
                                crypto_amount, exchange_rate, fee, fiat_amount, timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            op.id,
            op.order_id,
            op.user_id,
            op.exchange.as_str(),
            op.direction.as_str(),
            op.crypto.as_str(),
            op.fiat.as_str(),
            op.crypto_amount,
            op.exchange_rate,
            op.fee,
            op.fiat_amount,
            op.timestamp.to_rfc3339(),
        ],
    )?;
    Ok(())
}

const OP_COLUMNS: &str = "id, order_id, user_id, exchange, direction, crypto, fiat, \
     crypto_amount, exchange_rate, fee, fiat_amount, timestamp";

/// All operations for a user in insertion order, so aggregation tie-breaks
/// stay deterministic.
pub fn operations_for_user(conn: &Connection, user_id: &str) -> Result<Vec<Operation>, Error> {
    let sql = format!(
        "SELECT {} FROM operations WHERE user_id=?1 ORDER BY rowid",
        OP_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![user_id], operation_from_row)?;
    let mut ops = Vec::new();
    for row in rows {
        ops.push(row?);
    }
    Ok(ops)
}

/// Newest-first history listing for display.
pub fn recent_operations(
    conn: &Connection,
    user_id: &str,
    limit: Option<usize>,
) -> Result<Vec<Operation>, Error> {
    let mut sql = format!(
        "SELECT {} FROM operations WHERE user_id=?1 ORDER BY timestamp DESC, rowid DESC",
        OP_COLUMNS
    );
    if let Some(n) = limit {
        sql.push_str(&format!(" LIMIT {}", n));
    }
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![user_id], operation_from_row)?;
    let mut ops = Vec::new();
    for row in rows {
        ops.push(row?);
    }
    Ok(ops)
}

fn operation_from_row(r: &Row<'_>) -> rusqlite::Result<Operation> {
    fn code<T: FromStr<Err = Error>>(idx: usize, s: String) -> rusqlite::Result<T> {
        T::from_str(&s)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
    }

    let exchange: Exchange = code(3, r.get(3)?)?;
    let direction: Direction = code(4, r.get(4)?)?;
    let crypto: Crypto = code(5, r.get(5)?)?;
    let fiat: Fiat = code(6, r.get(6)?)?;
    let timestamp: DateTime<Utc> = r.get(11)?;

    Ok(Operation {
        id: r.get(0)?,
        order_id: r.get(1)?,
        user_id: r.get(2)?,
        exchange,
        direction,
        crypto,
        fiat,
        crypto_amount: r.get(7)?,
        exchange_rate: r.get(8)?,
        fee: r.get(9)?,
        fiat_amount: r.get(10)?,
        timestamp,
    })
}
