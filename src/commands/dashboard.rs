// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Operation;
use crate::utils::{fmt_num, maybe_print_json, pretty_table};
use crate::{db, engine};
use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let user = m.get_one::<String>("user").unwrap();
    let ops = db::operations_for_user(conn, user)?;
    let stats = engine::aggregate(&ops, Utc::now());

    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &stats)? {
        let rows = vec![
            vec!["Operations".to_string(), stats.total_operations.to_string()],
            vec![
                "Profit (USDT ops)".to_string(),
                fmt_num(stats.total_profit_usdt),
            ],
            vec!["Profit (EUR)".to_string(), fmt_num(stats.total_profit_eur)],
            vec!["Profit (USD)".to_string(), fmt_num(stats.total_profit_usd)],
            vec![
                "Profit (last 30d)".to_string(),
                fmt_num(stats.monthly_profit),
            ],
            vec![
                "Success rate".to_string(),
                format!("{:.2}%", stats.success_rate),
            ],
            vec![
                "Best".to_string(),
                describe(stats.best_operation.as_ref()),
            ],
            vec![
                "Worst".to_string(),
                describe(stats.worst_operation.as_ref()),
            ],
        ];
        println!("{}", pretty_table(&["Metric", "Value"], rows));
    }
    Ok(())
}

fn describe(op: Option<&Operation>) -> String {
    match op {
        Some(op) => format!(
            "{} {} {} on {} -> {} {}",
            op.direction,
            fmt_num(op.crypto_amount),
            op.crypto,
            op.exchange,
            fmt_num(op.fiat_amount),
            op.fiat
        ),
        None => "-".to_string(),
    }
}
