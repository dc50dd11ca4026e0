// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Crypto, Exchange, Fiat, OperationCreate};
use crate::utils::{fmt_num, maybe_print_json, parse_num, pretty_table};
use crate::{db, engine};
use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let req = OperationCreate {
        user_id: sub.get_one::<String>("user").unwrap().to_string(),
        exchange: sub
            .get_one::<String>("exchange")
            .unwrap()
            .parse::<Exchange>()?,
        direction: sub.get_one::<String>("direction").unwrap().parse()?,
        crypto: sub.get_one::<String>("crypto").unwrap().parse::<Crypto>()?,
        fiat: sub.get_one::<String>("fiat").unwrap().parse::<Fiat>()?,
        crypto_amount: parse_num(sub.get_one::<String>("amount").unwrap())?,
        exchange_rate: parse_num(sub.get_one::<String>("rate").unwrap())?,
        fee: match sub.get_one::<String>("fee") {
            Some(raw) => parse_num(raw)?,
            None => 0.0,
        },
    };

    let op = engine::normalize(&req, Utc::now())?;
    db::insert_operation(conn, &op)?;
    println!(
        "Recorded {} {} {} on {} -> {} {} (order {})",
        op.direction,
        fmt_num(op.crypto_amount),
        op.crypto,
        op.exchange,
        fmt_num(op.fiat_amount),
        op.fiat,
        op.order_id
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = sub.get_one::<String>("user").unwrap();
    let limit = sub.get_one::<usize>("limit").copied();
    let ops = db::recent_operations(conn, user, limit)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &ops)? {
        let rows: Vec<Vec<String>> = ops
            .iter()
            .map(|op| {
                vec![
                    op.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                    op.exchange.to_string(),
                    op.direction.to_string(),
                    format!("{} {}", fmt_num(op.crypto_amount), op.crypto),
                    fmt_num(op.exchange_rate),
                    fmt_num(op.fee),
                    format!("{} {}", fmt_num(op.fiat_amount), op.fiat),
                    op.order_id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Exchange", "Dir", "Amount", "Rate", "Fee", "Fiat", "Order"],
                rows,
            )
        );
    }
    Ok(())
}
