// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine;
use crate::models::{ArbitrageRequest, Crypto, Direction, Exchange, Fiat, P2pRequest};
use crate::utils::{fmt_num, maybe_print_json, parse_num, pretty_table};
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("p2p", sub)) => p2p(sub)?,
        Some(("arbitrage", sub)) => arbitrage(sub)?,
        _ => {}
    }
    Ok(())
}

fn p2p(sub: &clap::ArgMatches) -> Result<()> {
    let req = P2pRequest {
        direction: sub.get_one::<String>("direction").unwrap().parse()?,
        crypto: sub.get_one::<String>("crypto").unwrap().parse::<Crypto>()?,
        fiat: sub.get_one::<String>("fiat").unwrap().parse::<Fiat>()?,
        exchange: sub
            .get_one::<String>("exchange")
            .unwrap()
            .parse::<Exchange>()?,
        amount: parse_num(sub.get_one::<String>("amount").unwrap())?,
        exchange_rate: parse_num(sub.get_one::<String>("rate").unwrap())?,
        fee: match sub.get_one::<String>("fee") {
            Some(raw) => parse_num(raw)?,
            None => 0.0,
        },
    };

    let res = engine::simulate_p2p(&req)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &res)? {
        let (sent_unit, recv_unit) = match res.direction {
            Direction::Sell => (res.crypto.as_str(), res.fiat.as_str()),
            Direction::Buy => (res.fiat.as_str(), res.crypto.as_str()),
        };
        let rows = vec![vec![
            res.direction.to_string(),
            format!("{} {}", fmt_num(res.amount_sent), sent_unit),
            format!("{} {}", fmt_num(res.amount_received), recv_unit),
            format!("{} {}", fmt_num(res.fee), recv_unit),
            format!("{} {}", fmt_num(res.net_amount), recv_unit),
            fmt_num(res.exchange_rate),
        ]];
        println!(
            "{}",
            pretty_table(&["Direction", "Sent", "Received", "Fee", "Net", "Rate"], rows)
        );
    }
    Ok(())
}

fn arbitrage(sub: &clap::ArgMatches) -> Result<()> {
    let req = ArbitrageRequest {
        crypto: sub.get_one::<String>("crypto").unwrap().parse::<Crypto>()?,
        buy_exchange: sub
            .get_one::<String>("buy-exchange")
            .unwrap()
            .parse::<Exchange>()?,
        sell_exchange: sub
            .get_one::<String>("sell-exchange")
            .unwrap()
            .parse::<Exchange>()?,
        buy_price: parse_num(sub.get_one::<String>("buy-price").unwrap())?,
        sell_price: parse_num(sub.get_one::<String>("sell-price").unwrap())?,
        amount: parse_num(sub.get_one::<String>("amount").unwrap())?,
        buy_fee: match sub.get_one::<String>("buy-fee") {
            Some(raw) => parse_num(raw)?,
            None => 0.0,
        },
        sell_fee: match sub.get_one::<String>("sell-fee") {
            Some(raw) => parse_num(raw)?,
            None => 0.0,
        },
    };

    let res = engine::simulate_arbitrage(&req)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &res)? {
        let rows = vec![vec![
            format!("{} @ {}", res.crypto, res.buy_exchange),
            res.sell_exchange.to_string(),
            fmt_num(res.investment),
            fmt_num(res.revenue),
            fmt_num(res.total_fees),
            fmt_num(res.profit),
            format!("{:.4}%", res.profit_percentage),
        ]];
        println!(
            "{}",
            pretty_table(
                &["Buy", "Sell", "Investment", "Revenue", "Fees", "Profit", "Profit %"],
                rows,
            )
        );
    }
    Ok(())
}
