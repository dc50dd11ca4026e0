// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Duration, TimeZone, Utc};
use tradeclip::engine;
use tradeclip::models::{Crypto, Direction, Exchange, Fiat, Operation};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 15, 12, 0, 0).unwrap()
}

fn op(id: &str, crypto: Crypto, fiat: Fiat, fiat_amount: f64, ts: DateTime<Utc>) -> Operation {
    Operation {
        id: id.to_string(),
        order_id: ts.timestamp_millis().to_string(),
        user_id: "u1".to_string(),
        exchange: Exchange::Binance,
        direction: Direction::Sell,
        crypto,
        fiat,
        crypto_amount: 1.0,
        exchange_rate: 1.0,
        fee: 0.0,
        fiat_amount,
        timestamp: ts,
    }
}

#[test]
fn empty_history_is_all_zero() {
    let stats = engine::aggregate(&[], now());
    assert_eq!(stats.total_operations, 0);
    assert_eq!(stats.total_profit_usdt, 0.0);
    assert_eq!(stats.total_profit_eur, 0.0);
    assert_eq!(stats.total_profit_usd, 0.0);
    assert_eq!(stats.monthly_profit, 0.0);
    assert_eq!(stats.success_rate, 0.0);
    assert!(stats.best_operation.is_none());
    assert!(stats.worst_operation.is_none());
}

#[test]
fn success_rate_and_extremes() {
    let t = now();
    let ops = vec![
        op("a", Crypto::Usdt, Fiat::Eur, 10.0, t),
        op("b", Crypto::Usdt, Fiat::Eur, -5.0, t),
        op("c", Crypto::Usdt, Fiat::Eur, 20.0, t),
    ];
    let stats = engine::aggregate(&ops, t);
    assert_eq!(stats.total_operations, 3);
    assert_eq!(format!("{:.2}", stats.success_rate), "66.67");
    assert_eq!(stats.best_operation.unwrap().fiat_amount, 20.0);
    assert_eq!(stats.worst_operation.unwrap().fiat_amount, -5.0);
}

#[test]
fn sums_partition_by_code() {
    let t = now();
    let ops = vec![
        op("a", Crypto::Usdt, Fiat::Eur, 10.0, t),
        op("b", Crypto::Btc, Fiat::Usd, 7.0, t),
        op("c", Crypto::Usdt, Fiat::Usd, -3.0, t),
        op("d", Crypto::Eth, Fiat::Ves, 4.0, t),
    ];
    let stats = engine::aggregate(&ops, t);
    assert_eq!(stats.total_profit_usdt, 7.0);
    assert_eq!(stats.total_profit_eur, 10.0);
    assert_eq!(stats.total_profit_usd, 4.0);
}

#[test]
fn monthly_window_lower_bound_is_inclusive() {
    let t = now();
    let on_boundary = t - Duration::days(30);
    let just_outside = on_boundary - Duration::seconds(1);
    let ops = vec![
        op("in", Crypto::Btc, Fiat::Ves, 100.0, on_boundary),
        op("out", Crypto::Btc, Fiat::Ves, 50.0, just_outside),
        op("recent", Crypto::Btc, Fiat::Ves, 1.0, t),
    ];
    let stats = engine::aggregate(&ops, t);
    assert_eq!(stats.monthly_profit, 101.0);
}

#[test]
fn ties_go_to_first_in_input_order() {
    let t = now();
    let ops = vec![
        op("first", Crypto::Usdt, Fiat::Eur, 5.0, t),
        op("second", Crypto::Usdt, Fiat::Eur, 5.0, t),
    ];
    let stats = engine::aggregate(&ops, t);
    assert_eq!(stats.best_operation.unwrap().id, "first");
    assert_eq!(stats.worst_operation.unwrap().id, "first");
}

#[test]
fn sums_are_order_independent() {
    let t = now();
    let mut ops = vec![
        op("a", Crypto::Usdt, Fiat::Eur, 10.0, t),
        op("b", Crypto::Btc, Fiat::Usd, -5.0, t),
        op("c", Crypto::Usdt, Fiat::Usd, 20.0, t),
    ];
    let forward = engine::aggregate(&ops, t);
    ops.reverse();
    let backward = engine::aggregate(&ops, t);
    assert_eq!(forward.total_operations, backward.total_operations);
    assert!((forward.total_profit_usdt - backward.total_profit_usdt).abs() < 1e-9);
    assert!((forward.total_profit_eur - backward.total_profit_eur).abs() < 1e-9);
    assert!((forward.total_profit_usd - backward.total_profit_usd).abs() < 1e-9);
    assert!((forward.monthly_profit - backward.monthly_profit).abs() < 1e-9);
    assert!((forward.success_rate - backward.success_rate).abs() < 1e-9);
}
