// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tradeclip::engine;
use tradeclip::error::Error;
use tradeclip::models::{ArbitrageRequest, Crypto, Direction, Exchange, Fiat, P2pRequest};

fn p2p(direction: Direction, amount: f64, rate: f64, fee: f64) -> P2pRequest {
    P2pRequest {
        crypto: Crypto::Usdt,
        fiat: Fiat::Eur,
        exchange: Exchange::Binance,
        direction,
        amount,
        exchange_rate: rate,
        fee,
    }
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
}

#[test]
fn sell_converts_crypto_to_fiat() {
    // 100 USDT at 0.95 EUR/USDT with a 2 EUR fee
    let res = engine::simulate_p2p(&p2p(Direction::Sell, 100.0, 0.95, 2.0)).unwrap();
    assert_close(res.amount_sent, 100.0);
    assert_close(res.amount_received, 95.0);
    assert_close(res.net_amount, 93.0);
    assert_close(res.amount_received, res.amount_sent * res.exchange_rate);
    assert_close(res.net_amount, res.amount_received - res.fee);
}

#[test]
fn buy_converts_fiat_to_crypto() {
    // 1000 fiat at 45000, fee charged in crypto
    let res = engine::simulate_p2p(&p2p(Direction::Buy, 1000.0, 45000.0, 0.001)).unwrap();
    assert_close(res.amount_received, 1000.0 / 45000.0);
    assert_close(res.net_amount, 1000.0 / 45000.0 - 0.001);
    assert!((res.amount_received - 0.022222).abs() < 1e-5);
}

#[test]
fn fee_exceeding_gross_goes_negative() {
    // No floor at zero
    let res = engine::simulate_p2p(&p2p(Direction::Sell, 1.0, 1.0, 5.0)).unwrap();
    assert_close(res.net_amount, -4.0);
}

#[test]
fn negative_amount_yields_negative_result() {
    let res = engine::simulate_p2p(&p2p(Direction::Sell, -100.0, 0.95, 0.0)).unwrap();
    assert_close(res.amount_received, -95.0);
}

#[test]
fn zero_or_negative_rate_rejected_both_directions() {
    for direction in [Direction::Sell, Direction::Buy] {
        for rate in [0.0, -1.5] {
            let err = engine::simulate_p2p(&p2p(direction, 10.0, rate, 0.0)).unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)), "rate {}", rate);
        }
    }
}

#[test]
fn non_finite_fields_rejected() {
    let err = engine::simulate_p2p(&p2p(Direction::Sell, f64::NAN, 1.0, 0.0)).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
    let err = engine::simulate_p2p(&p2p(Direction::Buy, 1.0, 1.0, f64::INFINITY)).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

fn arb(amount: f64, buy_price: f64, sell_price: f64, buy_fee: f64, sell_fee: f64) -> ArbitrageRequest {
    ArbitrageRequest {
        buy_exchange: Exchange::Binance,
        sell_exchange: Exchange::Bybit,
        crypto: Crypto::Btc,
        buy_price,
        sell_price,
        amount,
        buy_fee,
        sell_fee,
    }
}

#[test]
fn arbitrage_btc_spread() {
    let res = engine::simulate_arbitrage(&arb(1.0, 45000.0, 45500.0, 50.0, 55.0)).unwrap();
    assert_close(res.investment, 45050.0);
    assert_close(res.revenue, 45445.0);
    assert_close(res.total_fees, 105.0);
    assert_close(res.profit, 395.0);
    assert!((res.profit_percentage - 0.8768).abs() < 1e-4);
    assert_close(res.profit, res.revenue - res.investment);
    assert_close(res.profit_percentage, res.profit / res.investment * 100.0);
}

#[test]
fn arbitrage_zero_investment_has_zero_percentage() {
    let res = engine::simulate_arbitrage(&arb(0.0, 45000.0, 45500.0, 0.0, 10.0)).unwrap();
    assert_close(res.investment, 0.0);
    assert_close(res.profit_percentage, 0.0);
    assert_close(res.profit, res.revenue - res.investment);
}

#[test]
fn arbitrage_non_finite_rejected() {
    let err = engine::simulate_arbitrage(&arb(1.0, f64::NAN, 45500.0, 0.0, 0.0)).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}
