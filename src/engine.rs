// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::error::Error;
use crate::models::{
    ArbitrageRequest, ArbitrageResult, Crypto, DashboardStats, Direction, Fiat, Operation,
    OperationCreate, P2pRequest, P2pResult,
};

fn check_finite(name: &str, v: f64) -> Result<(), Error> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!(
            "{} must be a finite number, got {}",
            name, v
        )))
    }
}

fn check_rate(rate: f64) -> Result<(), Error> {
    check_finite("exchange_rate", rate)?;
    if rate <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "exchange_rate must be positive, got {}",
            rate
        )));
    }
    Ok(())
}

/// Simulate a single P2P trade.
///
/// Sell converts crypto to fiat (`amount * rate`), Buy converts fiat to
/// crypto (`amount / rate`). The fee always comes off the received side, so
/// the net can go negative; no floor is applied. Negative amounts are
/// accepted and simply yield negative results.
pub fn simulate_p2p(req: &P2pRequest) -> Result<P2pResult, Error> {
    check_finite("amount", req.amount)?;
    check_finite("fee", req.fee)?;
    check_rate(req.exchange_rate)?;

    let amount_received = match req.direction {
        Direction::Sell => req.amount * req.exchange_rate,
        Direction::Buy => req.amount / req.exchange_rate,
    };
    let net_amount = amount_received - req.fee;

    Ok(P2pResult {
        direction: req.direction,
        crypto: req.crypto,
        fiat: req.fiat,
        amount_sent: req.amount,
        amount_received,
        fee: req.fee,
        net_amount,
        exchange_rate: req.exchange_rate,
    })
}

/// Simulate a two-leg arbitrage: buy `amount` on one exchange, sell it on
/// another. Profit percentage is defined as 0 whenever the investment is not
/// positive.
pub fn simulate_arbitrage(req: &ArbitrageRequest) -> Result<ArbitrageResult, Error> {
    check_finite("amount", req.amount)?;
    check_finite("buy_price", req.buy_price)?;
    check_finite("sell_price", req.sell_price)?;
    check_finite("buy_fee", req.buy_fee)?;
    check_finite("sell_fee", req.sell_fee)?;

    let investment = req.amount * req.buy_price + req.buy_fee;
    let revenue = req.amount * req.sell_price - req.sell_fee;
    let total_fees = req.buy_fee + req.sell_fee;
    let profit = revenue - investment;
    let profit_percentage = if investment > 0.0 {
        (profit / investment) * 100.0
    } else {
        0.0
    };

    Ok(ArbitrageResult {
        buy_exchange: req.buy_exchange,
        sell_exchange: req.sell_exchange,
        crypto: req.crypto,
        investment,
        revenue,
        total_fees,
        profit,
        profit_percentage,
    })
}

/// Turn a creation request into a storable operation, deriving the fiat
/// amount and generating identity from `now`.
///
/// The Buy branch subtracts the fee from the crypto amount *before*
/// dividing, whereas [`simulate_p2p`] subtracts it from the gross after
/// dividing. The two paths have always disagreed; both formulas are pinned
/// by tests so a unification shows up as a deliberate change.
pub fn normalize(req: &OperationCreate, now: DateTime<Utc>) -> Result<Operation, Error> {
    check_finite("crypto_amount", req.crypto_amount)?;
    check_finite("fee", req.fee)?;
    check_rate(req.exchange_rate)?;

    let fiat_amount = match req.direction {
        Direction::Sell => req.crypto_amount * req.exchange_rate - req.fee,
        Direction::Buy => (req.crypto_amount - req.fee) / req.exchange_rate,
    };

    Ok(Operation {
        id: Uuid::new_v4().to_string(),
        order_id: now.timestamp_millis().to_string(),
        user_id: req.user_id.clone(),
        exchange: req.exchange,
        direction: req.direction,
        crypto: req.crypto,
        fiat: req.fiat,
        crypto_amount: req.crypto_amount,
        exchange_rate: req.exchange_rate,
        fee: req.fee,
        fiat_amount,
        timestamp: now,
    })
}

/// Reduce a user's full operation history into dashboard statistics.
///
/// Stateless: the caller supplies the complete, current set and `now`. An
/// empty set is a valid all-zero result with no best/worst, not an error.
/// Best/worst ties go to the first operation encountered in input order.
pub fn aggregate(operations: &[Operation], now: DateTime<Utc>) -> DashboardStats {
    if operations.is_empty() {
        return DashboardStats {
            total_operations: 0,
            total_profit_usdt: 0.0,
            total_profit_eur: 0.0,
            total_profit_usd: 0.0,
            best_operation: None,
            worst_operation: None,
            monthly_profit: 0.0,
            success_rate: 0.0,
        };
    }

    let cutoff = now - Duration::days(30);
    let mut total_profit_usdt = 0.0;
    let mut total_profit_eur = 0.0;
    let mut total_profit_usd = 0.0;
    let mut monthly_profit = 0.0;
    let mut successful = 0usize;
    let mut best: Option<&Operation> = None;
    let mut worst: Option<&Operation> = None;

    for op in operations {
        if op.crypto == Crypto::Usdt {
            total_profit_usdt += op.fiat_amount;
        }
        if op.fiat == Fiat::Eur {
            total_profit_eur += op.fiat_amount;
        }
        if op.fiat == Fiat::Usd {
            total_profit_usd += op.fiat_amount;
        }
        // Closed lower bound: an operation at exactly now - 30d counts.
        if op.timestamp >= cutoff {
            monthly_profit += op.fiat_amount;
        }
        if op.fiat_amount > 0.0 {
            successful += 1;
        }
        // Strict comparisons keep the first of equals.
        if best.is_none_or(|b| op.fiat_amount > b.fiat_amount) {
            best = Some(op);
        }
        if worst.is_none_or(|w| op.fiat_amount < w.fiat_amount) {
            worst = Some(op);
        }
    }

    DashboardStats {
        total_operations: operations.len() as u64,
        total_profit_usdt,
        total_profit_eur,
        total_profit_usd,
        best_operation: best.cloned(),
        worst_operation: worst.cloned(),
        monthly_profit,
        success_rate: (successful as f64 / operations.len() as f64) * 100.0,
    }
}
