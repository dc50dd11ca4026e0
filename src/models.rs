// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Trade direction: Sell disposes of crypto for fiat, Buy acquires crypto
/// with fiat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Sell,
    Buy,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Sell => "Sell",
            Direction::Buy => "Buy",
        }
    }
}

impl FromStr for Direction {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "sell" => Ok(Direction::Sell),
            "buy" => Ok(Direction::Buy),
            _ => Err(Error::InvalidInput(format!(
                "unknown direction '{}', expected Sell or Buy",
                s
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported crypto codes. Closed set: anything else is rejected at parse
/// time, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Crypto {
    #[serde(rename = "USDT")]
    Usdt,
    #[serde(rename = "BTC")]
    Btc,
    #[serde(rename = "ETH")]
    Eth,
    #[serde(rename = "BNB")]
    Bnb,
}

impl Crypto {
    pub fn as_str(&self) -> &'static str {
        match self {
            Crypto::Usdt => "USDT",
            Crypto::Btc => "BTC",
            Crypto::Eth => "ETH",
            Crypto::Bnb => "BNB",
        }
    }
}

impl FromStr for Crypto {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_uppercase().as_str() {
            "USDT" => Ok(Crypto::Usdt),
            "BTC" => Ok(Crypto::Btc),
            "ETH" => Ok(Crypto::Eth),
            "BNB" => Ok(Crypto::Bnb),
            _ => Err(Error::InvalidInput(format!("unknown crypto code '{}'", s))),
        }
    }
}

impl fmt::Display for Crypto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported fiat codes. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fiat {
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "VES")]
    Ves,
    #[serde(rename = "MXN")]
    Mxn,
    #[serde(rename = "COP")]
    Cop,
    #[serde(rename = "ARS")]
    Ars,
    #[serde(rename = "BRL")]
    Brl,
}

impl Fiat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Fiat::Eur => "EUR",
            Fiat::Usd => "USD",
            Fiat::Ves => "VES",
            Fiat::Mxn => "MXN",
            Fiat::Cop => "COP",
            Fiat::Ars => "ARS",
            Fiat::Brl => "BRL",
        }
    }
}

impl FromStr for Fiat {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_uppercase().as_str() {
            "EUR" => Ok(Fiat::Eur),
            "USD" => Ok(Fiat::Usd),
            "VES" => Ok(Fiat::Ves),
            "MXN" => Ok(Fiat::Mxn),
            "COP" => Ok(Fiat::Cop),
            "ARS" => Ok(Fiat::Ars),
            "BRL" => Ok(Fiat::Brl),
            _ => Err(Error::InvalidInput(format!("unknown fiat code '{}'", s))),
        }
    }
}

impl fmt::Display for Fiat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported exchanges. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Exchange {
    Binance,
    Bybit,
    #[serde(rename = "OKX")]
    Okx,
    #[serde(rename = "KuCoin")]
    Kucoin,
}

impl Exchange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exchange::Binance => "Binance",
            Exchange::Bybit => "Bybit",
            Exchange::Okx => "OKX",
            Exchange::Kucoin => "KuCoin",
        }
    }
}

impl FromStr for Exchange {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "binance" => Ok(Exchange::Binance),
            "bybit" => Ok(Exchange::Bybit),
            "okx" => Ok(Exchange::Okx),
            "kucoin" => Ok(Exchange::Kucoin),
            _ => Err(Error::InvalidInput(format!("unknown exchange '{}'", s))),
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs for a P2P trade simulation. Transient, never persisted.
///
/// `amount` is the quantity given up: crypto units when selling, fiat units
/// when buying. `exchange_rate` is fiat per crypto unit. `fee` is charged in
/// the received unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct P2pRequest {
    pub crypto: Crypto,
    pub fiat: Fiat,
    pub exchange: Exchange,
    pub direction: Direction,
    pub amount: f64,
    pub exchange_rate: f64,
    pub fee: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct P2pResult {
    pub direction: Direction,
    pub crypto: Crypto,
    pub fiat: Fiat,
    pub amount_sent: f64,
    pub amount_received: f64,
    pub fee: f64,
    pub net_amount: f64,
    pub exchange_rate: f64,
}

/// Inputs for a two-leg cross-exchange arbitrage. `amount` is in crypto
/// units; prices and fees are fiat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArbitrageRequest {
    pub buy_exchange: Exchange,
    pub sell_exchange: Exchange,
    pub crypto: Crypto,
    pub buy_price: f64,
    pub sell_price: f64,
    pub amount: f64,
    pub buy_fee: f64,
    pub sell_fee: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArbitrageResult {
    pub buy_exchange: Exchange,
    pub sell_exchange: Exchange,
    pub crypto: Crypto,
    pub investment: f64,
    pub revenue: f64,
    pub total_fees: f64,
    pub profit: f64,
    pub profit_percentage: f64,
}

/// A request to record one trade for a user. The fiat amount is derived by
/// the engine, never supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationCreate {
    pub user_id: String,
    pub exchange: Exchange,
    pub direction: Direction,
    pub crypto: Crypto,
    pub fiat: Fiat,
    pub crypto_amount: f64,
    pub exchange_rate: f64,
    pub fee: f64,
}

/// A persisted trade. Immutable once stored: there is no update or delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    pub id: String,
    pub order_id: String,
    pub user_id: String,
    pub exchange: Exchange,
    pub direction: Direction,
    pub crypto: Crypto,
    pub fiat: Fiat,
    pub crypto_amount: f64,
    pub exchange_rate: f64,
    pub fee: f64,
    pub fiat_amount: f64,
    pub timestamp: DateTime<Utc>,
}

/// On-demand summary of a user's full operation history. Recomputed on every
/// request, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_operations: u64,
    pub total_profit_usdt: f64,
    pub total_profit_eur: f64,
    pub total_profit_usd: f64,
    pub best_operation: Option<Operation>,
    pub worst_operation: Option<Operation>,
    pub monthly_profit: f64,
    pub success_rate: f64,
}
