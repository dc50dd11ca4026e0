// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures the core can raise. Anything else (CLI parsing, IO) stays on
/// `anyhow` at the command layer.
#[derive(Debug, Error)]
pub enum Error {
    /// A request field failed validation: unknown code, non-finite number,
    /// or a rate that must be positive.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The operation store could not complete a read or write.
    #[error("operation store unavailable: {0}")]
    StoreUnavailable(#[from] rusqlite::Error),
}
