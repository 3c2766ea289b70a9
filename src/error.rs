// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Shown when the amount field does not look like `11.11` or `11,11`.
pub const AMOUNT_FORMAT_HINT: &str = r#"Amount must be entered like "11.11" or "11,11""#;

#[derive(Debug, Error)]
pub enum TallyError {
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("Amount must be entered like \"11.11\" or \"11,11\" (got '{0}')")]
    AmountFormat(String),

    #[error("Adding {0} cents would overflow the {1} total")]
    TotalOverflow(i64, String),

    #[error("Unknown category '{0}', expected 'expenses' or 'earnings'")]
    UnknownCategory(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

pub type TallyResult<T> = std::result::Result<T, TallyError>;
