// halloffame/src/error.rs
// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use linera_sdk::views::ViewError;
use thiserror::Error;

/// Code surfaced when a submission does not beat the caller's best.
pub const ERR_SCORE_NOT_HIGHER: u64 = 101;

/// An error that can occur while executing a Hall of Fame operation.
#[derive(Debug, Error)]
pub enum HallOfFameError {
    #[error("score {score} is not higher than current best {best} (code {ERR_SCORE_NOT_HIGHER})")]
    ScoreNotHigher { score: u64, best: u64 },

    #[error("operation has no authenticated signer")]
    MissingSigner,

    #[error("View error")]
    View(#[from] ViewError),
}

impl HallOfFameError {
    /// Domain error code, if this error has one.
    pub fn code(&self) -> Option<u64> {
        match self {
            HallOfFameError::ScoreNotHigher { .. } => Some(ERR_SCORE_NOT_HIGHER),
            HallOfFameError::MissingSigner | HallOfFameError::View(_) => None,
        }
    }
}
