// halloffame/lib.rs
// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

/*! ABI of the Hall of Fame application: a global counter plus a top-ten ranking of best scores. */

use async_graphql::{Request, Response};
use linera_sdk::linera_base_types::{ContractAbi, ServiceAbi};
use serde::{Deserialize, Serialize};

pub mod error;
pub mod ranking;
pub mod scoreboard;

pub use error::{HallOfFameError, ERR_SCORE_NOT_HIGHER};
pub use ranking::{RankEntry, Ranking, TOP_N};
pub use scoreboard::{step_counter, submit_score, ScoreBook};

/// Operations accepted by the contract. Every variant is attributed to the block's signer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Increment,
    Decrement,
    SubmitScore { score: u64 },
}

/// What an operation hands back to its caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HallOfFameResponse {
    /// New counter value after `Increment` or `Decrement`.
    Counter(i64),
    /// `SubmitScore` was accepted.
    ScoreAccepted(bool),
    /// `SubmitScore` was refused with a domain error code; nothing was written.
    Rejected { code: u64 },
}

pub struct HallOfFameAbi;

impl ContractAbi for HallOfFameAbi {
    type Operation = Operation;
    type Response = HallOfFameResponse;
}

impl ServiceAbi for HallOfFameAbi {
    type Query = Request;
    type QueryResponse = Response;
}
