// halloffame/src/scoreboard.rs
// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use linera_sdk::linera_base_types::AccountOwner;

use crate::{
    error::HallOfFameError,
    ranking::{RankEntry, Ranking},
};

/// Storage the Hall of Fame transitions run against.
#[async_trait(?Send)]
pub trait ScoreBook {
    fn counter_mut(&mut self) -> &mut i64;
    async fn best_score(&self, player: &AccountOwner) -> Result<Option<u64>, HallOfFameError>;
    fn set_best_score(&mut self, player: AccountOwner, score: u64) -> Result<(), HallOfFameError>;
    fn ranking_mut(&mut self) -> &mut Ranking;
}

/// Outcome of an accepted submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accepted {
    pub previous: Option<u64>,
    pub evicted: Option<RankEntry>,
}

/// Adds `delta` to the counter and returns the new value.
pub fn step_counter<B: ScoreBook + ?Sized>(book: &mut B, delta: i64) -> i64 {
    let counter = book.counter_mut();
    *counter += delta;
    *counter
}

/// Strict improvement rule: `score` must exceed the caller's best, which defaults to 0.
pub fn ensure_improvement(best: Option<u64>, score: u64) -> Result<(), HallOfFameError> {
    let best = best.unwrap_or(0);
    if score <= best {
        return Err(HallOfFameError::ScoreNotHigher { score, best });
    }
    Ok(())
}

/// Validates, then stores the new best and re-ranks the player.
///
/// Nothing is written when validation fails.
pub async fn submit_score<B: ScoreBook + ?Sized>(
    book: &mut B,
    player: AccountOwner,
    score: u64,
) -> Result<Accepted, HallOfFameError> {
    let previous = book.best_score(&player).await?;
    ensure_improvement(previous, score)?;

    book.set_best_score(player, score)?;
    let evicted = book.ranking_mut().record(player, score);
    Ok(Accepted { previous, evicted })
}
