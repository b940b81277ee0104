// halloffame/src/ranking.rs
// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use async_graphql::SimpleObject;
use linera_sdk::linera_base_types::AccountOwner;
use serde::{Deserialize, Serialize};

/// Number of places kept in the ranking.
pub const TOP_N: usize = 10;

/// One place in the ranking.
#[derive(SimpleObject, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    pub player: AccountOwner,
    pub score: u64,
}

/// Top `TOP_N` best scores, descending, at most one entry per player.
///
/// Entries with equal scores keep arrival order: a newcomer is placed after every
/// entry whose score is equal or higher.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    entries: Vec<RankEntry>,
}

impl Ranking {
    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zero-based place of `player`, if ranked.
    pub fn position(&self, player: &AccountOwner) -> Option<usize> {
        self.entries.iter().position(|entry| entry.player == *player)
    }

    /// Records a new best for `player`, vacating its previous place first.
    ///
    /// Returns the entry pushed out of the ranking, if the list overflowed.
    /// Callers must only pass scores that passed
    /// [`ensure_improvement`](crate::scoreboard::ensure_improvement).
    pub fn record(&mut self, player: AccountOwner, score: u64) -> Option<RankEntry> {
        if let Some(index) = self.position(&player) {
            self.entries.remove(index);
        }

        let index = self.entries.partition_point(|entry| entry.score >= score);
        self.entries.insert(index, RankEntry { player, score });

        if self.entries.len() > TOP_N {
            self.entries.pop()
        } else {
            None
        }
    }
}
