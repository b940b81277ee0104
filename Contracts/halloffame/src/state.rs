// halloffame/src/state.rs
// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use halloffame::{HallOfFameError, Ranking, ScoreBook};
use linera_sdk::{
    linera_base_types::AccountOwner,
    views::{linera_views, MapView, RegisterView, RootView, ViewStorageContext},
};

/// State of the Hall of Fame application.
#[derive(RootView)]
#[view(context = ViewStorageContext)]
pub struct HallOfFameState {
    pub counter: RegisterView<i64>, // Global counter, unrelated to scores.
    pub best_scores: MapView<AccountOwner, u64>, // Best accepted score of every player.
    pub top_ten: RegisterView<Ranking>,
}

#[async_trait(?Send)]
impl ScoreBook for HallOfFameState {
    fn counter_mut(&mut self) -> &mut i64 {
        self.counter.get_mut()
    }

    async fn best_score(&self, player: &AccountOwner) -> Result<Option<u64>, HallOfFameError> {
        Ok(self.best_scores.get(player).await?)
    }

    fn set_best_score(&mut self, player: AccountOwner, score: u64) -> Result<(), HallOfFameError> {
        Ok(self.best_scores.insert(&player, score)?)
    }

    fn ranking_mut(&mut self) -> &mut Ranking {
        self.top_ten.get_mut()
    }
}
