// halloffame/src/service.rs
// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(target_arch = "wasm32", no_main)]

mod state;

use std::sync::Arc;
use async_graphql::{EmptySubscription, Object, Request, Response, Schema};
use linera_sdk::{
    abi::WithServiceAbi,
    linera_base_types::AccountOwner,
    views::View,
    Service, ServiceRuntime,
};
use halloffame::{HallOfFameAbi, Operation, RankEntry};
use self::state::HallOfFameState;

pub struct HallOfFameService {
    state: Arc<HallOfFameState>,
    runtime: Arc<ServiceRuntime<Self>>,
}

linera_sdk::service!(HallOfFameService);

impl WithServiceAbi for HallOfFameService {
    type Abi = HallOfFameAbi;
}

impl Service for HallOfFameService {
    type Parameters = ();

    async fn new(runtime: ServiceRuntime<Self>) -> Self {
        let state = HallOfFameState::load(runtime.root_view_storage_context())
            .await
            .expect("Failed to load state");
        HallOfFameService {
            state: Arc::new(state),
            runtime: Arc::new(runtime),
        }
    }

    async fn handle_query(&self, request: Request) -> Response {
        let schema = Schema::build(
            QueryRoot {
                state: self.state.clone(),
            },
            MutationRoot {
                runtime: self.runtime.clone(),
            },
            EmptySubscription,
        )
        .finish();
        schema.execute(request).await
    }
}

/// Schedules operations; the block signer becomes the caller.
struct MutationRoot {
    runtime: Arc<ServiceRuntime<HallOfFameService>>,
}

#[Object]
impl MutationRoot {
    async fn increment(&self) -> bool {
        self.runtime.schedule_operation(&Operation::Increment);
        true
    }

    async fn decrement(&self) -> bool {
        self.runtime.schedule_operation(&Operation::Decrement);
        true
    }

    async fn submit_score(&self, score: u64) -> bool {
        self.runtime.schedule_operation(&Operation::SubmitScore { score });
        true
    }
}

struct QueryRoot {
    state: Arc<HallOfFameState>,
}

#[Object]
impl QueryRoot {
    async fn counter(&self) -> i64 {
        *self.state.counter.get()
    }

    /// Best accepted score, 0 for players who never submitted.
    async fn player_score(&self, player: AccountOwner) -> async_graphql::Result<u64> {
        Ok(self.state.best_scores.get(&player).await?.unwrap_or(0))
    }

    async fn has_submitted(&self, player: AccountOwner) -> async_graphql::Result<bool> {
        Ok(self.state.best_scores.contains_key(&player).await?)
    }

    async fn top_ten(&self) -> Vec<RankEntry> {
        self.state.top_ten.get().entries().to_vec()
    }

    /// 1-based place in the top ten.
    async fn player_rank(&self, player: AccountOwner) -> Option<u32> {
        self.state
            .top_ten
            .get()
            .position(&player)
            .map(|index| index as u32 + 1)
    }
}
