// halloffame/src/contract.rs
// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(target_arch = "wasm32", no_main)]

mod state;

use log::{debug, info, warn};
use self::state::HallOfFameState;
use halloffame::{
    step_counter, submit_score, HallOfFameAbi, HallOfFameError, HallOfFameResponse, Operation,
};
use linera_sdk::{
    abi::WithContractAbi,
    linera_base_types::AccountOwner,
    views::{RootView, View},
    Contract, ContractRuntime,
};

linera_sdk::contract!(HallOfFameContract);

pub struct HallOfFameContract {
    state: HallOfFameState,
    runtime: ContractRuntime<Self>,
}

impl WithContractAbi for HallOfFameContract {
    type Abi = HallOfFameAbi;
}

impl Contract for HallOfFameContract {
    type Parameters = ();
    type InstantiationArgument = ();
    type Message = ();
    type EventValue = ();

    async fn load(runtime: ContractRuntime<Self>) -> Self {
        let state = HallOfFameState::load(runtime.root_view_storage_context())
            .await
            .expect("Failed to load state");
        Self { state, runtime }
    }

    async fn instantiate(&mut self, _argument: Self::InstantiationArgument) {
        self.state.counter.set(0);
        info!("[HALLOFFAME] Instantiated on chain {}", self.runtime.chain_id());
    }

    async fn store(mut self) {
        self.state.save().await.expect("Failed to save state");
    }

    /// Runs one operation. Domain rejections come back as a response carrying their code;
    /// anything else aborts the block.
    async fn execute_operation(&mut self, operation: Self::Operation) -> Self::Response {
        info!("[HALLOFFAME] Received Operation::{:?}", operation);
        match self.apply_operation(operation).await {
            Ok(response) => response,
            Err(error) => match error.code() {
                Some(code) => {
                    warn!("[HALLOFFAME] Operation rejected: {}", error);
                    HallOfFameResponse::Rejected { code }
                }
                None => panic!("Hall of Fame operation failed: {error}"),
            },
        }
    }

    async fn execute_message(&mut self, _message: Self::Message) {
        panic!("Hall of Fame does not handle cross-chain messages");
    }
}

impl HallOfFameContract {
    async fn apply_operation(
        &mut self,
        operation: Operation,
    ) -> Result<HallOfFameResponse, HallOfFameError> {
        let caller = self
            .runtime
            .authenticated_signer()
            .ok_or(HallOfFameError::MissingSigner)?;

        match operation {
            Operation::Increment => Ok(HallOfFameResponse::Counter(self.record_step(caller, 1))),
            Operation::Decrement => Ok(HallOfFameResponse::Counter(self.record_step(caller, -1))),
            Operation::SubmitScore { score } => {
                self.accept_score(caller, score).await?;
                Ok(HallOfFameResponse::ScoreAccepted(true))
            }
        }
    }

    fn record_step(&mut self, caller: AccountOwner, delta: i64) -> i64 {
        let counter = step_counter(&mut self.state, delta);
        debug!("[HALLOFFAME] counter={} after step {} by {}", counter, delta, caller);
        counter
    }

    async fn accept_score(
        &mut self,
        player: AccountOwner,
        score: u64,
    ) -> Result<(), HallOfFameError> {
        let accepted = submit_score(&mut self.state, player, score).await?;

        debug!(
            "[HALLOFFAME] best score of {} raised from {} to {}",
            player,
            accepted.previous.unwrap_or(0),
            score
        );
        if let Some(entry) = accepted.evicted {
            debug!("[HALLOFFAME] {} ({}) dropped out of the top ten", entry.player, entry.score);
        }
        Ok(())
    }
}
