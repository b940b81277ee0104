// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the Hall of Fame application.

#![cfg(not(target_arch = "wasm32"))]

use halloffame::{HallOfFameAbi, HallOfFameResponse, Operation, ERR_SCORE_NOT_HIGHER};
use linera_sdk::{
    bcs,
    linera_base_types::{AccountOwner, ApplicationId},
    test::{ActiveChain, QueryOutcome, TestValidator},
};

async fn setup() -> (ActiveChain, ApplicationId<HallOfFameAbi>) {
    let (validator, module_id) =
        TestValidator::with_current_module::<HallOfFameAbi, (), ()>().await;
    let mut chain = validator.new_chain().await;
    let application_id = chain.create_application(module_id, (), (), vec![]).await;
    (chain, application_id)
}

/// Adds one block with `operations` and returns their decoded responses.
async fn run(
    chain: &ActiveChain,
    application_id: ApplicationId<HallOfFameAbi>,
    operations: Vec<Operation>,
) -> Vec<HallOfFameResponse> {
    let (certificate, _) = chain
        .add_block(|block| {
            for operation in operations {
                block.with_operation(application_id, operation);
            }
        })
        .await;
    certificate
        .block()
        .body
        .operation_results
        .iter()
        .map(|result| bcs::from_bytes(&result.0).expect("Failed to decode response"))
        .collect()
}

async fn query(
    chain: &ActiveChain,
    application_id: ApplicationId<HallOfFameAbi>,
    request: &str,
) -> serde_json::Value {
    let QueryOutcome { response, .. } = chain.graphql_query(application_id, request).await;
    response
}

#[tokio::test(flavor = "multi_thread")]
async fn counter_starts_at_zero_and_goes_negative() {
    let (chain, application_id) = setup().await;

    let response = query(&chain, application_id, "query { counter }").await;
    assert_eq!(response["counter"].as_i64(), Some(0));

    let responses = run(&chain, application_id, vec![Operation::Increment]).await;
    assert_eq!(responses, vec![HallOfFameResponse::Counter(1)]);

    let responses = run(
        &chain,
        application_id,
        vec![Operation::Decrement, Operation::Decrement, Operation::Decrement],
    )
    .await;
    assert_eq!(
        responses,
        vec![
            HallOfFameResponse::Counter(0),
            HallOfFameResponse::Counter(-1),
            HallOfFameResponse::Counter(-2),
        ]
    );
    let response = query(&chain, application_id, "query { counter }").await;
    assert_eq!(response["counter"].as_i64(), Some(-2));
}

#[tokio::test(flavor = "multi_thread")]
async fn submitted_score_becomes_best_and_is_ranked() {
    let (chain, application_id) = setup().await;
    let player = AccountOwner::from(chain.public_key());

    let response = query(
        &chain,
        application_id,
        &format!(
            "query {{ playerScore(player: \"{player}\") hasSubmitted(player: \"{player}\") }}"
        ),
    )
    .await;
    assert_eq!(response["playerScore"].as_u64(), Some(0));
    assert_eq!(response["hasSubmitted"].as_bool(), Some(false));

    let responses = run(&chain, application_id, vec![Operation::SubmitScore { score: 500 }]).await;
    assert_eq!(responses, vec![HallOfFameResponse::ScoreAccepted(true)]);

    let response = query(
        &chain,
        application_id,
        &format!(
            "query {{ playerScore(player: \"{player}\") playerRank(player: \"{player}\") \
             topTen {{ player score }} }}"
        ),
    )
    .await;
    assert_eq!(response["playerScore"].as_u64(), Some(500));
    assert_eq!(response["playerRank"].as_u64(), Some(1));
    let top_ten = response["topTen"].as_array().expect("topTen should be a list");
    assert_eq!(top_ten.len(), 1);
    assert_eq!(top_ten[0]["player"].as_str(), Some(player.to_string().as_str()));
    assert_eq!(top_ten[0]["score"].as_u64(), Some(500));
}

#[tokio::test(flavor = "multi_thread")]
async fn lower_or_equal_score_returns_code_101() {
    let (chain, application_id) = setup().await;
    let player = AccountOwner::from(chain.public_key());

    run(&chain, application_id, vec![Operation::SubmitScore { score: 500 }]).await;

    for score in [100, 500] {
        let responses = run(&chain, application_id, vec![Operation::SubmitScore { score }]).await;
        assert_eq!(
            responses,
            vec![HallOfFameResponse::Rejected {
                code: ERR_SCORE_NOT_HIGHER
            }],
            "score {score} should have been rejected"
        );
    }

    let response = query(
        &chain,
        application_id,
        &format!("query {{ playerScore(player: \"{player}\") topTen {{ score }} }}"),
    )
    .await;
    assert_eq!(response["playerScore"].as_u64(), Some(500));
    let top_ten = response["topTen"].as_array().expect("topTen should be a list");
    assert_eq!(top_ten.len(), 1);
    assert_eq!(top_ten[0]["score"].as_u64(), Some(500));
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_submission_keeps_the_rest_of_the_block() {
    let (chain, application_id) = setup().await;
    let player = AccountOwner::from(chain.public_key());

    run(&chain, application_id, vec![Operation::SubmitScore { score: 700 }]).await;

    let responses = run(
        &chain,
        application_id,
        vec![
            Operation::Increment,
            Operation::SubmitScore { score: 900 },
            Operation::SubmitScore { score: 900 },
        ],
    )
    .await;
    assert_eq!(
        responses,
        vec![
            HallOfFameResponse::Counter(1),
            HallOfFameResponse::ScoreAccepted(true),
            HallOfFameResponse::Rejected {
                code: ERR_SCORE_NOT_HIGHER
            },
        ]
    );

    let response = query(
        &chain,
        application_id,
        &format!("query {{ counter playerScore(player: \"{player}\") }}"),
    )
    .await;
    assert_eq!(response["counter"].as_i64(), Some(1));
    assert_eq!(response["playerScore"].as_u64(), Some(900));
}

#[tokio::test(flavor = "multi_thread")]
async fn improving_player_keeps_a_single_entry() {
    let (chain, application_id) = setup().await;

    run(
        &chain,
        application_id,
        vec![
            Operation::SubmitScore { score: 1000 },
            Operation::SubmitScore { score: 3000 },
        ],
    )
    .await;

    let response = query(&chain, application_id, "query { topTen { score } }").await;
    let top_ten = response["topTen"].as_array().expect("topTen should be a list");
    assert_eq!(top_ten.len(), 1);
    assert_eq!(top_ten[0]["score"].as_u64(), Some(3000));
}
