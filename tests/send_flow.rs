mod common;

use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;

use common::{MockAgent, Reply};
use zeta_intent::panel::{Panel, SendOutcome, parse_and_execute};
use zeta_intent::{HttpAgentService, ParsedIntent, ZetaError, ZetaResult};

fn transfer() -> serde_json::Value {
    json!({"type": "transfer", "recipient": "0x123", "amount": 0.001, "token": "ZETA"})
}

fn tx_ok() -> Reply {
    Reply::ok(json!({"tx_hash": "0xabc", "explorer_url": "https://explorer/tx/0xabc"}))
}

async fn setup(chat: Reply, execute: Reply) -> (Arc<MockAgent>, HttpAgentService) {
    let mock = MockAgent::new(chat, execute);
    let base_url = common::spawn(mock.clone()).await;
    (mock, HttpAgentService::with_base_url(base_url))
}

async fn approve(_: ParsedIntent) -> ZetaResult<bool> {
    Ok(true)
}

async fn decline(_: ParsedIntent) -> ZetaResult<bool> {
    Ok(false)
}

#[tokio::test]
async fn test_send_confirmed_executes() {
    let (mock, service) = setup(Reply::ok(transfer()), tx_ok()).await;
    let mut panel = Panel::default();

    let outcome = parse_and_execute(&mut panel, &service, "Send 0.001 ZETA to 0x123", approve)
        .await
        .unwrap();

    match outcome {
        SendOutcome::Executed { intent, result } => {
            assert_eq!(intent.recipient(), Some("0x123"));
            assert_eq!(result.tx_hash, "0xabc");
            assert_eq!(result.explorer_link(), Some("https://explorer/tx/0xabc"));
        }
        other => panic!("expected execution, got {:?}", other),
    }
    assert_eq!(mock.execute_hits(), 1);
    assert!(panel.last_error().is_none());
}

#[tokio::test]
async fn test_send_declined_submits_nothing() {
    let (mock, service) = setup(Reply::ok(transfer()), tx_ok()).await;
    let mut panel = Panel::default();

    let outcome = parse_and_execute(&mut panel, &service, "Send 0.001 ZETA to 0x123", decline)
        .await
        .unwrap();

    assert!(matches!(outcome, SendOutcome::Declined(_)));
    assert_eq!(mock.execute_hits(), 0);
}

#[tokio::test]
async fn test_send_parse_error_exit() {
    let chat = Reply::ok(json!({"error": "could not understand", "raw": "gibberish"}));
    let (mock, service) = setup(chat, tx_ok()).await;
    let mut panel = Panel::default();

    let err = parse_and_execute(&mut panel, &service, "gibberish", approve)
        .await
        .unwrap_err();

    match &err {
        ZetaError::ParseRejected(reason) => assert_eq!(reason, "could not understand"),
        other => panic!("expected parse rejection, got {:?}", other),
    }
    assert_eq!(err.to_string(), "Agent parse error: could not understand");
    assert_eq!(mock.execute_hits(), 0);
}

#[tokio::test]
async fn test_send_chat_failure_keeps_transport_error() {
    let chat = Reply::status(StatusCode::INTERNAL_SERVER_ERROR, "oops");
    let (mock, service) = setup(chat, tx_ok()).await;
    let mut panel = Panel::default();

    let err = parse_and_execute(&mut panel, &service, "Send 1 ZETA to 0x1", approve)
        .await
        .unwrap_err();

    assert!(matches!(err, ZetaError::Agent(status) if status.as_u16() == 500));
    assert!(err.to_string().starts_with("Failed to talk to agent"));
    assert_eq!(mock.execute_hits(), 0);
    // The panel log still carries the user-facing line.
    assert!(panel.log().last().unwrap().message.starts_with("Error: Failed to talk to agent"));
}

#[tokio::test]
async fn test_send_execute_failure_keeps_detail() {
    let execute = Reply::status(StatusCode::BAD_REQUEST, r#"{"detail":"Only ZETA token supported"}"#);
    let (_mock, service) = setup(Reply::ok(transfer()), execute).await;
    let mut panel = Panel::default();

    let err = parse_and_execute(&mut panel, &service, "Send 1 ETH to 0x1", approve)
        .await
        .unwrap_err();

    assert!(matches!(&err, ZetaError::Execution(msg) if msg == "Only ZETA token supported"));
    assert_eq!(err.to_string(), "Only ZETA token supported");
}

#[tokio::test]
async fn test_send_empty_prompt_is_invalid_input() {
    let (mock, service) = setup(Reply::ok(transfer()), tx_ok()).await;
    let mut panel = Panel::default();

    let err = parse_and_execute(&mut panel, &service, "", approve)
        .await
        .unwrap_err();

    assert!(matches!(err, ZetaError::InvalidInput(_)));
    assert_eq!(mock.chat_hits(), 0);
}
