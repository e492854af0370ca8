use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use mockito::Matcher;
use predicates::prelude::*;
use serde_json::json;
use std::io::Write;
use assert_cmd::Command;

const ENDPOINT: &str = "/api/initiate-paypal-payment/";

fn checkout(base_url: &str) -> Command {
    let mut cmd = Command::new(cargo_bin!("ticket-checkout"));
    cmd.env_clear()
        .env("RUST_LOG", "warn")
        .arg("--base-url")
        .arg(base_url);
    cmd
}

#[test]
fn test_cli_prints_approval_url() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", ENDPOINT)
        .match_header("authorization", "Token abc123")
        .match_body(Matcher::Json(json!({"ticket_id": "TCK-123"})))
        .with_status(200)
        .with_body(r#"{"payment_id":"PAYID-1","approval_url":"https://paypal.example/checkout/abc"}"#)
        .create();

    checkout(&server.url())
        .arg("--token")
        .arg("abc123")
        .arg("--ticket-id")
        .arg("TCK-123")
        .assert()
        .success()
        .stdout("https://paypal.example/checkout/abc\n");

    mock.assert();
    Ok(())
}

#[test]
fn test_cli_reads_ticket_from_prompt() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", ENDPOINT)
        .match_body(Matcher::Json(json!({"ticket_id": "TCK-555"})))
        .with_status(200)
        .with_body(r#"{"approval_url":"https://paypal.example/checkout/555"}"#)
        .create();

    checkout(&server.url())
        .arg("--token")
        .arg("abc123")
        .write_stdin("TCK-555\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Enter your ticket ID"))
        .stdout("https://paypal.example/checkout/555\n");

    mock.assert();
}

#[test]
fn test_cli_reports_server_error() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", ENDPOINT)
        .with_status(400)
        .with_body(r#"{"error":"Ticket already paid"}"#)
        .create();

    checkout(&server.url())
        .arg("--token")
        .arg("abc123")
        .arg("--ticket-id")
        .arg("TCK-999")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Payment initiation failed: Ticket already paid",
        ));
}

#[test]
fn test_cli_cancelled_prompt_makes_no_request() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", ENDPOINT).expect(0).create();

    checkout(&server.url())
        .write_stdin("")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error initiating payment").not());

    mock.assert();
}

#[test]
fn test_cli_reads_token_from_file() {
    let mut storage = tempfile::NamedTempFile::new().unwrap();
    write!(storage, r#"{{"token": "from-file"}}"#).unwrap();

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", ENDPOINT)
        .match_header("authorization", "Token from-file")
        .with_status(200)
        .with_body(r#"{"approval_url":"https://paypal.example/checkout/f"}"#)
        .create();

    checkout(&server.url())
        .arg("--token-file")
        .arg(storage.path())
        .arg("--ticket-id")
        .arg("TCK-1")
        .assert()
        .success();

    mock.assert();
}

#[test]
fn test_cli_unreachable_backend() {
    checkout("http://127.0.0.1:1")
        .arg("--ticket-id")
        .arg("TCK-1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error initiating payment"))
        .stderr(predicate::str::contains("ERROR"))
        .stderr(predicate::str::contains("error initiating payment"));
}
