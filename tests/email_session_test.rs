use anyhow::Result;
use ceo_mailer::core::prompt::SOFTWARE_INVESTMENT_SENTENCE;
use ceo_mailer::core::session::{EMAIL_HEADER, EMAIL_RULE, FAILURE_MESSAGE};
use ceo_mailer::{ConsoleTerminal, EmailGenerator, EmailSession, OpenAiClient, Settings};
use httpmock::prelude::*;
use std::io::Cursor;
use std::net::TcpListener;

type TestSession = EmailSession<ConsoleTerminal<Cursor<Vec<u8>>, Vec<u8>>, OpenAiClient>;

fn settings_for(server: &MockServer) -> Settings {
    Settings {
        api_key: "test-key".to_string(),
        base_url: server.url("/v1"),
        model: "gpt-3.5-turbo".to_string(),
        timeout_seconds: 5,
    }
}

fn session_for(server: &MockServer, input: &str) -> Result<TestSession> {
    let settings = settings_for(server);
    let client = OpenAiClient::from_config(&settings)?;
    let terminal = ConsoleTerminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    Ok(EmailSession::new(
        terminal,
        EmailGenerator::new(client, settings.model.clone()),
    ))
}

fn printed(session: &TestSession) -> String {
    String::from_utf8_lossy(session.terminal().writer()).into_owned()
}

fn completion(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn test_end_to_end_prints_generated_email() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .header("Authorization", "Bearer test-key")
            .body_contains("\"model\":\"gpt-3.5-turbo\"")
            .body_contains("\"role\":\"system\"")
            .body_contains("John Doe, CEO of Test Company");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(completion("Generated Email Content\n"));
    });

    let mut session = session_for(&server, "John Doe\nTest Company\nManufacturing\n")?;
    let email = session.run().await?;

    api_mock.assert();
    assert_eq!(email.as_deref(), Some("Generated Email Content"));

    let output = printed(&session);
    assert!(output.starts_with("Welcome to the Email Generator for Everyday Capital\n"));
    assert!(output.contains("Enter the CEO's name: "));
    assert!(output.contains("Enter the company name: "));
    assert!(output.contains("Enter a short description of the company: "));
    assert!(output.contains("\nGenerating email...\n"));
    assert!(output.ends_with(&format!(
        "{}\n{}\nGenerated Email Content\n",
        EMAIL_HEADER, EMAIL_RULE
    )));
    assert!(session.terminal().is_closed());
    Ok(())
}

#[tokio::test]
async fn test_software_description_adds_investment_sentence() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .body_contains(SOFTWARE_INVESTMENT_SENTENCE);
        then.status(200).json_body(completion("Dear Jane Smith,"));
    });

    let mut session = session_for(&server, "Jane Smith\nTech Corp\nSOFTWARE Development\n")?;
    let email = session.run().await?;

    api_mock.assert();
    assert_eq!(email.as_deref(), Some("Dear Jane Smith,"));
    Ok(())
}

#[tokio::test]
async fn test_other_description_leaves_sentence_out() -> Result<()> {
    let server = MockServer::start();
    let software_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .body_contains("We have experience investing in the software space");
        then.status(500);
    });
    let plain_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .body_contains("their industry (Manufacturing)");
        then.status(200).json_body(completion("Dear John Doe,"));
    });

    let mut session = session_for(&server, "John Doe\nTest Company\nManufacturing\n")?;
    let email = session.run().await?;

    assert_eq!(software_mock.hits(), 0);
    plain_mock.assert();
    assert_eq!(email.as_deref(), Some("Dear John Doe,"));
    Ok(())
}

#[tokio::test]
async fn test_api_failure_prints_failure_message() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(500)
            .json_body(serde_json::json!({"error": {"message": "API Error"}}));
    });

    let mut session = session_for(&server, "John Doe\nTest Company\nManufacturing\n")?;
    let email = session.run().await?;

    api_mock.assert();
    assert!(email.is_none());
    let output = printed(&session);
    assert!(output.ends_with(&format!("{}\n", FAILURE_MESSAGE)));
    assert!(!output.contains(EMAIL_HEADER));
    assert!(session.terminal().is_closed());
    Ok(())
}

#[tokio::test]
async fn test_malformed_response_prints_failure_message() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200)
            .json_body(serde_json::json!({"choices": [{"finish_reason": "stop"}]}));
    });

    let mut session = session_for(&server, "John Doe\nTest Company\nManufacturing\n")?;
    let email = session.run().await?;

    assert!(email.is_none());
    assert!(printed(&session).contains(FAILURE_MESSAGE));
    Ok(())
}

#[tokio::test]
async fn test_blank_completion_prints_failure_message() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200).json_body(completion("   \n"));
    });

    let mut session = session_for(&server, "John Doe\nTest Company\nManufacturing\n")?;
    let email = session.run().await?;

    api_mock.assert();
    assert!(email.is_none());
    let output = printed(&session);
    assert!(output.ends_with(&format!("{}\n", FAILURE_MESSAGE)));
    assert!(!output.contains(EMAIL_HEADER));
    assert!(session.terminal().is_closed());
    Ok(())
}

#[tokio::test]
async fn test_unreachable_api_prints_failure_message() -> Result<()> {
    let server = MockServer::start();
    let closed_addr = {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        listener.local_addr()?
    };
    let mut settings = settings_for(&server);
    settings.base_url = format!("http://{}/v1", closed_addr);
    settings.timeout_seconds = 2;

    let terminal = ConsoleTerminal::new(
        Cursor::new(b"John Doe\nTest Company\nManufacturing\n".to_vec()),
        Vec::new(),
    );
    let client = OpenAiClient::from_config(&settings)?;
    let mut session = EmailSession::new(terminal, EmailGenerator::new(client, "gpt-3.5-turbo"));

    let email = session.run().await?;

    assert!(email.is_none());
    let output = String::from_utf8_lossy(session.terminal().writer()).into_owned();
    assert!(output.contains(FAILURE_MESSAGE));
    Ok(())
}

#[tokio::test]
async fn test_short_input_skips_api_and_closes_terminal() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200).json_body(completion("unused"));
    });

    let mut session = session_for(&server, "John Doe\n")?;
    let result = session.run().await;

    assert!(result.is_err());
    assert_eq!(api_mock.hits(), 0);
    assert!(session.terminal().is_closed());
    Ok(())
}
