//! Runs of the `demo-agent` binary.

#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

fn demo_agent() -> Command {
    let mut cmd = assert_cmd::cargo_bin_cmd!("demo-agent");
    cmd.env_remove("RUST_LOG").env_remove("OLLAMA_BASE_URL");
    cmd
}

/// Answers with the user prompt, prefixed by the model name.
async fn echo(Json(body): Json<Value>) -> Json<Value> {
    let model = body["model"].as_str().unwrap_or_default();
    let user = body["messages"][1]["content"].as_str().unwrap_or_default();
    Json(json!({
        "choices": [{
            "message": {"role": "assistant", "content": format!("{model} says: {user}")},
            "finish_reason": "stop"
        }]
    }))
}

#[tokio::test(flavor = "multi_thread")]
async fn answers_one_prompt_against_ollama() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route("/v1/chat/completions", post(echo));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    let base_url = format!("http://{addr}/v1");

    let env_url = base_url.clone();
    let output = tokio::task::spawn_blocking(move || {
        demo_agent()
            .env("OLLAMA_BASE_URL", env_url)
            .args(["--prompt", "Walk to Viridian City", "--timeout-secs", "5"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(output.status.code(), Some(0), "{stdout}");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            format!("Agent ready: ollama / gemma3:4b at {base_url}").as_str(),
            "gemma3:4b says: Walk to Viridian City",
        ]
    );
}

#[test]
fn unknown_provider_exits_with_failure() {
    let output = demo_agent()
        .args(["--provider", "pokeapi", "--model", "gemma3:4b"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unknown provider 'pokeapi'"));
}
