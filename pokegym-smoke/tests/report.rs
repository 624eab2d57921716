//! Full smoke runs against a local fake Ollama server.

#![allow(clippy::unwrap_used)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use pokegym_smoke::{SmokeConfig, run_checks};
use serde_json::{Value, json};

const REPLY: &str = "Hello! Yes, I can see your message.";

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

async fn healthy_ollama(hits: Arc<AtomicUsize>) -> SocketAddr {
    let app = Router::new()
        .route(
            "/v1/chat/completions",
            post(
                |State(hits): State<Arc<AtomicUsize>>, Json(body): Json<Value>| async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    Json(json!({
                        "id": "chatcmpl-1",
                        "model": body["model"],
                        "choices": [{
                            "index": 0,
                            "message": {"role": "assistant", "content": REPLY},
                            "finish_reason": "stop"
                        }]
                    }))
                },
            ),
        )
        .with_state(hits);
    serve(app).await
}

async fn closed_port() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

async fn run(config: &SmokeConfig) -> (bool, String) {
    let mut out = Vec::new();
    let passed = run_checks(config, &mut out).await.unwrap();
    (passed, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn healthy_server_passes_everything() -> anyhow::Result<()> {
    let hits = Arc::new(AtomicUsize::new(0));
    let addr = healthy_ollama(hits.clone()).await;
    let config = SmokeConfig::default().with_base_url(format!("http://{addr}/v1"));

    let (passed, report) = run(&config).await;

    assert!(passed, "{report}");
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    let expected = format!(
        "Testing Ollama integration with Pokemon Gym...\n\
         \n\
         Test 1: Ollama Connection\n\
         ✅ Ollama connection successful!\n\
         Response: {REPLY}\n\
         \n\
         Test 2: Pokemon Agent Import\n\
         ✅ Pokemon agent with Ollama provider created successfully!\n\
         \n\
         🎉 All tests passed! Ollama integration is working.\n\
         \n\
         You can now run:\n\
         cargo run -p demo_agent -- --provider ollama --model gemma3:4b\n"
    );
    assert_eq!(report, expected);
    Ok(())
}

#[tokio::test]
async fn unreachable_server_fails_with_hints() {
    let addr = closed_port().await;
    let base_url = format!("http://{addr}/v1");
    let config = SmokeConfig::default().with_base_url(base_url.clone());

    let (passed, report) = run(&config).await;

    assert!(!passed);
    assert!(report.contains("❌ Ollama connection failed: "));
    assert!(report.contains("Troubleshooting:"));
    assert!(report.contains(&format!("4. Current base URL: {base_url}")));
    // The agent is only constructed, so it still passes.
    assert!(report.contains("✅ Pokemon agent with Ollama provider created successfully!"));
    assert!(report.ends_with("⚠️  Some tests failed. Please check the issues above.\n"));
    assert!(!report.contains("🎉"));
}

#[tokio::test]
async fn server_error_fails_connectivity() {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": {"message": "model runner has unexpectedly stopped"}})),
            )
        }),
    );
    let addr = serve(app).await;
    let config = SmokeConfig::default().with_base_url(format!("http://{addr}/v1"));

    let (passed, report) = run(&config).await;

    assert!(!passed);
    assert!(report.contains("model runner has unexpectedly stopped"));
}

#[tokio::test]
async fn agent_failure_alone_fails_the_run() {
    let addr = healthy_ollama(Arc::new(AtomicUsize::new(0))).await;
    let mut config = SmokeConfig::default().with_base_url(format!("http://{addr}/v1"));
    config.agent.provider = "missingno".to_owned();

    let (passed, report) = run(&config).await;

    assert!(!passed);
    assert!(report.contains("✅ Ollama connection successful!"));
    assert!(report.contains(
        "❌ Failed to create Pokemon agent with Ollama: unknown provider 'missingno'"
    ));
    assert!(report.contains("⚠️  Some tests failed."));
}

#[tokio::test]
async fn repeated_runs_agree() {
    let hits = Arc::new(AtomicUsize::new(0));
    let addr = healthy_ollama(hits.clone()).await;
    let config = SmokeConfig::default().with_base_url(format!("http://{addr}/v1"));

    let first = run(&config).await;
    let second = run(&config).await;
    assert_eq!(first, second);
    assert!(first.0);
    assert_eq!(hits.load(Ordering::SeqCst), 2);

    let down = SmokeConfig::default().with_base_url(format!("http://{}/v1", closed_port().await));
    let first = run(&down).await;
    let second = run(&down).await;
    assert_eq!(first.0, second.0);
    assert!(!first.0);
}
