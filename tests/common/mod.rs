use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin";

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    #[allow(dead_code)]
    child: Child,
}

impl TestServer {
    fn spawn(max_players: Option<i64>) -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests
        // Assumes debug profile; adjust if you run tests with --release
        let mut cmd = Command::new("target/debug/arena-api");
        cmd.env("ARENA_PORT", port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(max_players) = max_players {
            cmd.env("ARENA_MAX_PLAYERS", max_players.to_string());
        }

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

/// Server with the stock configuration (player limit 3).
pub async fn ensure_server() -> Result<&'static TestServer> {
    ensure_server_with_capacity(None).await
}

/// Server with a raised player limit, for test files whose tests register
/// players concurrently and would otherwise trip the capacity check. Each
/// integration test file is its own process, so the first caller in a file
/// decides its server's capacity.
#[allow(dead_code)]
pub async fn ensure_server_with_capacity(
    max_players: Option<i64>,
) -> Result<&'static TestServer> {
    let server = SERVER
        .get_or_init(|| TestServer::spawn(max_players).expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Register a player and return the issued credential.
#[allow(dead_code)]
pub async fn register_player(
    client: &reqwest::Client,
    base_url: &str,
    email: &str,
    pseudo: &str,
) -> Result<String> {
    let res = client
        .post(format!("{base_url}/player/register"))
        .query(&[("email", email), ("pseudo", pseudo), ("serverURL", "http://localhost")])
        .send()
        .await?;
    anyhow::ensure!(
        res.status() == StatusCode::OK,
        "registration of {} failed with {}",
        email,
        res.status()
    );
    Ok(res.text().await?)
}

/// Unregister a player with their own credentials, ignoring the outcome.
/// Used for cleanup so later tests start from a known roster.
#[allow(dead_code)]
pub async fn unregister_player(
    client: &reqwest::Client,
    base_url: &str,
    email: &str,
    credential: &str,
) {
    let _ = client
        .post(format!("{base_url}/player/unregister"))
        .query(&[("email", email)])
        .basic_auth(email, Some(credential))
        .send()
        .await;
}
