//! Client example demonstrating credential checks against a running server.
//!
//! Run with: cargo run -p login-app --example client_example --no-default-features --features sqlite

use login_client::LoginClient;
use login_hex::{LoginService, inbound::HttpServer};
use login_repo::SqliteRepo;
use login_types::{PasswordDigest, UserId};
use std::net::SocketAddr;
use tempfile::tempdir;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Find an available port
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    let port = addr.port();
    drop(listener);

    // Use a temp file-backed SQLite DB
    let tmp = tempdir()?;
    let db_path = tmp.path().join("users.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    println!("🚀 Starting server on port {port}...");
    println!("   Database: {db_url}");

    // Build store (handles connection and migration)
    let repo = SqliteRepo::new(&db_url).await?;

    // Records are provisioned out of band; only the digest is stored
    let digest = PasswordDigest::hash("secret")?;
    sqlx::query("INSERT INTO users (id, username, password_hash, created_at) VALUES (?, ?, ?, ?)")
        .bind(UserId::new().to_string())
        .bind("alice")
        .bind(digest.as_str())
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(repo.pool())
        .await?;
    println!("✅ Provisioned user alice");

    // Start server in background
    let service = LoginService::new(repo);
    let server = HttpServer::new(service);
    let router = server.router();

    let server_addr = format!("127.0.0.1:{port}");
    tokio::spawn(async move {
        let listener = match TcpListener::bind(&server_addr).await {
            Ok(listener) => listener,
            Err(e) => {
                eprintln!("failed to bind {server_addr}: {e}");
                return;
            }
        };
        if let Err(e) = axum::serve(listener, router.into_make_service()).await {
            eprintln!("server error: {e}");
        }
    });

    // Wait for server to start
    tokio::time::sleep(std::time::Duration::from_millis(500)).await;

    // Create client
    let base_url = format!("http://127.0.0.1:{port}");
    let client = LoginClient::new(&base_url);

    // Health check
    let health = client.health().await?;
    println!("✅ Server health: {health}");

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: credential checks
    // ─────────────────────────────────────────────────────────────────────────

    let accepted = client.login("alice", "secret").await?;
    println!("✅ alice/secret accepted: {accepted}");

    let rejected = client.login("alice", "wrong").await?;
    println!("✅ alice/wrong accepted: {rejected}");

    let unknown = client.login("eve", "").await?;
    println!("✅ eve accepted: {unknown}");

    let case = client.login("Alice", "secret").await?;
    println!("✅ Alice/secret accepted: {case}");

    println!("\n🎉 Example completed successfully!");

    Ok(())
}
