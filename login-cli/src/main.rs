//! Login CLI
//!
//! Command-line interface for the credential verification API, plus an
//! offline helper for producing password digests.

use anyhow::Result;
use clap::{Parser, Subcommand};

use login_client::LoginClient;
use login_types::PasswordDigest;

#[derive(Parser)]
#[command(name = "login")]
#[command(author, version, about = "Credential verification CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Login API
    #[arg(long, env = "LOGIN_API_URL", default_value = "http://localhost:8000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a username/password pair against the server
    Verify {
        #[arg(long)]
        username: String,
        /// Password to check (falls back to LOGIN_PASSWORD)
        #[arg(long, env = "LOGIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Hash a password for a record provisioned outside the service
    HashPassword {
        /// Plaintext password (falls back to LOGIN_PASSWORD)
        #[arg(env = "LOGIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Health => {
            let client = LoginClient::new(&cli.api_url);
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Verify { username, password } => {
            let client = LoginClient::new(&cli.api_url);
            if client.login(&username, &password).await? {
                println!("✓ Credentials accepted for {}", username);
            } else {
                println!("✗ Credentials rejected for {}", username);
                std::process::exit(1);
            }
        }

        Commands::HashPassword { password } => {
            let digest = PasswordDigest::hash(&password)?;
            println!("{}", digest.as_str());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_verify() {
        let cli = Cli::try_parse_from([
            "login",
            "--api-url",
            "http://example.test",
            "verify",
            "--username",
            "alice",
            "--password",
            "secret",
        ])
        .unwrap();

        assert_eq!(cli.api_url, "http://example.test");
        match cli.command {
            Commands::Verify { username, password } => {
                assert_eq!(username, "alice");
                assert_eq!(password, "secret");
            }
            _ => panic!("expected verify"),
        }
    }

    #[test]
    fn test_parse_hash_password() {
        let cli = Cli::try_parse_from(["login", "hash-password", "secret"]).unwrap();
        assert!(matches!(cli.command, Commands::HashPassword { password } if password == "secret"));
    }
}
