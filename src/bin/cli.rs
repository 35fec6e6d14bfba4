use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use jobly::jobly_auth::{CredentialCodec, CredentialError, Identity};
use jobly::middleware::auth::bearer_token;
use jobly::jobly_config::JwtConfig;

#[derive(Parser)]
#[command(name = "jobly-cli")]
#[command(about = "Jobly CLI - credential tools for development and support", long_about = None)]
struct Cli {
    /// Signing secret (defaults to SECRET_KEY)
    #[arg(long, global = true)]
    secret: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign a credential for a user
    CreateToken {
        /// Username to embed in the credential
        #[arg(short = 'u', long)]
        username: String,

        /// Mark the identity as an admin
        #[arg(long)]
        admin: bool,
    },
    /// Verify a credential and print the identity it carries
    VerifyToken {
        /// The credential, with or without a `Bearer ` prefix
        token: String,
    },
}

fn main() {
    dotenv().ok();

    let cli = Cli::parse();
    let jwt_config = match cli.secret {
        Some(secret) => JwtConfig::new(secret),
        None => JwtConfig::from_env(),
    };
    let codec = CredentialCodec::new(&jwt_config);

    match cli.command {
        Commands::CreateToken { username, admin } => match create_token(&codec, username, admin) {
            Ok(token) => println!("{}", token),
            Err(e) => {
                eprintln!("❌ Error creating token: {}", e);
                std::process::exit(1);
            }
        },
        Commands::VerifyToken { token } => match verify_token(&codec, &token) {
            Ok(identity) => {
                println!("✅ Valid credential");
                println!("   Username: {}", identity.username());
                println!("   Admin: {}", identity.is_admin());
            }
            Err(e) => {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
    }
}

fn create_token(
    codec: &CredentialCodec,
    username: String,
    admin: bool,
) -> Result<String, CredentialError> {
    codec.create(&Identity::new(username, admin))
}

/// Accepts a bare token or a full `Authorization` header value.
fn verify_token(codec: &CredentialCodec, token: &str) -> Result<Identity, CredentialError> {
    codec.verify(bearer_token(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_codec() -> CredentialCodec {
        CredentialCodec::new(&JwtConfig::new("cli-test-secret"))
    }

    #[test]
    fn test_create_then_verify() {
        let codec = test_codec();
        let token = create_token(&codec, "u1".to_string(), true).unwrap();

        assert_eq!(verify_token(&codec, &token).unwrap(), Identity::admin("u1"));
    }

    #[test]
    fn test_verify_accepts_bearer_prefix() {
        let codec = test_codec();
        let token = create_token(&codec, "u1".to_string(), false).unwrap();

        let identity = verify_token(&codec, &format!("Bearer {}", token)).unwrap();
        assert_eq!(identity, Identity::user("u1"));
    }

    #[test]
    fn test_verify_with_other_secret_fails() {
        let token = create_token(&test_codec(), "u1".to_string(), false).unwrap();
        let other = CredentialCodec::new(&JwtConfig::new("another-secret"));

        assert!(verify_token(&other, &token).is_err());
    }

    #[test]
    fn test_cli_parses_commands() {
        let args = [
            "jobly-cli", "--secret", "s", "create-token", "-u", "u1", "--admin",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.secret.as_deref(), Some("s"));
        assert!(matches!(
            cli.command,
            Commands::CreateToken { ref username, admin: true } if username == "u1"
        ));

        let cli = Cli::try_parse_from(["jobly-cli", "verify-token", "abc"]).unwrap();
        assert!(matches!(cli.command, Commands::VerifyToken { ref token } if token == "abc"));
    }
}
