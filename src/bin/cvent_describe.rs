//! Print the field names of a Cvent object type.
//!
//! Logs in with credentials from the environment and describes one object
//! type.
//!
//! ```sh
//! export CVENT_ACCOUNT_NUMBER=... CVENT_USERNAME=... CVENT_PASSWORD=...
//! cargo run --bin cvent-describe -- Event --sandbox
//! ```

use cvent_api::{AccountCredentials, ClientConfig, CventClient};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: cvent-describe <ObjectType> [--sandbox] [--no-custom]";

#[derive(Debug, PartialEq)]
struct Args {
    object_type: String,
    sandbox: bool,
    include_custom: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut object_type = None;
    let mut sandbox = false;
    let mut include_custom = true;

    for arg in args {
        match arg.as_str() {
            "--sandbox" => sandbox = true,
            "--no-custom" => include_custom = false,
            "-h" | "--help" => return Err(USAGE.to_string()),
            flag if flag.starts_with("--") => return Err(format!("Unknown option: {flag}\n{USAGE}")),
            _ if object_type.is_some() => return Err(format!("Unexpected argument: {arg}\n{USAGE}")),
            _ => object_type = Some(arg),
        }
    }

    Ok(Args {
        object_type: object_type.ok_or_else(|| USAGE.to_string())?,
        sandbox,
        include_custom,
    })
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1)).unwrap_or_else(|message| {
        eprintln!("{message}");
        std::process::exit(2);
    });

    let credentials = AccountCredentials::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!();
        eprintln!("  Set CVENT_ACCOUNT_NUMBER, CVENT_USERNAME and CVENT_PASSWORD.");
        std::process::exit(1);
    });

    let config = ClientConfig::builder().sandbox(args.sandbox).build();
    let mut client = CventClient::new(config).unwrap_or_else(|e| {
        eprintln!("Error: Failed to create client: {e}");
        std::process::exit(1);
    });

    if let Err(e) = client.login_with_credentials(&credentials).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    info!(object_type = %args.object_type, "Describing");

    match client.describe_fields(&args.object_type, args.include_custom).await {
        Ok(fields) => {
            for field in fields {
                println!("{field}");
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
