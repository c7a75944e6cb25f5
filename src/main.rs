use std::env;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use zoom_client::{ClientSettings, ComponentKind};

const USAGE: &str = "usage: zoom_client <component> <endpoint> [key=value ...]";

/// Split `key=value` arguments; returns the first argument without `=` as the error
fn parse_params<I>(args: I) -> Result<Vec<(String, String)>, String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => Ok((key.to_string(), value.to_string())),
            None => Err(pair),
        })
        .collect()
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = env::args().skip(1);
    let (Some(component), Some(endpoint)) = (args.next(), args.next()) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let kind = match component.parse::<ComponentKind>() {
        Ok(kind) => kind,
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let params = match parse_params(args) {
        Ok(params) => params,
        Err(arg) => {
            eprintln!("expected key=value, got {arg:?}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let client = match ClientSettings::from_env().and_then(ClientSettings::build_client) {
        Ok(client) => client,
        Err(err) => {
            error!("Failed to configure Zoom client: {}", err);
            return ExitCode::FAILURE;
        }
    };

    info!("Requesting {} through the {} component", endpoint, kind);

    let response = match client.component(kind).get_request(&endpoint, &params).await {
        Ok(response) => response,
        Err(err) => {
            error!("Request failed: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let status = response.status();
    match response.text().await {
        Ok(body) => {
            println!("{status}");
            println!("{body}");
            if status.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            error!("Failed to read response body: {}", err);
            ExitCode::FAILURE
        }
    }
}
