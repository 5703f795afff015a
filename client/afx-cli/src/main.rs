use afx_cli::{App, Cli, CliError, CliResult, Commands, decision_json, logger};
use afx_config::Config;
use afx_http::{CancelSignal, Credentials, Method, SignupRequest};
use afx_session::RestoreOutcome;

use std::process::ExitCode;

use clap::Parser;
use log::{info, warn};
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match startup() {
        Ok(app) => run(&app, cli.command).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing output: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn startup() -> CliResult<App> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting afx v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let (app, outcome) = App::from_config(&config)?;
    if outcome.is_restored() || matches!(outcome, RestoreOutcome::Empty) {
        info!("Session restore: {outcome:?}");
    } else {
        warn!("Session restore: {outcome:?}");
    }

    Ok(app)
}

async fn run(app: &App, command: Commands) -> CliResult<Value> {
    match command {
        Commands::Login {
            email,
            password,
            admin,
        } => {
            let identity = app.login(Credentials::new(email, password), admin).await?;
            serde_json::to_value(identity).map_err(CliError::invalid_json)
        }
        Commands::Signup {
            email,
            password,
            first_name,
            last_name,
            phone,
            country,
        } => {
            let request = SignupRequest {
                email,
                password,
                first_name,
                last_name,
                phone,
                country,
            };
            let identity = app.signup(request).await?;
            serde_json::to_value(identity).map_err(CliError::invalid_json)
        }
        Commands::Logout => {
            app.logout()?;
            Ok(json!({ "signed_out": true }))
        }
        Commands::Whoami => match app.whoami() {
            Some(identity) => serde_json::to_value(identity).map_err(CliError::invalid_json),
            None => Ok(Value::String("not signed in".to_string())),
        },
        Commands::Route { path, from, guest } => {
            let decision = app.route(&path, from.as_deref(), guest)?;
            Ok(decision_json(&decision))
        }
        Commands::Get { endpoint } => call(app, Method::GET, &endpoint, None).await,
        Commands::Post { endpoint, data } => call(app, Method::POST, &endpoint, data).await,
        Commands::Put { endpoint, data } => call(app, Method::PUT, &endpoint, data).await,
        Commands::Delete { endpoint } => call(app, Method::DELETE, &endpoint, None).await,
    }
}

async fn call(app: &App, method: Method, endpoint: &str, data: Option<String>) -> CliResult<Value> {
    let data = data
        .map(|raw| serde_json::from_str::<Value>(&raw))
        .transpose()
        .map_err(CliError::invalid_json)?;

    // Ctrl-C abandons the in-flight request
    let signal = CancelSignal::new();
    let on_interrupt = signal.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted");
            on_interrupt.cancel();
        }
    });

    app.call(method, endpoint, data, &signal).await
}
