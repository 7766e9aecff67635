mod api;
mod cli_messages;
mod config;
mod dashboard;
mod environment;
mod models;
mod question_loader;
mod view;

use crate::api::ApiClient;
use crate::config::{Config, get_config_path};
use crate::dashboard::DashboardClient;
use crate::environment::Environment;
use crate::question_loader::QuestionLoader;
use crate::view::{DashboardView, QuestionView};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::sync::Arc;

/// Grade the backend assumes when none is given.
const DEFAULT_GRADE: &str = "1";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Override the question service base URL.
    #[arg(long, global = true, value_name = "URL")]
    question_url: Option<String>,

    /// Override the dashboard service base URL.
    #[arg(long, global = true, value_name = "URL")]
    dashboard_url: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch an adaptive question for a grade
    Question {
        /// Grade to request a question for. Falls back to the configured
        /// default grade, then to grade 1.
        #[arg(long, value_name = "GRADE")]
        grade: Option<String>,
    },
    /// Fetch the raw stored data
    Data,
    /// Run the server-side analysis job and print its report
    Analyze,
    /// Submit a free-text answer
    Respond {
        /// The answer text to store.
        #[arg(value_name = "TEXT")]
        text: String,
    },
    /// Save a default grade for the question command
    SetGrade {
        /// Grade to save.
        #[arg(value_name = "GRADE")]
        grade: String,
    },
    /// Delete the configuration file.
    ClearConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let environment_str = std::env::var("AULA_ENVIRONMENT").unwrap_or_default();
    let environment = environment_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    let config_path = get_config_path()?;
    let args = Args::parse();

    // Endpoint configuration is resolved once, here, and injected below.
    let question_url = args
        .question_url
        .unwrap_or_else(|| environment.question_api_url());
    let dashboard_url = args
        .dashboard_url
        .unwrap_or_else(|| environment.dashboard_api_url());

    match args.command {
        Command::Question { grade } => {
            let grade = match grade {
                Some(grade) => grade,
                None => match Config::load_from_file(&config_path) {
                    Ok(config) => {
                        print_cmd_info!("Using saved default grade.", "Grade: {}", config.grade);
                        config.grade
                    }
                    Err(_) => {
                        print_cmd_warn!(
                            "No grade given and no saved default.",
                            "Using grade {}",
                            DEFAULT_GRADE
                        );
                        DEFAULT_GRADE.to_string()
                    }
                },
            };

            let client = Arc::new(ApiClient::new(question_url)?);
            let loader = QuestionLoader::new(client, QuestionView::new());
            match loader.load_question(&grade).await {
                Ok(()) => {
                    println!("{}", loader.view().summary.text());
                    println!("{}", loader.view().question.text());
                    Ok(())
                }
                Err(e) => {
                    let shown = loader.view().question.text();
                    print_cmd_error!(shown.as_str(), e.to_string().as_str());
                    Err(e.into())
                }
            }
        }
        Command::Data => {
            let client = Arc::new(ApiClient::new(dashboard_url)?);
            let dashboard = DashboardClient::new(client, DashboardView::new());
            match dashboard.load_data().await {
                Ok(_) => {
                    println!("{}", dashboard.view().output.text());
                    Ok(())
                }
                Err(e) => {
                    print_cmd_error!("Failed to load data.", e.to_string().as_str());
                    Err(e.into())
                }
            }
        }
        Command::Analyze => {
            let client = Arc::new(ApiClient::new(dashboard_url)?);
            let dashboard = DashboardClient::new(client, DashboardView::new());
            match dashboard.run_analysis().await {
                Ok(_) => {
                    println!("{}", dashboard.view().output.text());
                    Ok(())
                }
                Err(e) => {
                    print_cmd_error!("Failed to run analysis.", e.to_string().as_str());
                    Err(e.into())
                }
            }
        }
        Command::Respond { text } => {
            let client = Arc::new(ApiClient::new(dashboard_url)?);
            let dashboard = DashboardClient::new(client, DashboardView::new());
            match dashboard.save_response(&text).await {
                Ok(_) => {
                    print_cmd_success!("Response saved.", "Server acknowledgement below.");
                    println!("{}", dashboard.view().output.text());
                    Ok(())
                }
                Err(e) => {
                    print_cmd_error!("Failed to save response.", e.to_string().as_str());
                    Err(e.into())
                }
            }
        }
        Command::SetGrade { grade } => {
            let config = Config::new(grade);
            config.save(&config_path)?;
            print_cmd_success!("Default grade saved.", "Grade: {}", config.grade);
            Ok(())
        }
        Command::ClearConfig => {
            println!("Clearing configuration file...");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}
