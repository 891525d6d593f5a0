//! An interactive chat in the terminal.

#[macro_use]
extern crate tracing;

use std::env;
use std::io::Write as _;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use stepchat::core::{ErrorKind, Role};
use stepchat::openai::{OpenAIConfigBuilder, OpenAIProvider};
use stepchat::{Command, SessionBuilder};
use tokio::io::{self, AsyncBufReadExt};

const BAR_CHAR: &str = "▎";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let Ok(api_key) = env::var("DEEPSEEK_API_KEY") else {
        eprintln!("DEEPSEEK_API_KEY environment variable is not set");
        return;
    };
    let model =
        env::var("DEEPSEEK_MODEL").unwrap_or_else(|_| "deepseek-chat".into());

    let mut config = OpenAIConfigBuilder::with_api_key(api_key);
    if let Ok(base_url) = env::var("DEEPSEEK_BASE_URL") {
        config = config.with_base_url(base_url);
    }
    let model_provider = OpenAIProvider::new(config.build());

    let mut session = match SessionBuilder::with_model_provider(model_provider)
        .with_model(model)
        .build()
    {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");

    println!("Commands: /cot, /reset, /history, /log, /quit");

    loop {
        let prompt = if session.is_cot_enabled() { "cot> " } else { "> " };
        print!("{prompt}");
        std::io::stdout().flush().ok();

        let Some(line) = read_line().await else {
            break;
        };

        let message = match Command::parse(&line) {
            Command::Prompt(message) => message,
            Command::Empty => continue,
            Command::Quit => break,
            Command::ToggleCot => {
                let enabled = session.toggle_cot();
                println!(
                    "Chain-of-thought mode {}",
                    if enabled { "on" } else { "off" }
                );
                continue;
            }
            Command::Reset => {
                session.request_reset();
                println!("The next message starts a new conversation.");
                continue;
            }
            Command::History => {
                for msg in session.history() {
                    let role = match msg.role() {
                        Role::System => "system".bright_magenta().to_string(),
                        Role::User => "user".bright_green().to_string(),
                        Role::Assistant => {
                            "assistant".bright_cyan().to_string()
                        }
                    };
                    println!("{role}: {}", msg.content());
                }
                continue;
            }
            Command::Log => {
                for entry in session.reasoning_log() {
                    println!("{}", entry.dimmed());
                }
                continue;
            }
            Command::Unknown(name) => {
                println!("Unknown command: {name}");
                continue;
            }
        };

        let progress_bar = ProgressBar::new_spinner();
        progress_bar.set_style(progress_style.clone());
        progress_bar.set_message("🤔 Thinking...");
        progress_bar.enable_steady_tick(Duration::from_millis(100));

        let result = session.send_message(message).await;
        progress_bar.finish_and_clear();

        match result {
            Ok(reply) => {
                println!(
                    "{}🤖 {}",
                    BAR_CHAR.bright_cyan(),
                    reply.bright_white()
                );
            }
            Err(err) => {
                let bar = BAR_CHAR.bright_red();
                println!("{bar}{err}");
                if err.kind() == Some(ErrorKind::Authentication) {
                    println!("{bar}Check DEEPSEEK_API_KEY.");
                }
            }
        }
    }
}

async fn read_line() -> Option<String> {
    let mut stdin = io::BufReader::new(io::stdin());
    let mut line = String::new();

    match stdin.read_line(&mut line).await {
        Ok(count) => {
            if count == 0 {
                return None;
            }
            Some(line)
        }
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}
