//! Interactive terminal loop over stdin/stdout.
//!
//! Messages are handled one at a time: the loop waits for the engine's
//! reply before showing the next prompt.

use attune_config::AppConfig;
use attune_engine::ChatEngine;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{self, AsyncBufReadExt, BufReader};

pub async fn run(
    engine: Arc<ChatEngine>,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    println!();
    println!("  Attune — emotion-aware chat");
    println!();
    println!("  Chat model:       {}", config.chat_model);
    println!("  Emotion model:    {}", config.classifier_model);
    println!();
    println!("  Type your message and press Enter.");
    println!("  Type 'exit' or Ctrl+D to quit.");
    println!();

    let stdin = io::stdin();
    let reader = BufReader::new(stdin);
    let mut lines = reader.lines();

    prompt()?;
    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if line.is_empty() {
            prompt()?;
            continue;
        }
        if matches!(line.as_str(), "exit" | "quit" | "/exit" | "/quit" | ":q") {
            break;
        }

        match engine.respond(&line).await {
            Ok(reply) => println!("\n  Bot > {reply}\n"),
            Err(e) => eprintln!("\n  [error] {e}\n"),
        }

        prompt()?;
    }

    Ok(())
}

fn prompt() -> std::io::Result<()> {
    print!("  You > ");
    std::io::stdout().flush()
}
