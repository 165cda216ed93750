//! Interactive chat loop for the health assistant.
//!
//! Wraps `rustyline_async::Readline` for async line input and drives one
//! `AssistantSession` until EOF (Ctrl+D) or interrupt (Ctrl+C). The
//! session does all the work; this loop only reads lines and renders
//! turns.

use std::time::Duration;

use console::style;
use rustyline_async::{Readline, ReadlineEvent};

use gramin_core::chat::AssistantSession;
use gramin_infra::genai::GeminiConversation;
use gramin_infra::secret::API_KEY_VAR;
use gramin_types::chat::{ChatPhase, ConversationTurn, TurnRole};

use crate::state::AppState;

/// Run the interactive chat loop.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    let mut session: AssistantSession<GeminiConversation> = AssistantSession::new();
    session.start_session(&state.service);

    println!();
    println!(
        "  {} {}",
        style("GraminHealth").cyan().bold(),
        style("health assistant").dim()
    );
    println!("  {}", style("Ctrl+C or Ctrl+D to leave").dim());
    println!();

    if session.phase() == ChatPhase::Disconnected {
        eprintln!(
            "  {} No API key found. Set {} to enable the assistant.",
            style("!").yellow().bold(),
            style(API_KEY_VAR).bold()
        );
        println!();
    }

    // The locally synthesized welcome turn
    render_assistant_turn(&session.transcript()[0]);

    let (mut rl, _stdout) = Readline::new("you> ".to_string())?;

    loop {
        match rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => {
                let text = line.trim().to_string();
                if text.is_empty() {
                    continue;
                }
                if text == "/quit" || text == "/exit" {
                    break;
                }
                rl.add_history_entry(text.clone());

                let spinner = indicatif::ProgressBar::new_spinner();
                spinner.set_style(
                    indicatif::ProgressStyle::default_spinner()
                        .template("{spinner:.cyan} {msg}")
                        .unwrap(),
                );
                spinner.set_message("thinking...");
                spinner.enable_steady_tick(Duration::from_millis(80));

                session.send_message(&text).await;

                spinner.finish_and_clear();

                if let Some(turn) = session.last_turn() {
                    if turn.role == TurnRole::Assistant {
                        render_assistant_turn(turn);
                    }
                }
            }
            Ok(ReadlineEvent::Eof) | Ok(ReadlineEvent::Interrupted) => break,
            Err(_) => break,
        }
    }

    println!();
    println!(
        "  {}",
        style("Take care. For emergencies call 102 or 108.").dim()
    );
    Ok(())
}

fn render_assistant_turn(turn: &ConversationTurn) {
    if turn.is_error {
        println!("  {} {}", style("!").red().bold(), style(&turn.text).red());
    } else {
        println!("  {}", turn.text);
    }
    println!();
}
