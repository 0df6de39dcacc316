//! Console output formatter for conversation turns

use autostream_application::TurnOutcome;
use autostream_domain::{Intent, KnowledgeBase, Lead, Message, Role};
use colored::Colorize;

const BANNER_WIDTH: usize = 50;

/// Formats turns, leads and session state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn welcome() -> String {
        "--- AutoStream AI Online (Resilient Mode) ---"
            .bold()
            .to_string()
    }

    /// Intent line printed before every reply.
    pub fn intent(intent: Intent) -> String {
        format!("[Internal Intent: {}]", intent).dimmed().to_string()
    }

    pub fn reply(reply: &str) -> String {
        format!("{} {}", "Agent:".cyan().bold(), reply)
    }

    /// Both lines of a turn, plus the lead banner when one was captured.
    pub fn turn(outcome: &TurnOutcome) -> String {
        let mut output = format!(
            "{}\n{}",
            Self::intent(outcome.result.intent),
            Self::reply(&outcome.result.reply)
        );
        if let Some(lead) = &outcome.lead {
            output.push('\n');
            output.push_str(&Self::lead_banner(lead));
        }
        output
    }

    pub fn lead_banner(lead: &Lead) -> String {
        let rule = "!".repeat(BANNER_WIDTH);
        format!(
            "\n{}\n{}\n{}\n",
            rule.green(),
            format!(
                "SUCCESS: Lead captured for {} ({}) on {}",
                lead.name, lead.email, lead.platform
            )
            .green()
            .bold(),
            rule.green()
        )
    }

    pub fn history(messages: &[Message]) -> String {
        if messages.is_empty() {
            return "(no messages yet)".dimmed().to_string();
        }
        messages
            .iter()
            .map(|m| {
                let label = match m.role {
                    Role::User => "You:".yellow().bold(),
                    Role::Agent => "Agent:".cyan().bold(),
                };
                format!("{} {}", label, m.content)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn knowledge(kb: &KnowledgeBase) -> String {
        let mut output = String::new();
        for (category, items) in kb.categories() {
            output.push_str(&format!("{}\n", category.cyan().bold()));
            for (item, description) in items {
                output.push_str(&format!("  {}: {}\n", item.bold(), description));
            }
        }
        output
    }

    pub fn error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }
}
