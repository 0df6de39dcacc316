//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::{ConsoleFormatter, ReplConfig, ThinkingSpinner};
use autostream_application::{HandleMessageUseCase, TurnOutcome};
use autostream_domain::{SessionId, SessionRepository};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use tracing::warn;

/// Slash commands understood by the REPL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    History,
    Reset,
    Knowledge,
    Quit,
    Unknown(String),
}

/// One line of user input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    Empty,
    /// `exit` or `quit`, any case.
    Exit,
    Command(ReplCommand),
    Message(String),
}

impl ReplInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ReplInput::Empty;
        }
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            return ReplInput::Exit;
        }
        if line.starts_with('/') {
            let command = match line {
                "/help" | "/h" | "/?" => ReplCommand::Help,
                "/history" => ReplCommand::History,
                "/reset" => ReplCommand::Reset,
                "/kb" => ReplCommand::Knowledge,
                "/quit" | "/exit" | "/q" => ReplCommand::Quit,
                other => ReplCommand::Unknown(other.to_string()),
            };
            return ReplInput::Command(command);
        }
        ReplInput::Message(line.to_string())
    }
}

/// Interactive chat REPL bound to one session
pub struct ChatRepl<R: SessionRepository + 'static> {
    use_case: Arc<HandleMessageUseCase<R>>,
    session: SessionId,
    config: ReplConfig,
}

impl<R: SessionRepository + 'static> ChatRepl<R> {
    pub fn new(use_case: Arc<HandleMessageUseCase<R>>, session: SessionId) -> Self {
        Self {
            use_case,
            session,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL until exit, end of input, or a captured lead.
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(path) = &self.config.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        println!("{}", ConsoleFormatter::welcome());

        loop {
            println!();
            match rl.readline(&self.config.prompt) {
                Ok(line) => match ReplInput::parse(&line) {
                    ReplInput::Empty => continue,
                    ReplInput::Exit => break,
                    ReplInput::Command(command) => {
                        if self.handle_command(command).await {
                            break;
                        }
                    }
                    ReplInput::Message(text) => {
                        let _ = rl.add_history_entry(text.as_str());
                        if self.process_message(&text).await {
                            break;
                        }
                    }
                },
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("{}", ConsoleFormatter::error(&format!("{:?}", err)));
                    break;
                }
            }
        }

        if let Some(path) = &self.config.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Run one turn and print it. Returns true once a lead was captured.
    async fn process_message(&self, text: &str) -> bool {
        let spinner = self
            .config
            .show_spinner
            .then(|| ThinkingSpinner::start("Thinking..."));

        let result = self.use_case.handle(&self.session, text).await;

        if let Some(spinner) = spinner {
            spinner.finish();
        }

        match result {
            Ok(outcome) => {
                println!("{}", ConsoleFormatter::turn(&outcome));
                Self::ends_conversation(&outcome)
            }
            Err(e) => {
                warn!("Turn failed: {}", e);
                eprintln!("{}", ConsoleFormatter::error(&e.to_string()));
                false
            }
        }
    }

    fn ends_conversation(outcome: &TurnOutcome) -> bool {
        outcome.lead_captured()
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::History => match self.use_case.history(&self.session).await {
                Ok(messages) => println!("{}", ConsoleFormatter::history(&messages)),
                Err(e) => eprintln!("{}", ConsoleFormatter::error(&e.to_string())),
            },
            ReplCommand::Reset => match self.use_case.reset(&self.session).await {
                Ok(_) => println!("Session {} cleared.", self.session),
                Err(e) => eprintln!("{}", ConsoleFormatter::error(&e.to_string())),
            },
            ReplCommand::Knowledge => {
                print!(
                    "{}",
                    ConsoleFormatter::knowledge(self.use_case.turn_processor().knowledge())
                );
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    fn print_help() {
        println!("Commands:");
        println!("  /help, /h, /?    - Show this help");
        println!("  /history         - Show this session's messages");
        println!("  /reset           - Forget this session's messages");
        println!("  /kb              - Show the knowledge base");
        println!("  /quit, exit      - Leave the chat");
    }
}
