//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::markdown::referenced_bills;
use crate::output::BillCard;
use crate::progress::StreamPrinter;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use statehouse_application::{
    AskAssistantUseCase, AskError, LlmSession, SessionOptions, ViewBillUseCase,
};
use statehouse_domain::{BillNumber, ChatTurn};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Interactive chat REPL
///
/// Opens one assistant session for the whole conversation so follow-up
/// questions keep their context. Returns the completed turns on exit for
/// HTML transcript export.
pub struct ChatRepl {
    ask: Arc<AskAssistantUseCase>,
    bills: Option<Arc<ViewBillUseCase>>,
    options: SessionOptions,
    show_progress: bool,
    color: bool,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(ask: Arc<AskAssistantUseCase>, options: SessionOptions) -> Self {
        Self {
            ask,
            bills: None,
            options,
            show_progress: true,
            color: true,
        }
    }

    /// Enable the `/bill` command.
    pub fn with_bill_lookup(mut self, bills: Arc<ViewBillUseCase>) -> Self {
        self.bills = Some(bills);
        self
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Set whether to use colored output
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Run the interactive REPL, returning the completed turns.
    pub async fn run(self) -> RlResult<Vec<ChatTurn>> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("statehouse").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        let mut turns: Vec<ChatTurn> = Vec::new();
        let session = match self.ask.open_session(&self.options).await {
            Ok(session) => session,
            Err(e) => {
                eprintln!("Error: {}", e);
                return Ok(turns);
            }
        };

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        let _ = rl.add_history_entry(line);
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    if let Some(turn) = self.process_question(session.as_ref(), line).await {
                        turns.push(turn);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(turns)
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│           Statehouse - Chat Mode            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.options.model);
        println!();
        println!("Commands:");
        println!("  /help           - Show this help");
        println!("  /bill <number>  - Look up a bill (e.g. /bill S1528)");
        println!("  /model          - Show the current model");
        println!("  /quit           - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&self, cmd: &str) -> bool {
        let (command, arg) = match cmd.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (cmd, ""),
        };

        match command {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /bill <number>   - Look up a bill (e.g. /bill S1528)");
                println!("  /model           - Show the current model");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            "/model" => {
                println!("Current model: {}", self.options.model);
                false
            }
            "/bill" => {
                self.lookup_bill(arg).await;
                false
            }
            _ => {
                println!("Unknown command: {}", command);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn lookup_bill(&self, arg: &str) {
        let Some(bills) = &self.bills else {
            println!("Bill lookup is not configured");
            return;
        };
        let bill = match BillNumber::parse(arg) {
            Ok(bill) => bill,
            Err(_) => {
                println!("Not a bill number: {:?} (expected e.g. S1528 or A405B)", arg);
                return;
            }
        };

        match bills.execute(&bill).await {
            Ok(view) => {
                println!();
                println!("{}", BillCard::new(self.color).format(&view));
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    async fn process_question(&self, session: &dyn LlmSession, question: &str) -> Option<ChatTurn> {
        println!();

        let printer = StreamPrinter::new(self.show_progress);
        let token = CancellationToken::new();
        let watcher = {
            let token = token.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    token.cancel();
                }
            })
        };

        let result = self
            .ask
            .ask(session, question, &printer, Some(&token))
            .await;
        watcher.abort();

        match result {
            Ok(outcome) => {
                self.print_bill_hints(&outcome.linked);
                println!();
                Some(ChatTurn::new(&self.options.model, question, &outcome.linked))
            }
            Err(AskError::Cancelled) => {
                println!("(interrupted)");
                None
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                None
            }
        }
    }

    fn print_bill_hints(&self, linked: &str) {
        let bills = referenced_bills(linked);
        if bills.is_empty() {
            return;
        }
        let hint = format!("Bills mentioned: {} (try /bill <number>)", bills.join(", "));
        if self.color {
            println!("{}", hint.dimmed());
        } else {
            println!("{}", hint);
        }
    }
}
