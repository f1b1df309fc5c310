use std::io::{self, Write};

use colored::Colorize;
use indicatif::ProgressBar;

use crate::sync::{Confirm, ConfirmPrompt};

/// Asks the person at the terminal to settle uncertain matches.
///
/// Only "y" or "yes" (any case) count as agreement; anything else,
/// including a closed stdin, is a no.
pub struct TerminalConfirm {
    progress: Option<ProgressBar>,
}

impl TerminalConfirm {
    pub fn new(progress: Option<ProgressBar>) -> Self {
        Self { progress }
    }

    fn ask(prompt: &ConfirmPrompt) -> bool {
        print!("[{}] {}", "?".cyan().bold(), prompt);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => is_yes(&answer),
        }
    }
}

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        match &self.progress {
            Some(pb) => pb.suspend(|| Self::ask(prompt)),
            None => Self::ask(prompt),
        }
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
