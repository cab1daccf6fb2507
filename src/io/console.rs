use super::{Choice, PromptReader};
use std::io::{self, BufRead, Write};

/// Line-oriented reader over stdin, the default interactive collaborator.
#[derive(Debug, Default)]
pub struct ConsoleReader;

impl ConsoleReader {
    pub fn new() -> Self {
        Self
    }

    fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok()?;

        let mut line = String::new();
        let bytes = io::stdin().lock().read_line(&mut line).ok()?;
        if bytes == 0 {
            // Stream closed: a failed read, not a crash.
            return None;
        }
        Some(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl PromptReader for ConsoleReader {
    fn read_number(&mut self, prompt: &str) -> Option<f64> {
        self.read_line(prompt)?.trim().parse().ok()
    }

    fn read_text(&mut self, prompt: &str) -> Option<String> {
        self.read_line(prompt)
    }

    fn choose(&mut self, prompt: &str, choices: &[Choice]) -> Option<String> {
        if choices.is_empty() {
            return None;
        }

        println!("{}", prompt);
        for choice in choices {
            println!("{} -> {}", choice.label, choice.key);
        }

        let picked = self.read_line("")?;
        let picked = picked.trim();
        choices
            .iter()
            .find(|choice| choice.key == picked)
            .map(|choice| choice.key.clone())
    }
}
