use bidding_engine::LineReader;
use std::io::{self, BufRead, Write};

/// Line input from stdin, messages to stdout.
#[derive(Debug, Default)]
pub struct Terminal;

impl LineReader for Terminal {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        io::stdout().flush().ok()?;
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }

    fn message(&mut self, text: &str) {
        println!("{text}");
    }
}
