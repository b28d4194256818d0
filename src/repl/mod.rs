//! Interactive chat loop
//!
//! Reads one question per line, dispatches it to the pipeline, prints the
//! answer, and exits on a recognized quit keyword. Empty lines never reach
//! the pipeline.

pub mod display;
pub mod input;

pub use display::DisplayManager;
pub use input::InputHandler;

use anyhow::Result;

use crate::rag::pipeline::RagPipeline;

/// Quit keywords, matched case-insensitively
const QUIT_KEYWORDS: [&str; 2] = ["exit", "quit"];

/// One interactive chat session
pub struct ChatSession {
    input: InputHandler,
    display: DisplayManager,
    pipeline: RagPipeline,
    verbose: bool,
}

impl ChatSession {
    pub fn new(pipeline: RagPipeline, verbose: bool) -> Result<Self> {
        let input = match InputHandler::default_history_path() {
            Some(path) => InputHandler::with_history(path)?,
            None => InputHandler::new()?,
        };

        Ok(Self {
            input,
            display: DisplayManager::new(),
            pipeline,
            verbose,
        })
    }

    /// Run the loop until quit, EOF, or interrupt
    pub async fn run(&mut self) -> Result<()> {
        self.display
            .show_banner(env!("CARGO_PKG_VERSION"), &self.pipeline.config().model);

        loop {
            let line = match self.input.read_line()? {
                Some(line) => line,
                None => break,
            };

            if line.is_empty() {
                continue;
            }
            if is_quit(&line) {
                break;
            }

            self.display.start_thinking();
            let report = self.pipeline.answer_with_report(&line).await;
            self.display.stop_thinking();

            if self.verbose {
                for hit in &report.hits {
                    self.display.show_hit(hit);
                }
            }
            self.display.show_answer(&report.answer);
        }

        self.display.show_farewell();
        self.input.save_history()?;
        Ok(())
    }
}

/// True when the line is a quit keyword, ignoring case
pub fn is_quit(line: &str) -> bool {
    QUIT_KEYWORDS
        .iter()
        .any(|keyword| line.eq_ignore_ascii_case(keyword))
}
