//! Display manager for the chat terminal UI
//!
//! Color-coded output plus a spinner while a question is in flight.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::rag::context::RetrievedResult;

/// Display manager for the chat UI
pub struct DisplayManager {
    spinner: Option<ProgressBar>,
}

impl DisplayManager {
    pub fn new() -> Self {
        DisplayManager { spinner: None }
    }

    /// Show the welcome banner
    pub fn show_banner(&self, version: &str, model: &str) {
        let width = 64;
        let rule = "=".repeat(width);

        println!("\n{}", rule.cyan());
        println!("{}", format!("  ProfileTwin {} - AI Profile Assistant", version).bold().cyan());
        println!("{}", format!("  Model: {} | Data: your professional profile", model).dimmed());
        println!("{}\n", rule.cyan());
        println!(
            "Ask about your experience, skills, projects, or career goals."
        );
        println!(
            "Type {} or {} to end the session.\n",
            "exit".green(),
            "quit".green()
        );
        println!("{}", "Try asking:".dimmed());
        println!("{}", "  - Tell me about your work experience".dimmed());
        println!("{}", "  - What are your technical skills?".dimmed());
        println!("{}\n", "  - Describe your career goals".dimmed());
    }

    /// Spin while the pipeline works on a question
    pub fn start_thinking(&mut self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Searching your profile...");
        pb.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(pb);
    }

    /// Stop the in-flight spinner
    pub fn stop_thinking(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }

    /// Show one retrieval hit (verbose mode)
    pub fn show_hit(&self, hit: &RetrievedResult) {
        println!(
            "{} {} {}",
            "Found:".dimmed(),
            hit.title.yellow(),
            format!("(relevance {:.3})", hit.score).dimmed()
        );
    }

    /// Show the assistant's answer
    pub fn show_answer(&self, answer: &str) {
        println!("{} {}\n", "Twin:".bold().green(), answer);
    }

    /// Show a bulk-load summary
    pub fn show_load_report(&self, chunks_loaded: usize) {
        println!(
            "{}",
            format!("Loaded {} profile chunks into the index.", chunks_loaded).dimmed()
        );
    }

    /// Show an error message
    pub fn show_error(&self, message: &str) {
        eprintln!("{} {}", "Error:".bold().red(), message);
    }

    /// Show the farewell line
    pub fn show_farewell(&self) {
        println!("{}", "Thanks for chatting with your digital twin!".cyan());
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}
