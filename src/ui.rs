/**
 * The command-line presentation layer.
 *
 * `CmdUI` only renders and forwards input; every decision about what happens
 * next belongs to the session state machine.
 */
use std::io::Write;
use std::path::Path;

use colored::*;

use super::common::{QuizError, Result};
use super::iohelper::{prettyprint, prettyprint_colored, prompt};
use super::session::{AnswerOutcome, QuizReport};


pub struct CmdUI;


impl CmdUI {
    pub fn new() -> Self {
        CmdUI
    }

    pub fn load_failure(&mut self, path: &Path) -> Result<()> {
        my_println!("{}", "Error loading the quiz file.".red())?;
        my_println!(
            "Check that '{}' exists and is readable.",
            path.to_string_lossy()
        )
    }

    pub fn insufficient_questions(&mut self, available: usize, requested: usize) -> Result<()> {
        my_println!(
            "Not enough questions to start a quiz: the file has {} and {} are needed.",
            available, requested
        )?;
        my_println!("Add more questions and run again.")
    }

    pub fn warning(&mut self, text: &str) -> Result<()> {
        prettyprint_colored(&format!("Warning: {}", text), "", Some(Color::Red), None)
    }

    pub fn question(&mut self, number: usize, total: usize, text: &str) -> Result<()> {
        my_print!("\n")?;
        let prefix = format!("  ({}/{}) ", number, total);
        prettyprint_colored(text, &prefix, None, Some(Color::Cyan))?;
        my_print!("\n")
    }

    pub fn prompt(&mut self) -> Result<Option<String>> {
        prompt("> ")
    }

    pub fn feedback(&mut self, outcome: &AnswerOutcome) -> Result<()> {
        match outcome {
            AnswerOutcome::Correct { .. } => {
                my_println!("{}", "Correct!".green())
            },
            AnswerOutcome::Incorrect { correct_answer, .. } => {
                let message = format!(
                    "{} The correct answer was {}.",
                    "Incorrect.".red(),
                    correct_answer.as_str().green(),
                );
                prettyprint(&message, "")
            },
            AnswerOutcome::EmptyAnswer => {
                my_println!("Please enter an answer.")
            },
            AnswerOutcome::NotAcceptingInput => Ok(()),
        }
    }

    pub fn final_report(&mut self, report: &QuizReport) -> Result<()> {
        my_print!("\n\n")?;
        my_print!("Score: ")?;
        my_print!("{}", format!("{}", report.final_score).cyan())?;
        my_print!(" out of ")?;
        my_print!("{}", format!("{}", report.total).cyan())?;
        if report.total == 1 {
            my_println!(" question")?;
        } else {
            my_println!(" questions")?;
        }
        my_print!("  {}", format!("{}", report.final_score).green())?;
        my_println!(" correct")?;
        my_print!("  {}", format!("{}", report.missed.len()).red())?;
        my_println!(" incorrect")?;

        if report.missed.is_empty() {
            my_println!("\n{}", "Perfect! You did not miss any questions.".green())
        } else {
            my_println!("\nYou missed:")?;
            for missed in report.missed.iter() {
                prettyprint(&missed.question, "  ")?;
                my_println!(
                    "    correct answer: {}",
                    missed.correct_answer.as_str().green()
                )?;
            }
            Ok(())
        }
    }
}
