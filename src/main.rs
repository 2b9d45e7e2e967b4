/**
 * Take a pop quiz in the terminal.
 *
 * Questions are read from a plain text file of `question|answer` lines; each
 * run asks a random selection of them, grades the typed answers, and reports
 * the missed questions at the end.
 */
#[macro_use]
mod iohelper;
mod bank;
mod common;
mod session;
mod ui;

use colored::*;
use rand::rngs::StdRng;
use rand::{FromEntropy, SeedableRng};
use structopt::StructOpt;

use bank::QuestionBank;
use common::{Options, QuizError, Result};
use session::QuizSession;
use ui::CmdUI;


fn main() {
    let options = Options::from_args();
    if options.no_color {
        colored::control::set_override(false);
    }

    let mut ui = CmdUI::new();
    if let Err(e) = run(&mut ui, &options) {
        if !common::is_broken_pipe(&e) {
            eprintln!("{}: {}", "Error".red(), e);
            ::std::process::exit(2);
        }
    }
}


fn run(ui: &mut CmdUI, options: &Options) -> Result<()> {
    let mut bank = QuestionBank::new();
    let summary = match bank.load(&options.path) {
        Ok(summary) => summary,
        Err(e) => {
            ui.load_failure(&options.path)?;
            return Err(e);
        },
    };

    if summary.skipped > 0 {
        ui.warning(&format!(
            "skipped {} malformed line(s) in '{}'.",
            summary.skipped,
            options.path.to_string_lossy()
        ))?;
    }

    if bank.size() < options.num_to_ask {
        ui.insufficient_questions(bank.size(), options.num_to_ask)?;
        return Err(QuizError::InsufficientData {
            available: bank.size(),
            requested: options.num_to_ask,
        });
    }

    let mut rng = make_rng(options.seed);
    let mut session = QuizSession::new();
    loop {
        match run_session(ui, &bank, &mut session, options.num_to_ask, &mut rng) {
            Ok(()) => {},
            Err(QuizError::ReadlineInterrupted) => break,
            Err(e) => return Err(e),
        }
        if !confirm("\nTake another quiz? ") {
            break;
        }
    }
    Ok(())
}


/// Drive one session from start to the final report.
fn run_session(
    ui: &mut CmdUI,
    bank: &QuestionBank,
    session: &mut QuizSession,
    num_to_ask: usize,
    rng: &mut StdRng,
) -> Result<()> {
    session.start(bank, num_to_ask, rng)?;

    while !session.is_finished() {
        let question = match session.current_question() {
            Some(question) => question.to_string(),
            None => break,
        };
        ui.question(session.position(), session.total(), &question)?;

        let input = match ui.prompt()? {
            Some(input) => input,
            // End of input abandons the quiz without a report.
            None => return Ok(()),
        };
        let outcome = session.submit_answer(bank, &input);
        ui.feedback(&outcome)?;
    }

    if let Some(report) = session.report() {
        ui.final_report(&report)?;
    }
    Ok(())
}


fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}


/// Prompt the user with a yes-no question and return `true` if they enter yes.
fn confirm(message: &str) -> bool {
    match iohelper::prompt(message) {
        Ok(Some(response)) => {
            response.trim_start().to_lowercase().starts_with("y")
        },
        _ => false,
    }
}
