/**
 * Loading and sampling of the question pool.
 */
use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use super::common::{QuizError, Result};


/// The full pool of question/answer pairs, keyed by question text. The
/// ordered map keeps the key set in a stable order so that sampling with a
/// seeded generator is reproducible.
#[derive(Debug)]
pub struct QuestionBank {
    entries: BTreeMap<String, String>,
}


/// What `load` found in the quiz file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}


impl QuestionBank {
    pub fn new() -> Self {
        QuestionBank { entries: BTreeMap::new() }
    }

    /// Build a bank directly from question/answer pairs.
    #[allow(dead_code)]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut bank = QuestionBank::new();
        for (question, answer) in pairs.iter() {
            bank.entries.insert(String::from(*question), String::from(*answer));
        }
        bank
    }

    /// Load the pool from a file of `question|answer` lines, replacing any
    /// previous contents. Blank lines are ignored. Lines with no `|`, or with
    /// an empty question or answer after trimming, are skipped and counted in
    /// the returned summary. A question that appears twice keeps the answer
    /// from the later line.
    pub fn load(&mut self, path: &Path) -> Result<LoadSummary> {
        let file = File::open(path)
            .or(Err(QuizError::CannotReadFile(path.to_path_buf())))?;
        self.load_from(BufReader::new(file))
            .or(Err(QuizError::CannotReadFile(path.to_path_buf())))
    }

    fn load_from<R: BufRead>(&mut self, reader: R) -> io::Result<LoadSummary> {
        self.entries.clear();
        let mut skipped = 0;
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match parse_line(trimmed) {
                Some((question, answer)) => {
                    self.entries.insert(question, answer);
                },
                None => {
                    skipped += 1;
                },
            }
        }
        Ok(LoadSummary { loaded: self.entries.len(), skipped })
    }

    /// Draw `n` questions uniformly from the pool, with replacement: the same
    /// question may come up more than once in a single quiz. Fails unless the
    /// pool holds at least `n` distinct questions.
    pub fn sample<R: Rng>(&self, n: usize, rng: &mut R) -> Result<Vec<String>> {
        if self.size() < n {
            return Err(QuizError::InsufficientData {
                available: self.size(),
                requested: n,
            });
        }

        let keys: Vec<&String> = self.entries.keys().collect();
        let mut selected = Vec::with_capacity(n);
        for _ in 0..n {
            // The pool is non-empty whenever the loop runs, so `choose`
            // always succeeds.
            selected.push(keys.choose(rng).unwrap().to_string());
        }
        Ok(selected)
    }

    /// The number of distinct questions in the pool.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Exact lookup of the answer to `question`.
    pub fn answer_for(&self, question: &str) -> Option<&str> {
        self.entries.get(question).map(|answer| answer.as_str())
    }
}


/// Split a non-blank line into its question and answer halves. The split is
/// on the first `|`, so an answer may itself contain `|`.
fn parse_line(line: &str) -> Option<(String, String)> {
    let pipe = line.find('|')?;
    let question = line[..pipe].trim();
    let answer = line[pipe + 1..].trim();
    if question.is_empty() || answer.is_empty() {
        return None;
    }
    Some((question.to_string(), answer.to_string()))
}
