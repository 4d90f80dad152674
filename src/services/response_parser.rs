use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::{QuestionOption, QuestionRecord};

static QUESTION_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+\.").expect("QUESTION_START is a valid regex pattern")
});

static OPTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([a-d])\)\s*(.*)$").expect("OPTION_LINE is a valid regex pattern")
});

static ANSWER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^answer:(.*)$").expect("ANSWER_LINE is a valid regex pattern")
});

/// What a single trimmed line of generated quiz text means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    QuestionStart(&'a str),
    OptionLine { letter: char, text: &'a str },
    AnswerLine(Option<char>),
    Ignored,
}

pub fn classify_line(line: &str) -> LineKind<'_> {
    let line = line.trim();
    if line.is_empty() {
        return LineKind::Blank;
    }

    if QUESTION_START.is_match(line) {
        let prompt = line.split_once(". ").map_or(line, |(_, rest)| rest);
        return LineKind::QuestionStart(prompt);
    }

    if let Some(caps) = OPTION_LINE.captures(line) {
        let letter = caps
            .get(1)
            .and_then(|m| m.as_str().chars().next())
            .map(|c| c.to_ascii_lowercase());
        if let (Some(letter), Some(text)) = (letter, caps.get(2)) {
            return LineKind::OptionLine {
                letter,
                text: text.as_str().trim(),
            };
        }
    }

    if let Some(caps) = ANSWER_LINE.captures(line) {
        let letter = caps
            .get(1)
            .and_then(|m| m.as_str().to_lowercase().chars().find(|c| c.is_alphabetic()));
        return LineKind::AnswerLine(letter);
    }

    LineKind::Ignored
}

/// Parse generated text into question records.
///
/// Never fails: lines that don't fit are skipped, and an empty result just
/// means nothing usable was generated.
pub fn parse_quiz_response(raw: &str) -> Vec<QuestionRecord> {
    let mut questions = Vec::new();
    let mut current: Option<QuestionRecord> = None;

    for line in raw.lines() {
        match classify_line(line) {
            LineKind::QuestionStart(prompt) => {
                if let Some(done) = current.replace(QuestionRecord::new(prompt)) {
                    questions.push(done);
                }
            }
            LineKind::OptionLine { letter, text } => {
                if let Some(question) = current.as_mut() {
                    question.options.push(QuestionOption {
                        letter,
                        text: text.to_string(),
                    });
                }
            }
            LineKind::AnswerLine(letter) => {
                if let (Some(question), Some(letter)) = (current.as_mut(), letter) {
                    question.correct_letter = Some(letter);
                }
            }
            LineKind::Blank | LineKind::Ignored => {}
        }
    }

    if let Some(done) = current {
        questions.push(done);
    }

    log::debug!("Parsed {} questions from generated text", questions.len());
    questions
}
