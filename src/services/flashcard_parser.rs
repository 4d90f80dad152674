use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::Flashcard;

static CARD_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^flashcard\s*\d+\s*:?$").expect("CARD_HEADER is a valid regex pattern")
});

static CARD_QUESTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^q:\s*(.*)$").expect("CARD_QUESTION is a valid regex pattern")
});

static CARD_ANSWER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^a:\s*(.*)$").expect("CARD_ANSWER is a valid regex pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardLine<'a> {
    Blank,
    Header,
    Question(&'a str),
    Answer(&'a str),
    Continuation(&'a str),
}

pub fn classify_card_line(line: &str) -> CardLine<'_> {
    let line = line.trim();
    if line.is_empty() {
        return CardLine::Blank;
    }
    if CARD_HEADER.is_match(line) {
        return CardLine::Header;
    }
    if let Some(text) = CARD_QUESTION.captures(line).and_then(|c| c.get(1)) {
        return CardLine::Question(text.as_str().trim());
    }
    if let Some(text) = CARD_ANSWER.captures(line).and_then(|c| c.get(1)) {
        return CardLine::Answer(text.as_str().trim());
    }
    CardLine::Continuation(line)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Question,
    Answer,
}

#[derive(Debug, Default)]
struct OpenCard {
    card: Flashcard,
    last_field: Option<Field>,
}

fn close(open: Option<OpenCard>, cards: &mut Vec<Flashcard>) {
    if let Some(open) = open {
        if !open.card.question.is_empty() {
            cards.push(open.card);
        }
    }
}

fn append(target: &mut String, text: &str) {
    if !target.is_empty() && !text.is_empty() {
        target.push(' ');
    }
    target.push_str(text);
}

/// Parse `Flashcard N:` / `Q:` / `A:` text into cards.
///
/// Lines that follow a `Q:` or `A:` line without a marker of their own are
/// joined onto that field. Cards without a question are dropped.
pub fn parse_flashcards(raw: &str) -> Vec<Flashcard> {
    let mut cards = Vec::new();
    let mut current: Option<OpenCard> = None;

    for line in raw.lines() {
        match classify_card_line(line) {
            CardLine::Blank => {}
            CardLine::Header => close(current.take(), &mut cards),
            CardLine::Question(text) => {
                if current.as_ref().is_some_and(|o| !o.card.question.is_empty()) {
                    close(current.take(), &mut cards);
                }
                let open = current.get_or_insert_with(OpenCard::default);
                append(&mut open.card.question, text);
                open.last_field = Some(Field::Question);
            }
            CardLine::Answer(text) => {
                if let Some(open) = current.as_mut() {
                    append(&mut open.card.answer, text);
                    open.last_field = Some(Field::Answer);
                }
            }
            CardLine::Continuation(text) => {
                if let Some(open) = current.as_mut() {
                    match open.last_field {
                        Some(Field::Question) => append(&mut open.card.question, text),
                        Some(Field::Answer) => append(&mut open.card.answer, text),
                        None => {}
                    }
                }
            }
        }
    }
    close(current.take(), &mut cards);

    log::debug!("Parsed {} flashcards from generated text", cards.len());
    cards
}
