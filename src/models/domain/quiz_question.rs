use serde::{Deserialize, Serialize};

/// A multiple-choice question recovered from generated text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionRecord {
    pub prompt_text: String,
    pub options: Vec<QuestionOption>,
    /// `None` when the source had no usable `Answer:` line. Such a record
    /// is kept and simply never scores as correct.
    pub correct_letter: Option<char>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionOption {
    pub letter: char, // always lowercase
    pub text: String,
}

impl QuestionRecord {
    pub fn new(prompt_text: impl Into<String>) -> Self {
        Self {
            prompt_text: prompt_text.into(),
            options: Vec::new(),
            correct_letter: None,
        }
    }

    pub fn with_option(mut self, letter: char, text: impl Into<String>) -> Self {
        self.options.push(QuestionOption {
            letter: letter.to_ascii_lowercase(),
            text: text.into(),
        });
        self
    }

    pub fn with_correct_letter(mut self, letter: char) -> Self {
        self.correct_letter = Some(letter.to_ascii_lowercase());
        self
    }

    pub fn option(&self, letter: char) -> Option<&QuestionOption> {
        let letter = letter.to_ascii_lowercase();
        self.options.iter().find(|o| o.letter == letter)
    }

    /// True when the correct letter is set and names one of the options.
    pub fn is_usable(&self) -> bool {
        self.correct_letter
            .is_some_and(|letter| self.option(letter).is_some())
    }
}
