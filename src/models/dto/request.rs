use serde::Deserialize;
use validator::Validate;

fn default_num_questions() -> u8 {
    5
}

fn default_num_flashcards() -> u8 {
    10
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(length(min = 1, max = 20000))]
    pub topic: String,

    #[serde(default = "default_num_questions")]
    #[validate(range(min = 1, max = 20))]
    pub num_questions: u8,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ParseQuizRequest {
    #[validate(length(min = 1))]
    pub raw_text: String,

    #[validate(length(min = 1, max = 200))]
    pub topic: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SelectAnswerRequest {
    /// `None` clears the answer.
    #[validate(length(min = 1, max = 8))]
    pub letter: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateFlashcardsRequest {
    #[validate(length(min = 1, max = 50000))]
    pub notes: String,

    #[serde(default = "default_num_flashcards")]
    #[validate(range(min = 1, max = 50))]
    pub num_flashcards: u8,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ParseFlashcardsRequest {
    #[validate(length(min = 1))]
    pub raw_text: String,
}
