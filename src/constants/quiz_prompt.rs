pub const QUIZ_PROMPT: &str = "Generate {num_questions} multiple-choice questions on {topic}.
Each question should have 4 options and 1 correct answer. Format:

1. Question?
   a) Option 1
   b) Option 2
   c) Option 3
   d) Option 4
   Answer: (correct option letter)
";

pub const FLASHCARD_PROMPT: &str = "You are a helpful study assistant. Based on the following study notes, generate flashcards in a Q&A format. Each flashcard should have a question and a concise answer. Format the output as follows:

Flashcard 1:
Q: <question>
A: <answer>

Flashcard 2:
Q: <question>
A: <answer>

Please generate {num_flashcards} flashcards.

Study Notes:
{notes}";

pub fn render_quiz_prompt(topic: &str, num_questions: u8) -> String {
    QUIZ_PROMPT
        .replace("{num_questions}", &num_questions.to_string())
        .replace("{topic}", topic.trim())
}

pub fn render_flashcard_prompt(notes: &str, num_flashcards: u8) -> String {
    FLASHCARD_PROMPT
        .replace("{num_flashcards}", &num_flashcards.to_string())
        .replace("{notes}", notes.trim())
}
