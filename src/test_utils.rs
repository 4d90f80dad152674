#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::QuestionRecord;

    /// Two questions; the first answer is `a`, the second `b`.
    pub const TWO_QUESTION_TEXT: &str = "1. Q?\na) X\nb) Y\nAnswer: a\n2. Q2?\na) Z\nb) W\nAnswer: b";

    /// Model output the way it usually arrives: preamble, indentation,
    /// mixed case and trailing commentary.
    pub const SAMPLE_QUIZ_TEXT: &str = "Here is your quiz:

1. Which keyword declares an immutable binding?
   a) let
   b) mut
   c) const fn
   d) static mut
   Answer: a

2. What does `Box<T>` allocate on?
   A) The stack
   B) The heap
   Answer: B) The heap

3. Which trait enables `{:?}` formatting?
   a) Display
   b) Debug
   c) Clone
   ANSWER: (b)

Good luck!";

    pub const SAMPLE_FLASHCARD_TEXT: &str = "Flashcard 1:
Q: What does `&mut` mean?
A: An exclusive borrow.

Flashcard 2:
Q: What is moved by `let b = a;` for a `String`?
A: Ownership of the heap buffer.

Flashcard 3:
Q: What is a lifetime?
A: The region of code a reference is valid for.";

    /// Three usable questions with correct answers `a`, `c`, `b`.
    pub fn three_questions() -> Vec<QuestionRecord> {
        vec![
            QuestionRecord::new("First?")
                .with_option('a', "one")
                .with_option('b', "two")
                .with_correct_letter('a'),
            QuestionRecord::new("Second?")
                .with_option('a', "one")
                .with_option('b', "two")
                .with_option('c', "three")
                .with_correct_letter('c'),
            QuestionRecord::new("Third?")
                .with_option('a', "one")
                .with_option('b', "two")
                .with_correct_letter('b'),
        ]
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_three_questions_are_usable() {
        let questions = three_questions();
        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(|q| q.is_usable()));
    }
}
