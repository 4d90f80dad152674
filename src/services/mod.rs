pub mod flashcard_parser;
pub mod flashcard_service;
pub mod quiz_service;
pub mod response_parser;
pub mod text_generator;
