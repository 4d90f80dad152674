pub mod flashcard_handler;
pub mod health_handler;
pub mod quiz_handler;
pub mod session_handler;

use actix_web::web;

pub use flashcard_handler::{generate_flashcards, parse_flashcards};
pub use health_handler::{health_check, health_check_live};
pub use quiz_handler::{generate_quiz, parse_quiz};
pub use session_handler::{
    delete_session, get_score, get_session, restart_session, select_answer, submit_session,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(health_check_live)
        .service(generate_quiz)
        .service(parse_quiz)
        .service(get_session)
        .service(select_answer)
        .service(submit_session)
        .service(get_score)
        .service(restart_session)
        .service(delete_session)
        .service(generate_flashcards)
        .service(parse_flashcards);
}
