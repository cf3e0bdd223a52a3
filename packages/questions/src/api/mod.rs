use axum::{
    routing::{get, post},
    Router,
};

use crate::db::DbState;

pub mod handlers;
pub mod response;

/// Creates the questions API router
pub fn create_questions_router(state: DbState) -> Router {
    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route("/questions/load", post(handlers::load_questions))
        .route(
            "/questions/{id}",
            get(handlers::get_question)
                .put(handlers::update_question)
                .delete(handlers::delete_question),
        )
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
}
