use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    create_participant, delete_participant, get_participant, list_participants,
    update_participant,
};

pub fn routes() -> Router<Database> {
    // axum does not redirect trailing slashes, so both collection paths are served
    Router::new()
        .route(
            "/participants",
            get(list_participants).post(create_participant),
        )
        .route(
            "/participants/",
            get(list_participants).post(create_participant),
        )
        .route(
            "/participants/:id",
            get(get_participant)
                .put(update_participant)
                .delete(delete_participant),
        )
}
