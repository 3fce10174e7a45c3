use utoipa::OpenApi;

use crate::features::participants::handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "Robotics Leaderboard API"),
    paths(
        handlers::list_participants,
        handlers::create_participant,
        handlers::get_participant,
        handlers::update_participant,
        handlers::delete_participant,
    ),
    components(
        schemas(
            storage::dto::participant::ParticipantRequest,
            storage::dto::participant::MessageResponse,
            storage::models::Participant,
        )
    ),
    tags(
        (name = "participants", description = "Leaderboard participant endpoints"),
    )
)]
pub struct ApiDoc;
