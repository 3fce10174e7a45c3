use sqlx::SqlitePool;
use storage::{
    dto::{common::ListParams, participant::ParticipantRequest},
    error::Result,
    models::Participant,
    repository::participant::ParticipantRepository,
};

/// List participants ranked by score
pub async fn list_participants(pool: &SqlitePool, params: &ListParams) -> Result<Vec<Participant>> {
    let repo = ParticipantRepository::new(pool);
    repo.list(params).await
}

/// Get participant by ID
pub async fn get_participant(pool: &SqlitePool, id: i64) -> Result<Participant> {
    let repo = ParticipantRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new participant
pub async fn create_participant(
    pool: &SqlitePool,
    request: &ParticipantRequest,
) -> Result<Participant> {
    let repo = ParticipantRepository::new(pool);
    let participant = repo.create(request).await?;

    tracing::info!(id = participant.id, name = %participant.name, "Participant created");
    Ok(participant)
}

/// Replace a participant's fields
pub async fn update_participant(
    pool: &SqlitePool,
    id: i64,
    request: &ParticipantRequest,
) -> Result<Participant> {
    let repo = ParticipantRepository::new(pool);
    let participant = repo.update(id, request).await?;

    tracing::info!(id, score = participant.score, "Participant updated");
    Ok(participant)
}

/// Delete a participant
pub async fn delete_participant(pool: &SqlitePool, id: i64) -> Result<()> {
    let repo = ParticipantRepository::new(pool);
    repo.delete(id).await?;

    tracing::info!(id, "Participant deleted");
    Ok(())
}
