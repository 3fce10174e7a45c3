use sqlx::{Executor, Sqlite, SqlitePool};

use crate::dto::common::ListParams;
use crate::dto::participant::ParticipantRequest;
use crate::error::{Result, StorageError};
use crate::models::Participant;

pub struct ParticipantRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List participants ranked by score, highest first.
    ///
    /// Equal scores keep insertion order (`id` ascending).
    pub async fn list(&self, params: &ListParams) -> Result<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT id, name, school, avatar, score
            FROM participants
            ORDER BY score DESC, id ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(participants)
    }

    /// Find participant by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            SELECT id, name, school, avatar, score
            FROM participants
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(participant)
    }

    /// Create a new participant
    pub async fn create(&self, req: &ParticipantRequest) -> Result<Participant> {
        insert(self.pool, req).await
    }

    /// Replace every mutable field of an existing participant
    pub async fn update(&self, id: i64, req: &ParticipantRequest) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            UPDATE participants
            SET name = ?, school = ?, avatar = ?, score = ?
            WHERE id = ?
            RETURNING id, name, school, avatar, score
            "#,
        )
        .bind(&req.name)
        .bind(&req.school)
        .bind(&req.avatar)
        .bind(req.score)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(participant)
    }

    /// Delete a participant by ID
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM participants WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM participants")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}

/// Insert a participant through any executor, so callers holding a
/// transaction can batch inserts.
pub(crate) async fn insert<'e, E>(executor: E, req: &ParticipantRequest) -> Result<Participant>
where
    E: Executor<'e, Database = Sqlite>,
{
    let participant = sqlx::query_as::<_, Participant>(
        r#"
        INSERT INTO participants (name, school, avatar, score)
        VALUES (?, ?, ?, ?)
        RETURNING id, name, school, avatar, score
        "#,
    )
    .bind(&req.name)
    .bind(&req.school)
    .bind(&req.avatar)
    .bind(req.score)
    .fetch_one(executor)
    .await?;

    Ok(participant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    fn request(name: &str, score: i64) -> ParticipantRequest {
        ParticipantRequest::new(name, "Test School", "robot1", score)
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = ParticipantRepository::new(db.pool());

        let created = repo
            .create(&ParticipantRequest::new("X", "Y", "z", 500))
            .await
            .unwrap();
        assert_eq!(created.name, "X");
        assert_eq!(created.school, "Y");
        assert_eq!(created.avatar, "z");
        assert_eq!(created.score, 500);

        let found = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = ParticipantRepository::new(db.pool());

        let first = repo.create(&request("a", 1)).await.unwrap();
        let second = repo.create(&request("b", 2)).await.unwrap();
        assert_ne!(first.id, second.id);

        repo.delete(second.id).await.unwrap();
        let third = repo.create(&request("c", 3)).await.unwrap();
        assert!(third.id > second.id);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = ParticipantRepository::new(db.pool());

        let participants = repo.list(&ListParams::default()).await.unwrap();
        assert!(participants.is_empty());
    }

    #[tokio::test]
    async fn test_list_sorted_by_score_with_id_tie_break() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = ParticipantRepository::new(db.pool());

        let low = repo.create(&request("low", 10)).await.unwrap();
        let tie_a = repo.create(&request("tie-a", 50)).await.unwrap();
        let high = repo.create(&request("high", 90)).await.unwrap();
        let tie_b = repo.create(&request("tie-b", 50)).await.unwrap();

        let ids: Vec<i64> = repo
            .list(&ListParams::default())
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![high.id, tie_a.id, tie_b.id, low.id]);
    }

    #[tokio::test]
    async fn test_list_offset_matches_full_list() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = ParticipantRepository::new(db.pool());

        for score in [30, 70, 10, 90, 50] {
            repo.create(&request(&format!("p{score}"), score))
                .await
                .unwrap();
        }

        let full = repo.list(&ListParams::default()).await.unwrap();
        for k in 0..full.len() {
            let page = repo.list(&ListParams::new(k as i64, 100)).await.unwrap();
            assert_eq!(page.first(), Some(&full[k]));
        }

        let limited = repo.list(&ListParams::new(1, 2)).await.unwrap();
        assert_eq!(limited, full[1..3].to_vec());
    }

    #[tokio::test]
    async fn test_update_keeps_id() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = ParticipantRepository::new(db.pool());

        let created = repo.create(&request("before", 1)).await.unwrap();
        let updated = repo
            .update(created.id, &ParticipantRequest::new("after", "New", "gear", 99))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(repo.find_by_id(created.id).await.unwrap(), updated);
        assert_eq!(updated.name, "after");
        assert_eq!(updated.score, 99);
    }

    #[tokio::test]
    async fn test_delete_then_find_is_not_found() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = ParticipantRepository::new(db.pool());

        let created = repo.create(&request("gone", 5)).await.unwrap();
        repo.delete(created.id).await.unwrap();

        assert!(repo.find_by_id(created.id).await.unwrap_err().is_not_found());
        assert!(repo
            .update(created.id, &request("gone", 6))
            .await
            .unwrap_err()
            .is_not_found());
        assert!(repo.delete(created.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_unknown_id() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = ParticipantRepository::new(db.pool());

        assert!(repo.delete(999_999).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_count() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = ParticipantRepository::new(db.pool());

        assert_eq!(repo.count().await.unwrap(), 0);
        repo.create(&request("one", 1)).await.unwrap();
        repo.create(&request("two", 2)).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
