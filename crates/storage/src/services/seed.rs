use sqlx::SqlitePool;

use crate::dto::participant::ParticipantRequest;
use crate::error::Result;
use crate::repository::participant::{self, ParticipantRepository};

/// One default leaderboard entry inserted on first boot
#[derive(Debug, Clone, Copy)]
pub struct SeedParticipant {
    pub name: &'static str,
    pub school: &'static str,
    pub avatar: &'static str,
    pub score: i64,
}

impl From<&SeedParticipant> for ParticipantRequest {
    fn from(seed: &SeedParticipant) -> Self {
        ParticipantRequest::new(seed.name, seed.school, seed.avatar, seed.score)
    }
}

const fn seed(
    name: &'static str,
    school: &'static str,
    avatar: &'static str,
    score: i64,
) -> SeedParticipant {
    SeedParticipant {
        name,
        school,
        avatar,
        score,
    }
}

pub const SEED_PARTICIPANTS: [SeedParticipant; 20] = [
    seed("Circuit Schwarzenegger", "Terminator Tech", "robot1", 950),
    seed("Byte Lasso", "Ted TV Institute", "computer", 925),
    seed("Elon Rust", "Mars Robotics", "rocket", 890),
    seed("Bill Gateways", "Windows Academy", "gear", 875),
    seed("Steve Bots", "Apple Automation", "robot2", 860),
    seed("Ada Lovelbot", "Algorithm High", "scientist", 840),
    seed("Robo Downey Jr.", "Iron Tech Institute", "gear", 820),
    seed("Mark Zucker-borg", "Meta Mechanics", "robot1", 800),
    seed("Servo Willis", "Die Hard Devices", "gear", 780),
    seed("Taylor Shift", "Swift Programming", "rocket", 760),
    seed("Dwayne 'The Bot' Johnson", "Rock Solid Robotics", "robot2", 745),
    seed("Optimus Beyoncé", "Single Ladies Circuits", "robot1", 730),
    seed("Lady Java", "Bad Codeance", "computer", 715),
    seed("Bit Pitt", "Hollywood Hardware", "gear", 700),
    seed("Ariana Grep", "Thank U, Next-Gen Tech", "scientist", 685),
    seed("Chris Hardwired", "Marvel Mechanics", "robot2", 670),
    seed("Keanu Recompile", "Matrix Mainframe", "computer", 650),
    seed("Buzz Lightyear", "Infinity & Beyond Bots", "rocket", 630),
    seed("Ctrl-Beyoncé-Alt", "Destiny's Coders", "alien", 610),
    seed("Arnold Scriptnegger", "I'll Be Backend", "robot1", 590),
];

/// Populate an empty store with [`SEED_PARTICIPANTS`].
///
/// Does nothing once the table holds at least one row, whether seeded or
/// user-created. All inserts share one transaction. Returns the number of
/// rows inserted.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<usize> {
    let repo = ParticipantRepository::new(pool);

    let existing = repo.count().await?;
    if existing > 0 {
        tracing::debug!(existing, "Participants table already populated, skipping seed");
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    for entry in &SEED_PARTICIPANTS {
        participant::insert(&mut *tx, &ParticipantRequest::from(entry)).await?;
    }
    tx.commit().await?;

    tracing::info!(
        inserted = SEED_PARTICIPANTS.len(),
        "Seeded participants table with default data"
    );

    Ok(SEED_PARTICIPANTS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;
    use crate::dto::common::ListParams;

    #[tokio::test]
    async fn test_seed_empty_store() {
        let db = Database::connect_in_memory().await.unwrap();

        let inserted = seed_if_empty(db.pool()).await.unwrap();
        assert_eq!(inserted, 20);

        let repo = ParticipantRepository::new(db.pool());
        let participants = repo.list(&ListParams::default()).await.unwrap();
        assert_eq!(participants.len(), 20);

        let first = participants.first().unwrap();
        assert_eq!(first.name, "Circuit Schwarzenegger");
        assert_eq!(first.score, 950);

        let last = participants.last().unwrap();
        assert_eq!(last.name, "Arnold Scriptnegger");
        assert_eq!(last.score, 590);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let db = Database::connect_in_memory().await.unwrap();

        assert_eq!(seed_if_empty(db.pool()).await.unwrap(), 20);
        assert_eq!(seed_if_empty(db.pool()).await.unwrap(), 0);

        let repo = ParticipantRepository::new(db.pool());
        assert_eq!(repo.count().await.unwrap(), 20);
    }

    #[tokio::test]
    async fn test_seed_skips_store_with_user_data() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = ParticipantRepository::new(db.pool());
        repo.create(&ParticipantRequest::new("Solo", "Home", "alien", 1))
            .await
            .unwrap();

        assert_eq!(seed_if_empty(db.pool()).await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[test]
    fn test_seed_data_is_ranked() {
        assert!(
            SEED_PARTICIPANTS
                .windows(2)
                .all(|pair| pair[0].score > pair[1].score)
        );
    }
}
