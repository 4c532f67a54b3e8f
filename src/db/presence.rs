use sqlx::prelude::FromRow;

use crate::{
    errors::{AppError, AppResult, Entity},
    models::{Answer, Presence},
    service::pagination::Page,
    DbPool,
};

#[derive(Debug, FromRow)]
struct PresenceRow {
    event_uuid: String,
    member_uuid: String,
    answer: String,
}

impl PresenceRow {
    fn into_presence(self) -> AppResult<Presence> {
        let answer: Answer = self
            .answer
            .parse()
            .map_err(|e| AppError::Storage(format!("invalid answer column: {}", e)))?;
        Ok(Presence {
            event_uuid: self.event_uuid,
            member_uuid: self.member_uuid,
            answer,
        })
    }
}

#[derive(Clone)]
pub struct PresenceStore {
    pool: DbPool,
}

impl PresenceStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Records a member's answer for an event. </br>
    /// A second answer for the same pair **overwrites** the first one </br>
    /// fails with **`NotFound`** when the event or the member does not exist
    pub async fn create(&self, event_uuid: &str, member_uuid: &str, answer: Answer) -> AppResult<Presence> {
        let mut tx = self.pool.begin().await?;

        let event: Option<(i64,)> = sqlx::query_as("SELECT id FROM events WHERE uuid = ?")
            .bind(event_uuid)
            .fetch_optional(&mut *tx)
            .await?;
        if event.is_none() {
            return Err(AppError::NotFound(Entity::Event));
        }
        let member: Option<(i64,)> = sqlx::query_as("SELECT id FROM members WHERE uuid = ?")
            .bind(member_uuid)
            .fetch_optional(&mut *tx)
            .await?;
        if member.is_none() {
            return Err(AppError::NotFound(Entity::Member));
        }

        sqlx::query(
            "INSERT INTO presences (event_uuid, member_uuid, answer) VALUES (?, ?, ?)
            ON CONFLICT(event_uuid, member_uuid) DO UPDATE SET answer = excluded.answer",
        )
        .bind(event_uuid)
        .bind(member_uuid)
        .bind(answer.as_str())
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(Presence {
            event_uuid: event_uuid.to_string(),
            member_uuid: member_uuid.to_string(),
            answer,
        })
    }

    pub async fn get(&self, event_uuid: &str, member_uuid: &str) -> AppResult<Presence> {
        let row: Option<PresenceRow> = sqlx::query_as(
            "SELECT event_uuid, member_uuid, answer FROM presences
            WHERE event_uuid = ? AND member_uuid = ?",
        )
        .bind(event_uuid)
        .bind(member_uuid)
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => row.into_presence(),
            None => Err(AppError::NotFound(Entity::Presence)),
        }
    }

    /// Answers recorded for one event, oldest first.
    pub async fn list_for_event(&self, event_uuid: &str, page: Page) -> AppResult<Vec<Presence>> {
        let rows: Vec<PresenceRow> = sqlx::query_as(
            "SELECT event_uuid, member_uuid, answer FROM presences
            WHERE event_uuid = ? ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(event_uuid)
        .bind(i64::from(page.count))
        .bind(i64::from(page.start))
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(PresenceRow::into_presence).collect()
    }

    pub async fn delete(&self, event_uuid: &str, member_uuid: &str) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM presences WHERE event_uuid = ? AND member_uuid = ?")
            .bind(event_uuid)
            .bind(member_uuid)
            .execute(&self.pool)
            .await?;
        match res.rows_affected() {
            0 => Err(AppError::NotFound(Entity::Presence)),
            _ => Ok(()),
        }
    }
}
