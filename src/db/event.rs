use chrono::NaiveDateTime;
use sqlx::prelude::FromRow;

use crate::{
    dto::{NewEventDto, UpdateEventDto},
    errors::{AppError, AppResult, Entity},
    models::{new_identifier, Event, Recurring},
    service::pagination::Page,
    DbPool,
};

const EVENT_COLUMNS: &str =
    "uuid, name, start_date, end_date, recurring_interval, recurring_until";

#[derive(Debug, FromRow)]
struct EventRow {
    uuid: String,
    name: String,
    start_date: NaiveDateTime,
    end_date: NaiveDateTime,
    recurring_interval: Option<String>,
    recurring_until: Option<NaiveDateTime>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        let recurring = match (row.recurring_interval, row.recurring_until) {
            (Some(interval), Some(until)) => Some(Recurring { interval, until }),
            _ => None,
        };
        Event {
            uuid: row.uuid,
            name: row.name,
            start_date: row.start_date,
            end_date: row.end_date,
            recurring,
        }
    }
}

#[derive(Clone)]
pub struct EventStore {
    pool: DbPool,
}

impl EventStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Persists a new event under a freshly assigned identifier.
    pub async fn create(&self, dto: NewEventDto) -> AppResult<Event> {
        dto.validate()?;
        let event = Event {
            uuid: new_identifier(),
            name: dto.name,
            start_date: dto.start_date,
            end_date: dto.end_date,
            recurring: dto.recurring,
        };
        let (interval, until) = match &event.recurring {
            Some(r) => (Some(r.interval.clone()), Some(r.until)),
            None => (None, None),
        };

        let mut tx = self.pool.begin().await?;
        sqlx::query(
            "INSERT INTO events (uuid, name, start_date, end_date, recurring_interval, recurring_until)
            VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&event.uuid)
        .bind(&event.name)
        .bind(event.start_date)
        .bind(event.end_date)
        .bind(interval)
        .bind(until)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(event)
    }

    pub async fn get(&self, uuid: &str) -> AppResult<Event> {
        let row: Option<EventRow> =
            sqlx::query_as(&format!("SELECT {EVENT_COLUMNS} FROM events WHERE uuid = ?"))
                .bind(uuid)
                .fetch_optional(&self.pool)
                .await?;
        row.map(Event::from).ok_or(AppError::NotFound(Entity::Event))
    }

    /// Events in insertion order.
    pub async fn list(&self, page: Page) -> AppResult<Vec<Event>> {
        let rows: Vec<EventRow> = sqlx::query_as(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY id LIMIT ? OFFSET ?"
        ))
        .bind(i64::from(page.count))
        .bind(i64::from(page.start))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Event::from).collect())
    }

    /// Replaces name, start and end. The recurrence descriptor is kept.
    pub async fn update(&self, uuid: &str, dto: UpdateEventDto) -> AppResult<Event> {
        dto.validate()?;
        let mut tx = self.pool.begin().await?;
        let res = sqlx::query(
            "UPDATE events SET name = ?, start_date = ?, end_date = ? WHERE uuid = ?",
        )
        .bind(&dto.name)
        .bind(dto.start_date)
        .bind(dto.end_date)
        .bind(uuid)
        .execute(&mut *tx)
        .await?;
        if res.rows_affected() == 0 {
            return Err(AppError::NotFound(Entity::Event));
        }
        let row: EventRow =
            sqlx::query_as(&format!("SELECT {EVENT_COLUMNS} FROM events WHERE uuid = ?"))
                .bind(uuid)
                .fetch_one(&mut *tx)
                .await?;
        tx.commit().await?;
        Ok(row.into())
    }

    /// Presences recorded for the event are left in place.
    pub async fn delete(&self, uuid: &str) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM events WHERE uuid = ?")
            .bind(uuid)
            .execute(&self.pool)
            .await?;
        match res.rows_affected() {
            0 => Err(AppError::NotFound(Entity::Event)),
            _ => Ok(()),
        }
    }
}
