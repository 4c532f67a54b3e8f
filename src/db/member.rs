use sqlx::prelude::FromRow;

use crate::{
    dto::{NewMemberDto, UpdateMemberDto},
    errors::{AppError, AppResult, Entity, ValidationError},
    models::{new_identifier, Member, Role},
    service::{pagination::Page, roles},
    DbPool,
};

#[derive(Debug, FromRow)]
struct MemberRow {
    uuid: String,
    name: String,
    extra: String,
    roles: String,
}

impl MemberRow {
    fn into_member(self) -> AppResult<Member> {
        let roles: Vec<Role> = serde_json::from_str(&self.roles)
            .map_err(|e| AppError::Storage(format!("invalid roles column: {}", e)))?;
        Ok(Member {
            uuid: self.uuid,
            name: self.name,
            extra: self.extra,
            roles,
        })
    }
}

#[derive(Clone)]
pub struct MemberStore {
    pool: DbPool,
}

impl MemberStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Validates the role list, then persists the member under a fresh identifier.
    /// Nothing is written when validation fails.
    pub async fn create(&self, dto: NewMemberDto) -> AppResult<Member> {
        if dto.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        let roles = roles::validate(&dto.roles)?;
        let member = Member {
            uuid: new_identifier(),
            name: dto.name,
            extra: dto.extra.unwrap_or_default(),
            roles,
        };
        let encoded_roles = serde_json::to_string(&member.roles)
            .map_err(|e| AppError::Storage(e.to_string()))?;

        let mut tx = self.pool.begin().await?;
        sqlx::query("INSERT INTO members (uuid, name, extra, roles) VALUES (?, ?, ?, ?)")
            .bind(&member.uuid)
            .bind(&member.name)
            .bind(&member.extra)
            .bind(encoded_roles)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(member)
    }

    pub async fn get(&self, uuid: &str) -> AppResult<Member> {
        let row: Option<MemberRow> =
            sqlx::query_as("SELECT uuid, name, extra, roles FROM members WHERE uuid = ?")
                .bind(uuid)
                .fetch_optional(&self.pool)
                .await?;
        match row {
            Some(row) => row.into_member(),
            None => Err(AppError::NotFound(Entity::Member)),
        }
    }

    pub async fn list(&self, page: Page) -> AppResult<Vec<Member>> {
        let rows: Vec<MemberRow> = sqlx::query_as(
            "SELECT uuid, name, extra, roles FROM members ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(i64::from(page.count))
        .bind(i64::from(page.start))
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(MemberRow::into_member).collect()
    }

    /// Replaces name and extra. Roles are only ever set at creation.
    pub async fn update(&self, uuid: &str, dto: UpdateMemberDto) -> AppResult<Member> {
        if dto.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        let mut tx = self.pool.begin().await?;
        let res = sqlx::query("UPDATE members SET name = ?, extra = ? WHERE uuid = ?")
            .bind(&dto.name)
            .bind(dto.extra.unwrap_or_default())
            .bind(uuid)
            .execute(&mut *tx)
            .await?;
        if res.rows_affected() == 0 {
            return Err(AppError::NotFound(Entity::Member));
        }
        let row: MemberRow =
            sqlx::query_as("SELECT uuid, name, extra, roles FROM members WHERE uuid = ?")
                .bind(uuid)
                .fetch_one(&mut *tx)
                .await?;
        tx.commit().await?;
        row.into_member()
    }

    pub async fn delete(&self, uuid: &str) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM members WHERE uuid = ?")
            .bind(uuid)
            .execute(&self.pool)
            .await?;
        match res.rows_affected() {
            0 => Err(AppError::NotFound(Entity::Member)),
            _ => Ok(()),
        }
    }
}
