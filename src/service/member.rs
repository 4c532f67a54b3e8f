use log::info;

use crate::{
    dto::{NewMemberDto, UpdateMemberDto},
    errors::AppResult,
    models::Member,
    state::AppState,
};

use super::{auth::require_admin, pagination::Page};

pub async fn create(admin_id: &str, dto: NewMemberDto, state: &AppState) -> AppResult<Member> {
    require_admin(state.gate.as_ref(), admin_id).await?;
    let member = state.members.create(dto).await?;
    info!("admin {} created member {} ({})", admin_id, member.uuid, member.name);
    Ok(member)
}

pub async fn get_by_id(id: &str, state: &AppState) -> AppResult<Member> {
    state.members.get(id).await
}

pub async fn get_all(page: Page, state: &AppState) -> AppResult<Vec<Member>> {
    state.members.list(page).await
}

pub async fn update(id: &str, dto: UpdateMemberDto, state: &AppState) -> AppResult<Member> {
    let member = state.members.update(id, dto).await?;
    info!("updated member {}", member.uuid);
    Ok(member)
}

pub async fn delete(id: &str, state: &AppState) -> AppResult<()> {
    state.members.delete(id).await?;
    info!("deleted member {}", id);
    Ok(())
}
