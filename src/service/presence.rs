use log::info;

use crate::{
    dto::ParticipationDto,
    errors::AppResult,
    models::{Answer, Presence},
    state::AppState,
};

use super::pagination::Page;

/// Validates the answer, then upserts the (event, member) record.
pub async fn participate(
    event_id: &str,
    member_id: &str,
    dto: ParticipationDto,
    state: &AppState,
) -> AppResult<Presence> {
    let answer: Answer = dto.answer.parse()?;
    let presence = state.presences.create(event_id, member_id, answer).await?;
    info!("member {} answered {} for event {}", member_id, answer.as_str(), event_id);
    Ok(presence)
}

pub async fn get(event_id: &str, member_id: &str, state: &AppState) -> AppResult<Presence> {
    state.presences.get(event_id, member_id).await
}

/// The event must exist; an existing event with no answers yields an empty list.
pub async fn list_for_event(event_id: &str, page: Page, state: &AppState) -> AppResult<Vec<Presence>> {
    state.events.get(event_id).await?;
    state.presences.list_for_event(event_id, page).await
}
