use log::info;

use crate::{
   dto::{NewEventDto, UpdateEventDto},
   models::Event,
   errors::AppResult,
   state::AppState,
};

use super::{auth::require_admin, pagination::Page};

pub async fn create(admin_id: &str, dto: NewEventDto, state: &AppState) -> AppResult<Event> {
   require_admin(state.gate.as_ref(), admin_id).await?;
   let event = state.events.create(dto).await?;
   info!("admin {} created event {} ({})", admin_id, event.uuid, event.name);
   Ok(event)
}

pub async fn get_by_id(id: &str, state: &AppState) -> AppResult<Event> {
   state.events.get(id).await
}

pub async fn get_all(page: Page, state: &AppState) -> AppResult<Vec<Event>> {
   state.events.list(page).await
}

pub async fn update(id: &str, dto: UpdateEventDto, state: &AppState) -> AppResult<Event> {
   let event = state.events.update(id, dto).await?;
   info!("updated event {}", event.uuid);
   Ok(event)
}

pub async fn delete(id: &str, state: &AppState) -> AppResult<()> {
   state.events.delete(id).await?;
   info!("deleted event {}", id);
   Ok(())
}
