use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::{
    errors::ValidationError,
    models::{date_format, Recurring},
};

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewEventDto {
    pub name: String,
    #[serde(with = "date_format")]
    pub start_date: NaiveDateTime,
    #[serde(with = "date_format")]
    pub end_date: NaiveDateTime,
    #[serde(default)]
    pub recurring: Option<Recurring>,
}

/// Full replacement of an event's mutable fields.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventDto {
    pub name: String,
    #[serde(with = "date_format")]
    pub start_date: NaiveDateTime,
    #[serde(with = "date_format")]
    pub end_date: NaiveDateTime,
}

/// Checks shared by create and update.
pub fn check_event_fields(
    name: &str,
    start_date: &NaiveDateTime,
    end_date: &NaiveDateTime,
) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if end_date < start_date {
        return Err(ValidationError::EndBeforeStart);
    }
    Ok(())
}

impl NewEventDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_event_fields(&self.name, &self.start_date, &self.end_date)
    }
}

impl UpdateEventDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_event_fields(&self.name, &self.start_date, &self.end_date)
    }
}

/// Roles arrive as raw strings so unknown labels surface as a
/// `ValidationError` instead of a generic body error.
#[derive(Debug, Deserialize, Clone)]
pub struct NewMemberDto {
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub extra: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpdateMemberDto {
    pub name: String,
    #[serde(default)]
    pub extra: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ParticipationDto {
    pub answer: String,
}

/// Raw `?start=&count=` values. Anything that is not a non-negative integer
/// counts as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub start: Option<String>,
    pub count: Option<String>,
}

impl ListQuery {
    /// Built from the raw query pairs rather than a struct extractor, so a
    /// repeated key never fails the request. The last occurrence wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = ListQuery::default();
        for (key, value) in pairs {
            match key.as_str() {
                "start" => query.start = Some(value),
                "count" => query.count = Some(value),
                _ => {}
            }
        }
        query
    }

    pub fn bounds(&self) -> (Option<u32>, Option<u32>) {
        let parse = |v: &Option<String>| v.as_deref().and_then(|s| s.trim().parse::<u32>().ok());
        (parse(&self.start), parse(&self.count))
    }
}
