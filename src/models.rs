use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Tower positions a member can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "segond")]
    Segond,
    #[serde(rename = "baix")]
    Baix,
    #[serde(rename = "primera mà")]
    PrimeraMa,
    #[serde(rename = "segona mà")]
    SegonaMa,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Segond, Role::Baix, Role::PrimeraMa, Role::SegonaMa];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Segond => "segond",
            Role::Baix => "baix",
            Role::PrimeraMa => "primera mà",
            Role::SegonaMa => "segona mà",
        }
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownRole(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
    Maybe,
}

impl Answer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::Yes => "yes",
            Answer::No => "no",
            Answer::Maybe => "maybe",
        }
    }
}

impl FromStr for Answer {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Answer::Yes),
            "no" => Ok(Answer::No),
            "maybe" => Ok(Answer::Maybe),
            other => Err(ValidationError::UnknownAnswer(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recurring {
    pub interval: String,
    #[serde(with = "date_format")]
    pub until: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub uuid: String,
    pub name: String,
    #[serde(with = "date_format")]
    pub start_date: NaiveDateTime,
    #[serde(with = "date_format")]
    pub end_date: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub recurring: Option<Recurring>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub uuid: String,
    pub name: String,
    pub extra: String,
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    pub uuid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presence {
    pub event_uuid: String,
    pub member_uuid: String,
    pub answer: Answer,
}

/// Fresh external identifier: a v4 uuid rendered as 32 lowercase hex chars,
/// which is what the route table accepts.
pub fn new_identifier() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// `"YYYY-MM-DD HH:MM"` on the wire.
pub mod date_format {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M";

    /// Minute precision only, so whatever is accepted is exactly what gets written back.
    pub fn parse(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(value, FORMAT)
    }

    pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(|e| de::Error::custom(format!("invalid date '{}': {}", raw, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_labels_round_trip_through_from_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
        assert_eq!(
            "second".parse::<Role>(),
            Err(ValidationError::UnknownRole("second".into()))
        );
    }

    #[test]
    fn role_serializes_to_its_label() {
        let json = serde_json::to_string(&vec![Role::PrimeraMa, Role::Baix]).unwrap();
        assert_eq!(json, r#"["primera mà","baix"]"#);
    }

    #[test]
    fn answer_is_case_sensitive() {
        assert_eq!("maybe".parse::<Answer>(), Ok(Answer::Maybe));
        assert_eq!(
            "Yes".parse::<Answer>(),
            Err(ValidationError::UnknownAnswer("Yes".into()))
        );
    }

    #[test]
    fn event_dates_use_minute_format() {
        let event = Event {
            uuid: "deadbeef".into(),
            name: "diada".into(),
            start_date: date_format::parse("2018-06-01 23:16").unwrap(),
            end_date: date_format::parse("2018-06-03 17:14").unwrap(),
            recurring: None,
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["startDate"], "2018-06-01 23:16");
        assert_eq!(value["endDate"], "2018-06-03 17:14");
        assert!(value.get("recurring").is_none());
    }

    #[test]
    fn dates_with_seconds_are_rejected() {
        assert!(date_format::parse("2018-06-01 10:00:30").is_err());
        assert!(date_format::parse("2018-06-01T10:00").is_err());

        let parsed = date_format::parse("2018-06-01 10:00").unwrap();
        assert_eq!(parsed.format(date_format::FORMAT).to_string(), "2018-06-01 10:00");
    }

    #[test]
    fn identifiers_are_hex_and_distinct() {
        let a = new_identifier();
        let b = new_identifier();
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(a, b);
    }
}
