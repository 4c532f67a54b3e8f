use bitflags::bitflags;

use crate::{errors::ValidationError, models::Role};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct RoleSet: u8 {
        const SEGOND = 1 << 0;
        const BAIX = 1 << 1;
        const PRIMERA_MA = 1 << 2;
        const SEGONA_MA = 1 << 3;
    }
}

impl From<Role> for RoleSet {
    fn from(role: Role) -> Self {
        match role {
            Role::Segond => RoleSet::SEGOND,
            Role::Baix => RoleSet::BAIX,
            Role::PrimeraMa => RoleSet::PRIMERA_MA,
            Role::SegonaMa => RoleSet::SEGONA_MA,
        }
    }
}

/// Checks a raw role list against the fixed vocabulary. </br>
/// returns the typed roles in the order given </br>
/// fails with **`ValidationError::UnknownRole`** or **`ValidationError::DuplicateRole`**
/// on the first offending entry
pub fn validate<S: AsRef<str>>(roles: &[S]) -> Result<Vec<Role>, ValidationError> {
    let mut seen = RoleSet::empty();
    let mut typed = Vec::with_capacity(roles.len());
    for raw in roles {
        let raw = raw.as_ref();
        let role: Role = raw.parse()?;
        let flag = RoleSet::from(role);
        if seen.contains(flag) {
            return Err(ValidationError::DuplicateRole(raw.to_string()));
        }
        seen.insert(flag);
        typed.push(role);
    }
    Ok(typed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_valid() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(validate(&empty), Ok(vec![]));
    }

    #[test]
    fn full_vocabulary_is_valid() {
        let roles = ["segond", "baix", "primera mà", "segona mà"];
        assert_eq!(
            validate(&roles),
            Ok(vec![Role::Segond, Role::Baix, Role::PrimeraMa, Role::SegonaMa])
        );
    }

    #[test]
    fn order_is_preserved() {
        assert_eq!(
            validate(&["segona mà", "segond"]),
            Ok(vec![Role::SegonaMa, Role::Segond])
        );
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert_eq!(
            validate(&["segond", "toto", "baix"]),
            Err(ValidationError::UnknownRole("toto".into()))
        );
    }

    #[test]
    fn duplicate_role_is_rejected() {
        assert_eq!(
            validate(&["segond", "segond", "baix"]),
            Err(ValidationError::DuplicateRole("segond".into()))
        );
    }

    #[test]
    fn match_is_case_sensitive() {
        assert_eq!(
            validate(&["Baix"]),
            Err(ValidationError::UnknownRole("Baix".into()))
        );
    }
}
