//! Invite models for the admin invite tracker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::{parse_whole_number, trim_field};
use validator::Validate;

/// Maximum length of the person and village names (characters).
pub const MAX_INVITE_NAME_LENGTH: u64 = 120;

/// Headcount stored when nothing usable was submitted on create.
pub const DEFAULT_TOTAL_PEOPLE: i32 = 1;

/// A household invited to the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Invite {
    pub id: i64,
    pub person_name: String,
    pub village_name: String,
    pub total_people: i32,
    pub created_at: DateTime<Utc>,
}

/// Raw invite form submission, used for both create and edit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InviteForm {
    pub person_name: Option<String>,
    pub village_name: Option<String>,
    pub total_people: Option<String>,
}

/// What to store when the submitted headcount is missing or not a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadcountPolicy {
    /// Creating an invite: fall back to one person.
    DefaultToOne,
    /// Editing an invite: keep the headcount already on record.
    KeepCurrent(i32),
}

impl HeadcountPolicy {
    fn fallback(self) -> i32 {
        match self {
            HeadcountPolicy::DefaultToOne => DEFAULT_TOTAL_PEOPLE,
            HeadcountPolicy::KeepCurrent(current) => current,
        }
    }

    /// Resolves a submitted headcount. Numbers below one are passed through
    /// unchanged so that validation can reject them.
    pub fn resolve(self, raw: Option<&str>) -> i32 {
        raw.and_then(parse_whole_number)
            .unwrap_or_else(|| self.fallback())
    }
}

/// Invite fields after trimming and headcount resolution, awaiting validation.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct InviteDraft {
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    #[validate(length(max = 120, message = "Person name must be at most 120 characters"))]
    pub person_name: String,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    #[validate(length(max = 120, message = "Village name must be at most 120 characters"))]
    pub village_name: String,

    #[validate(range(min = 1, message = "Total people must be at least 1"))]
    pub total_people: i32,
}

impl InviteDraft {
    /// Builds a draft for a new invite.
    pub fn for_create(person: &str, village: &str, total: Option<&str>) -> Self {
        Self {
            person_name: trim_field(Some(person)),
            village_name: trim_field(Some(village)),
            total_people: HeadcountPolicy::DefaultToOne.resolve(total),
        }
    }

    /// Builds a draft replacing `current`. Omitted fields keep their current value.
    pub fn for_update(
        current: &Invite,
        person: Option<&str>,
        village: Option<&str>,
        total: Option<&str>,
    ) -> Self {
        Self {
            person_name: trim_field(Some(person.unwrap_or(&current.person_name))),
            village_name: trim_field(Some(village.unwrap_or(&current.village_name))),
            total_people: HeadcountPolicy::KeepCurrent(current.total_people).resolve(total),
        }
    }
}

/// Sum of `total_people` over the given invites.
pub fn total_invited_people(invites: &[Invite]) -> i64 {
    invites.iter().map(|i| i64::from(i.total_people)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> Invite {
        Invite {
            id: 4,
            person_name: "Ali".to_string(),
            village_name: "Village A".to_string(),
            total_people: 3,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_create_policy_defaults_to_one() {
        assert_eq!(HeadcountPolicy::DefaultToOne.resolve(Some("abc")), 1);
        assert_eq!(HeadcountPolicy::DefaultToOne.resolve(None), 1);
        assert_eq!(HeadcountPolicy::DefaultToOne.resolve(Some("5")), 5);
    }

    #[test]
    fn test_update_policy_keeps_current() {
        assert_eq!(HeadcountPolicy::KeepCurrent(7).resolve(Some("many")), 7);
        assert_eq!(HeadcountPolicy::KeepCurrent(7).resolve(None), 7);
        assert_eq!(HeadcountPolicy::KeepCurrent(7).resolve(Some("2")), 2);
    }

    #[test]
    fn test_out_of_range_numbers_are_not_coerced() {
        assert_eq!(HeadcountPolicy::DefaultToOne.resolve(Some("0")), 0);
        assert_eq!(HeadcountPolicy::KeepCurrent(4).resolve(Some("-3")), -3);
    }

    #[test]
    fn test_create_draft_validation() {
        assert!(InviteDraft::for_create("Ali", "Village A", Some("3"))
            .validate()
            .is_ok());
        assert!(InviteDraft::for_create(" ", "Village A", Some("3"))
            .validate()
            .is_err());
        assert!(InviteDraft::for_create("Ali", "", Some("3"))
            .validate()
            .is_err());
        assert!(InviteDraft::for_create("Ali", "Village A", Some("0"))
            .validate()
            .is_err());
    }

    #[test]
    fn test_create_draft_non_numeric_total() {
        let draft = InviteDraft::for_create("Ali", "Village A", Some("a few"));
        assert_eq!(draft.total_people, 1);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_name_length_limits() {
        let long = "v".repeat(MAX_INVITE_NAME_LENGTH as usize + 1);
        assert!(InviteDraft::for_create(&long, "Village A", None)
            .validate()
            .is_err());
        assert!(InviteDraft::for_create("Ali", &long, None)
            .validate()
            .is_err());
    }

    #[test]
    fn test_update_draft_falls_back_to_current() {
        let draft = InviteDraft::for_update(&existing(), None, None, None);
        assert_eq!(draft.person_name, "Ali");
        assert_eq!(draft.village_name, "Village A");
        assert_eq!(draft.total_people, 3);
    }

    #[test]
    fn test_update_draft_blank_field_is_invalid() {
        let draft = InviteDraft::for_update(&existing(), Some("   "), None, None);
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_update_draft_replaces_fields() {
        let draft =
            InviteDraft::for_update(&existing(), Some(" Sara "), Some("Village B"), Some("x"));
        assert_eq!(draft.person_name, "Sara");
        assert_eq!(draft.village_name, "Village B");
        assert_eq!(draft.total_people, 3);
    }

    #[test]
    fn test_total_invited_people() {
        let mut second = existing();
        second.total_people = 2;
        assert_eq!(total_invited_people(&[existing(), second]), 5);
        assert_eq!(total_invited_people(&[]), 0);
    }
}
