//! Shared data types for the schedule Mini App client.
//!
//! This crate defines the wire shapes exchanged with the schedule backend
//! and the in-memory rules the views rely on: composite-key equality for
//! entries without a stable identifier, day grouping for the schedule list,
//! and the removal rules applied after a confirmed dismissal.

use serde::{Deserialize, Serialize};

/// One lesson as returned by `GET /schedule`.
///
/// Entries from the schedule feed carry no stable identifier; they are
/// compared by [`EntryKey`]. Entries rebuilt from the hidden-subjects view
/// carry the backend row id instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: Option<i64>,
    pub discipline: String,
    pub employee_short: Option<String>,
    pub study_time: Option<String>,
    pub study_time_begin: Option<String>,
    pub study_time_end: Option<String>,
    pub cabinet: Option<String>,
    pub study_type: String,
    pub subgroup: Option<u32>,
    #[serde(default)]
    pub full_date: String,
    #[serde(default)]
    pub week_day: String,
}

impl ScheduleEntry {
    /// Day header key: the full date with the `.YYYY` suffix dropped.
    pub fn date_key(&self) -> &str {
        let cut = self.full_date.len().saturating_sub(5);
        self.full_date.get(..cut).unwrap_or(&self.full_date)
    }

    /// Composite equality key for the schedule view.
    pub fn key(&self) -> EntryKey {
        EntryKey::from(self)
    }
}

/// Composite key used to match entries that lack a stable identifier.
///
/// An absent teacher is normalized to an empty string so that entries
/// compare the same way the backend matches them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryKey {
    pub discipline: String,
    pub teacher: String,
    pub study_type: String,
    pub subgroup: Option<u32>,
}

impl From<&ScheduleEntry> for EntryKey {
    fn from(entry: &ScheduleEntry) -> Self {
        Self {
            discipline: entry.discipline.clone(),
            teacher: entry.employee_short.clone().unwrap_or_default(),
            study_type: entry.study_type.clone(),
            subgroup: entry.subgroup,
        }
    }
}

/// One row from `GET /get_hidden_subjects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiddenSubject {
    pub id: i64,
    pub name: String,
    pub teacher: String,
    pub study_type: String,
    pub subgroup: Option<u32>,
}

impl From<HiddenSubject> for ScheduleEntry {
    fn from(subject: HiddenSubject) -> Self {
        let teacher = if subject.teacher.is_empty() {
            None
        } else {
            Some(subject.teacher)
        };
        Self {
            id: Some(subject.id),
            discipline: subject.name,
            employee_short: teacher,
            study_time: None,
            study_time_begin: None,
            study_time_end: None,
            cabinet: None,
            study_type: subject.study_type,
            subgroup: subject.subgroup,
            full_date: String::new(),
            week_day: String::new(),
        }
    }
}

/// Direction of a confirmed swipe: hide from the schedule, or restore
/// from the hidden-subjects view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissalAction {
    Hide,
    Unhide,
}

impl DismissalAction {
    /// Mutation endpoint path for this direction.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Hide => "/hide_subject",
            Self::Unhide => "/unhide_subject",
        }
    }
}

/// Body of `POST /hide_subject` and `POST /unhide_subject`.
///
/// Carries the same fields the composite key compares on, so the backend
/// can match entries that never received an identifier. `id` is omitted
/// entirely when absent; `subgroup` stays as an explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DismissalRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub teacher: String,
    pub study_type: String,
    pub subgroup: Option<u32>,
}

impl DismissalRequest {
    /// Build the mutation body for one entry.
    pub fn for_entry(entry: &ScheduleEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.discipline.clone(),
            teacher: entry.employee_short.clone().unwrap_or_default(),
            study_type: entry.study_type.clone(),
            subgroup: entry.subgroup,
        }
    }
}

/// One study group from `GET /groups`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupInfo {
    pub site_id: String,
    pub name: String,
    pub faculty: String,
    pub semester: i32,
}

/// Body of `POST /set-group`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetGroupRequest {
    pub group_id: String,
}

/// Response of `POST /auth`. A missing `group` drives the group-selection
/// onboarding flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub ok: bool,
    pub username: Option<String>,
    pub group: Option<String>,
}

/// One day of the schedule view.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub date: String,
    pub week_day: String,
    pub entries: Vec<ScheduleEntry>,
}

/// Group a flat schedule by day, preserving the order days first appear.
///
/// The weekday label is taken from the first entry of each day, matching
/// the header the schedule view renders.
pub fn group_by_date(entries: &[ScheduleEntry]) -> Vec<DayGroup> {
    let mut days: Vec<DayGroup> = Vec::new();
    for entry in entries {
        let key = entry.date_key();
        match days.iter_mut().find(|day| day.date == key) {
            Some(day) => day.entries.push(entry.clone()),
            None => days.push(DayGroup {
                date: key.to_string(),
                week_day: entry.week_day.clone(),
                entries: vec![entry.clone()],
            }),
        }
    }
    days
}

/// Remove the first entry matching the composite key. Returns whether an
/// entry was removed. Field-identical duplicates past the first are kept.
pub fn remove_by_key(entries: &mut Vec<ScheduleEntry>, key: &EntryKey) -> bool {
    match entries.iter().position(|entry| &entry.key() == key) {
        Some(index) => {
            entries.remove(index);
            true
        }
        None => false,
    }
}

/// Remove the first hidden subject with the given row id.
pub fn remove_by_id(subjects: &mut Vec<HiddenSubject>, id: i64) -> bool {
    match subjects.iter().position(|subject| subject.id == id) {
        Some(index) => {
            subjects.remove(index);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(discipline: &str, subgroup: Option<u32>) -> ScheduleEntry {
        ScheduleEntry {
            id: None,
            discipline: discipline.to_string(),
            employee_short: Some("Шевченко Т. Г.".to_string()),
            study_time: Some("1 пара".to_string()),
            study_time_begin: Some("08:30".to_string()),
            study_time_end: Some("09:50".to_string()),
            cabinet: Some("305".to_string()),
            study_type: "Лекція".to_string(),
            subgroup,
            full_date: "26.05.2025".to_string(),
            week_day: "Понеділок".to_string(),
        }
    }

    #[test]
    fn test_schedule_payload_deserialization() {
        let json = r#"{
            "discipline": "Вища математика",
            "employee_short": "Коваль О. І.",
            "study_time": "2 пара",
            "study_time_begin": "10:00",
            "study_time_end": "11:20",
            "cabinet": "112",
            "study_type": "Практика",
            "full_date": "27.05.2025",
            "week_day": "Вівторок"
        }"#;

        let parsed: ScheduleEntry = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.discipline, "Вища математика");
        assert_eq!(parsed.id, None);
        assert_eq!(parsed.subgroup, None);
        assert_eq!(parsed.week_day, "Вівторок");
    }

    #[test]
    fn test_entry_serialization_round_trip() {
        let original = entry("Фізика", Some(2));

        let json = serde_json::to_string(&original).unwrap();
        let parsed: ScheduleEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, original);
    }

    #[test]
    fn test_date_key_drops_year() {
        assert_eq!(entry("Фізика", None).date_key(), "26.05");
    }

    #[test]
    fn test_date_key_of_empty_date() {
        let mut no_date = entry("Фізика", None);
        no_date.full_date = String::new();
        assert_eq!(no_date.date_key(), "");
    }

    #[test]
    fn test_key_normalizes_missing_teacher() {
        let mut without_teacher = entry("Фізика", None);
        without_teacher.employee_short = None;
        let mut empty_teacher = entry("Фізика", None);
        empty_teacher.employee_short = Some(String::new());

        assert_eq!(without_teacher.key(), empty_teacher.key());
    }

    #[test]
    fn test_key_distinguishes_subgroups() {
        assert_ne!(entry("Фізика", Some(1)).key(), entry("Фізика", Some(2)).key());
    }

    #[test]
    fn test_dismissal_request_defaults() {
        let mut source = entry("Фізика", None);
        source.employee_short = None;

        let request = DismissalRequest::for_entry(&source);
        let value = serde_json::to_value(&request).unwrap();

        assert!(value.get("id").is_none());
        assert_eq!(value["teacher"], "");
        assert!(value["subgroup"].is_null());
        assert_eq!(value["name"], "Фізика");
        assert_eq!(value["study_type"], "Лекція");
    }

    #[test]
    fn test_dismissal_request_keeps_row_id() {
        let mut source = entry("Фізика", Some(1));
        source.id = Some(42);

        let value = serde_json::to_value(DismissalRequest::for_entry(&source)).unwrap();

        assert_eq!(value["id"], 42);
        assert_eq!(value["subgroup"], 1);
    }

    #[test]
    fn test_dismissal_endpoints() {
        assert_eq!(DismissalAction::Hide.endpoint(), "/hide_subject");
        assert_eq!(DismissalAction::Unhide.endpoint(), "/unhide_subject");
    }

    #[test]
    fn test_group_by_date_preserves_day_order() {
        let mut tuesday = entry("Фізика", None);
        tuesday.full_date = "27.05.2025".to_string();
        tuesday.week_day = "Вівторок".to_string();

        let flat = vec![entry("Фізика", None), tuesday, entry("Хімія", None)];
        let days = group_by_date(&flat);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, "26.05");
        assert_eq!(days[0].week_day, "Понеділок");
        assert_eq!(days[0].entries.len(), 2);
        assert_eq!(days[1].date, "27.05");
        assert_eq!(days[1].entries.len(), 1);
    }

    #[test]
    fn test_remove_by_key_removes_single_match() {
        let mut entries = vec![entry("Фізика", Some(1)), entry("Фізика", Some(2))];

        assert!(remove_by_key(&mut entries, &entry("Фізика", Some(1)).key()));

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].subgroup, Some(2));
    }

    #[test]
    fn test_remove_by_key_keeps_duplicates_past_first() {
        let mut entries = vec![entry("Фізика", None), entry("Фізика", None)];

        assert!(remove_by_key(&mut entries, &entry("Фізика", None).key()));

        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_remove_by_key_without_match() {
        let mut entries = vec![entry("Фізика", None)];

        assert!(!remove_by_key(&mut entries, &entry("Хімія", None).key()));
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_remove_by_id() {
        let subject = HiddenSubject {
            id: 7,
            name: "Фізика".to_string(),
            teacher: String::new(),
            study_type: "Лекція".to_string(),
            subgroup: None,
        };
        let mut subjects = vec![subject.clone()];

        assert!(remove_by_id(&mut subjects, 7));
        assert!(subjects.is_empty());
        assert!(!remove_by_id(&mut subjects, 7));
    }

    #[test]
    fn test_hidden_subject_into_entry() {
        let subject = HiddenSubject {
            id: 7,
            name: "Фізика".to_string(),
            teacher: String::new(),
            study_type: "Лабораторна".to_string(),
            subgroup: Some(2),
        };

        let converted = ScheduleEntry::from(subject);

        assert_eq!(converted.id, Some(7));
        assert_eq!(converted.employee_short, None);
        assert_eq!(converted.study_time, None);
        assert_eq!(converted.subgroup, Some(2));
    }

    #[test]
    fn test_auth_response_without_group() {
        let json = r#"{"ok": true, "username": "student"}"#;

        let parsed: AuthResponse = serde_json::from_str(json).unwrap();

        assert!(parsed.ok);
        assert_eq!(parsed.username.as_deref(), Some("student"));
        assert_eq!(parsed.group, None);
    }

    #[test]
    fn test_set_group_request_serialization() {
        let value = serde_json::to_value(SetGroupRequest {
            group_id: "3POJ9CKXSCAW".to_string(),
        })
        .unwrap();

        assert_eq!(value["group_id"], "3POJ9CKXSCAW");
    }
}
