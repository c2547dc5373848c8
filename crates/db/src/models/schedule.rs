//! Schedule entity model and DTOs.
//!
//! One row per recurring class slot: which group meets which teacher for
//! which discipline, in which classroom, on which (week type, day, time).

use std::collections::BTreeMap;

use attendance_core::types::{Date, DbId, TimeOfDay};
use attendance_core::week::{DayOfWeek, WeekType};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Schedule {
    pub schedule_id: DbId,
    pub group_id: String,
    pub discipline_id: DbId,
    pub teacher_id: DbId,
    pub discipline_type_id: DbId,
    pub classroom_id: DbId,
    pub semester: i32,
    pub begin_studies: Date,
    pub week_type: WeekType,
    pub day_of_week: DayOfWeek,
    #[serde(with = "attendance_core::types::hh_mm")]
    pub start_time: TimeOfDay,
    pub is_actual: bool,
}

/// Read-side row enriched with discipline, teacher, type, and classroom names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScheduleInfo {
    pub schedule_id: DbId,
    pub group_id: String,
    pub discipline_id: DbId,
    pub teacher_id: DbId,
    pub discipline_type_id: DbId,
    pub classroom_id: DbId,
    pub semester: i32,
    pub begin_studies: Date,
    pub week_type: WeekType,
    pub day_of_week: DayOfWeek,
    #[serde(with = "attendance_core::types::hh_mm")]
    pub start_time: TimeOfDay,
    pub is_actual: bool,
    pub discipline_name: String,
    pub teacher_last_name: String,
    pub teacher_first_name: String,
    pub teacher_middle_name: String,
    pub discipline_type_name: String,
    pub classroom_name: String,
}

/// Timetable view: semester -> week type -> day -> slots, ordered by the
/// `Ord` of the key enums (upper week first, Monday first).
pub type GroupedSchedules = BTreeMap<i32, BTreeMap<WeekType, BTreeMap<DayOfWeek, Vec<ScheduleInfo>>>>;

/// Fold an ordered slot listing into the nested timetable view.
pub fn group_schedules(slots: Vec<ScheduleInfo>) -> GroupedSchedules {
    let mut grouped = GroupedSchedules::new();
    for slot in slots {
        grouped
            .entry(slot.semester)
            .or_default()
            .entry(slot.week_type)
            .or_default()
            .entry(slot.day_of_week)
            .or_default()
            .push(slot);
    }
    grouped
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSchedule {
    pub group_id: String,
    pub discipline_id: DbId,
    pub teacher_id: DbId,
    pub discipline_type_id: DbId,
    pub classroom_id: DbId,
    pub semester: i32,
    pub begin_studies: Date,
    pub week_type: WeekType,
    pub day_of_week: DayOfWeek,
    #[serde(with = "attendance_core::types::hh_mm")]
    pub start_time: TimeOfDay,
    pub is_actual: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PutSchedule {
    pub schedule_id: DbId,
    pub group_id: String,
    pub discipline_id: DbId,
    pub teacher_id: DbId,
    pub discipline_type_id: DbId,
    pub classroom_id: DbId,
    pub semester: i32,
    pub begin_studies: Date,
    pub week_type: WeekType,
    pub day_of_week: DayOfWeek,
    #[serde(with = "attendance_core::types::hh_mm")]
    pub start_time: TimeOfDay,
    pub is_actual: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatchSchedule {
    pub schedule_id: DbId,
    pub group_id: Option<String>,
    pub discipline_id: Option<DbId>,
    pub teacher_id: Option<DbId>,
    pub discipline_type_id: Option<DbId>,
    pub classroom_id: Option<DbId>,
    pub semester: Option<i32>,
    pub begin_studies: Option<Date>,
    pub week_type: Option<WeekType>,
    pub day_of_week: Option<DayOfWeek>,
    #[serde(default, with = "hh_mm_opt")]
    pub start_time: Option<TimeOfDay>,
    pub is_actual: Option<bool>,
}

/// `Option` wrapper over the `hh_mm` wire format for patch bodies.
mod hh_mm_opt {
    use attendance_core::types::TimeOfDay;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<TimeOfDay>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| {
            TimeOfDay::parse_from_str(&s, "%H:%M").map_err(serde::de::Error::custom)
        })
        .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn slot(semester: i32, week_type: WeekType, day: DayOfWeek, id: DbId) -> ScheduleInfo {
        ScheduleInfo {
            schedule_id: id,
            group_id: "2101-09.03.01-1".into(),
            discipline_id: 1,
            teacher_id: 1,
            discipline_type_id: 1,
            classroom_id: 1,
            semester,
            begin_studies: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            week_type,
            day_of_week: day,
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            is_actual: true,
            discipline_name: "Математика".into(),
            teacher_last_name: "Иванов".into(),
            teacher_first_name: "Иван".into(),
            teacher_middle_name: "Иванович".into(),
            discipline_type_name: "Лекция".into(),
            classroom_name: "301".into(),
        }
    }

    #[test]
    fn test_grouping_orders_semester_week_day() {
        let grouped = group_schedules(vec![
            slot(2, WeekType::Lower, DayOfWeek::Friday, 4),
            slot(1, WeekType::Upper, DayOfWeek::Monday, 1),
            slot(1, WeekType::Upper, DayOfWeek::Monday, 2),
            slot(1, WeekType::Lower, DayOfWeek::Tuesday, 3),
        ]);

        let semesters: Vec<_> = grouped.keys().copied().collect();
        assert_eq!(semesters, vec![1, 2]);

        let first = &grouped[&1];
        let weeks: Vec<_> = first.keys().copied().collect();
        assert_eq!(weeks, vec![WeekType::Upper, WeekType::Lower]);
        assert_eq!(first[&WeekType::Upper][&DayOfWeek::Monday].len(), 2);
    }

    #[test]
    fn test_patch_start_time_parses_hh_mm() {
        let patch: PatchSchedule =
            serde_json::from_str(r#"{"schedule_id":5,"start_time":"10:15"}"#).unwrap();
        assert_eq!(
            patch.start_time,
            Some(NaiveTime::from_hms_opt(10, 15, 0).unwrap())
        );
        let patch: PatchSchedule = serde_json::from_str(r#"{"schedule_id":5}"#).unwrap();
        assert_eq!(patch.start_time, None);
    }
}
