//! Timetable vocabularies: the alternating upper/lower week pattern and the
//! days of the week.
//!
//! Both enums derive `Ord` in declaration order so grouped schedule output
//! (`BTreeMap` keyed by them) comes out upper-before-lower, Monday-first.
//! The matching Postgres enum types are declared in the same order, which
//! makes `ORDER BY week_type, day_of_week` agree with the in-process order.

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "week_type")]
pub enum WeekType {
    #[serde(rename = "Верхняя")]
    #[sqlx(rename = "Верхняя")]
    Upper,
    #[serde(rename = "Нижняя")]
    #[sqlx(rename = "Нижняя")]
    Lower,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "day_of_week")]
pub enum DayOfWeek {
    #[serde(rename = "Понедельник")]
    #[sqlx(rename = "Понедельник")]
    Monday,
    #[serde(rename = "Вторник")]
    #[sqlx(rename = "Вторник")]
    Tuesday,
    #[serde(rename = "Среда")]
    #[sqlx(rename = "Среда")]
    Wednesday,
    #[serde(rename = "Четверг")]
    #[sqlx(rename = "Четверг")]
    Thursday,
    #[serde(rename = "Пятница")]
    #[sqlx(rename = "Пятница")]
    Friday,
    #[serde(rename = "Суббота")]
    #[sqlx(rename = "Суббота")]
    Saturday,
    #[serde(rename = "Воскресенье")]
    #[sqlx(rename = "Воскресенье")]
    Sunday,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_type_wire_names() {
        assert_eq!(serde_json::to_string(&WeekType::Upper).unwrap(), "\"Верхняя\"");
        let parsed: WeekType = serde_json::from_str("\"Нижняя\"").unwrap();
        assert_eq!(parsed, WeekType::Lower);
    }

    #[test]
    fn test_day_order_is_calendar_order() {
        assert!(DayOfWeek::Monday < DayOfWeek::Tuesday);
        assert!(DayOfWeek::Saturday < DayOfWeek::Sunday);
    }

    #[test]
    fn test_enum_map_keys_serialize_as_strings() {
        use std::collections::BTreeMap;
        let mut grouped: BTreeMap<DayOfWeek, u32> = BTreeMap::new();
        grouped.insert(DayOfWeek::Wednesday, 2);
        assert_eq!(
            serde_json::to_string(&grouped).unwrap(),
            r#"{"Среда":2}"#
        );
    }
}
