/// All surrogate primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Calendar dates (attendance dates, semester start) carry no time zone.
pub type Date = chrono::NaiveDate;

/// Wall-clock time of a class slot.
pub type TimeOfDay = chrono::NaiveTime;

/// Serde adapter for `NaiveTime` fields using the wire format `"HH:MM"`.
///
/// ```ignore
/// #[serde(with = "attendance_core::types::hh_mm")]
/// pub start_time: TimeOfDay,
/// ```
pub mod hh_mm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(value: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Slot {
        #[serde(with = "super::hh_mm")]
        start_time: NaiveTime,
    }

    #[test]
    fn test_hh_mm_round_trip() {
        let json = r#"{"start_time":"08:45"}"#;
        let slot: Slot = serde_json::from_str(json).unwrap();
        assert_eq!(slot.start_time, NaiveTime::from_hms_opt(8, 45, 0).unwrap());
        assert_eq!(serde_json::to_string(&slot).unwrap(), json);
    }

    #[test]
    fn test_hh_mm_rejects_seconds() {
        let result: Result<Slot, _> = serde_json::from_str(r#"{"start_time":"08:45:30"}"#);
        assert!(result.is_err());
    }
}
