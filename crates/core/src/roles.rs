//! The closed set of user roles.
//!
//! Role names on the wire (JSON and the `user_role` Postgres enum) are the
//! Russian strings the client contract was built around; Rust code matches on
//! the enum, never on strings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role")]
pub enum Role {
    #[serde(rename = "Админ")]
    #[sqlx(rename = "Админ")]
    Admin,
    #[serde(rename = "Староста")]
    #[sqlx(rename = "Староста")]
    Headman,
    #[serde(rename = "Студент")]
    #[sqlx(rename = "Студент")]
    Student,
    #[serde(rename = "Преподаватель")]
    #[sqlx(rename = "Преподаватель")]
    Teacher,
}

impl Role {
    /// The wire name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Админ",
            Role::Headman => "Староста",
            Role::Student => "Студент",
            Role::Teacher => "Преподаватель",
        }
    }

    /// Whether the exactly-one-link rule holds for this role.
    ///
    /// Headman/Student/Teacher users must reference exactly their own kind of
    /// person row; Admin users reference none.
    pub fn matches_links(
        self,
        headman_id: Option<i64>,
        student_id: Option<i64>,
        teacher_id: Option<i64>,
    ) -> bool {
        match self {
            Role::Headman => headman_id.is_some() && student_id.is_none() && teacher_id.is_none(),
            Role::Student => headman_id.is_none() && student_id.is_some() && teacher_id.is_none(),
            Role::Teacher => headman_id.is_none() && student_id.is_none() && teacher_id.is_some(),
            Role::Admin => headman_id.is_none() && student_id.is_none() && teacher_id.is_none(),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for role in [Role::Admin, Role::Headman, Role::Student, Role::Teacher] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
            let back: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(back, role);
        }
    }

    #[test]
    fn test_link_rule_per_role() {
        assert!(Role::Student.matches_links(None, Some(1), None));
        assert!(!Role::Student.matches_links(Some(1), Some(1), None));
        assert!(Role::Headman.matches_links(Some(3), None, None));
        assert!(Role::Teacher.matches_links(None, None, Some(7)));
        assert!(Role::Admin.matches_links(None, None, None));
        assert!(!Role::Admin.matches_links(None, Some(1), None));
    }
}
