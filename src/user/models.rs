use serde::{Deserialize, Serialize};

/// A user record held by the in-memory store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
}

impl UserModel {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The three users every process starts with
pub fn seed_users() -> Vec<UserModel> {
    vec![
        UserModel::new(1, "Amir"),
        UserModel::new(2, "John"),
        UserModel::new(3, "Stacy"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_users_ids_are_unique() {
        let users = seed_users();
        assert_eq!(users.len(), 3);

        let ids: std::collections::HashSet<i64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), users.len());
    }

    #[test]
    fn test_user_model_serialization() {
        let user = UserModel::new(1, "Amir");

        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Amir"}"#);

        let deserialized: UserModel = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, user);
    }
}
