//! Data Models
//!
//! The locally-owned checklist task plus the entities returned by the
//! remote API.

use serde::{Deserialize, Serialize};

/// Checklist entry, owned by the checklist root
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub done: bool,
}

/// User from the directory endpoint; extra JSON fields are ignored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// To-do entry fetched per user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_decodes_with_extra_fields() {
        // Shape of the real /users payload: nested address/company plus
        // fields we do not model
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "street": "Kulas Light", "city": "Gwenborough" },
            "phone": "1-770-736-8031",
            "company": { "name": "Romaguera-Crona" }
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.email, "Sincere@april.biz");
    }

    #[test]
    fn test_todo_array_decodes() {
        let json = r#"[
            { "userId": 1, "id": 1, "title": "delectus aut autem", "completed": false },
            { "userId": 1, "id": 2, "title": "quis ut nam", "completed": true }
        ]"#;

        let todos: Vec<TodoItem> = serde_json::from_str(json).unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].title, "delectus aut autem");
        assert!(todos[1].completed);
    }
}
