//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub text: String,
    pub mark: bool,
    pub parent_id: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_server_list() {
        let body = r#"[
            {"id":1,"text":"Shopping","mark":false,"parent_id":null},
            {"id":2,"text":"Milk","mark":true,"parent_id":1}
        ]"#;
        let todos: Vec<Todo> = serde_json::from_str(body).unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[1].parent_id, Some(1));
        assert!(todos[1].mark);
    }
}
