use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub name: String,
    pub due_date: DateTime<Utc>,
    pub is_completed: bool,
}
impl Todo {
    pub fn from_new(id: u64, new: NewTodo) -> Self {
        Self {
            id,
            name: new.name,
            due_date: new.due_date,
            is_completed: new.is_completed,
        }
    }

    pub fn toggle(&mut self) {
        self.is_completed = !self.is_completed;
    }
}

// body of `POST /todos`, any `id` sent by the client is dropped
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub name: String,
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub is_completed: bool,
}
