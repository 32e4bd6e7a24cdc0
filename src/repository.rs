use anyhow::Result;

use crate::{db::driver::Db, models::Todo};

const TODO_PREFIX: &[u8] = b"todo:";

/// Owner of the todo collection.
///
/// Absence is reported as `None` or as a no-op, never as an error. Errors
/// only come from the backing storage.
pub trait TaskStore: Send + Sync {
    /// All todos in insertion order.
    fn get_all(&self) -> Result<Vec<Todo>>;
    fn get_by_id(&self, id: u64) -> Result<Option<Todo>>;
    /// Appends a todo whose id was taken from [`TaskStore::next_id`].
    fn add(&mut self, todo: Todo) -> Result<Todo>;
    /// Replaces the stored todo with the same id. Returns `None` if it is gone.
    fn update(&mut self, todo: Todo) -> Result<Option<Todo>>;
    fn delete_by_id(&mut self, id: u64) -> Result<()>;
    /// Ids start at 1 and are never handed out twice, deletions included.
    fn next_id(&mut self) -> Result<u64>;
}

fn todo_key(id: u64) -> Vec<u8> {
    [TODO_PREFIX, id.to_be_bytes().as_slice()].concat()
}

#[derive(Debug)]
pub struct DbTaskStore {
    db: Db,
}
impl DbTaskStore {
    pub fn new() -> Result<Self> {
        Ok(Self { db: Db::new()? })
    }
}

impl TaskStore for DbTaskStore {
    fn get_all(&self) -> Result<Vec<Todo>> {
        self.db
            .iter_prefix::<Todo, _>(TODO_PREFIX)?
            .map(|item| item.map(|(_, todo)| todo))
            .collect()
    }

    fn get_by_id(&self, id: u64) -> Result<Option<Todo>> {
        self.db.get(todo_key(id))
    }

    fn add(&mut self, todo: Todo) -> Result<Todo> {
        self.db.insert(todo_key(todo.id), &todo)?;
        Ok(todo)
    }

    fn update(&mut self, todo: Todo) -> Result<Option<Todo>> {
        let key = todo_key(todo.id);
        if self.db.get::<Todo, _>(&key)?.is_none() {
            return Ok(None);
        }
        self.db.insert(&key, &todo)?;
        Ok(Some(todo))
    }

    fn delete_by_id(&mut self, id: u64) -> Result<()> {
        self.db.remove(todo_key(id))
    }

    fn next_id(&mut self) -> Result<u64> {
        Ok(self.db.next_id()? + 1)
    }
}
