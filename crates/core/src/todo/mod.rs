mod types;

pub use types::{OwnerId, TodoItem, TodoPatch};
