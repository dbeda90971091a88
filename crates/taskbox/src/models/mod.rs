mod todo;

pub use todo::{CreateTodo, UpdateTodo};
