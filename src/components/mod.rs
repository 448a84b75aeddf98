//! UI Components
//!
//! Leptos components reading the view store.

mod new_todo_form;
mod status_bar;
mod todo_list;

pub use new_todo_form::NewTodoForm;
pub use status_bar::StatusBar;
pub use todo_list::TodoList;
