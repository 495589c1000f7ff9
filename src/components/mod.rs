//! UI Components
//!
//! Leptos components for the two demos.

mod checklist_app;
mod directory_app;
mod task_input;
mod task_item;
mod task_list;
mod todo_list;
mod user_card;
mod user_list;

pub use checklist_app::ChecklistApp;
pub use directory_app::DirectoryApp;
pub use task_input::TaskInput;
pub use task_item::TaskItem;
pub use task_list::TaskList;
pub use todo_list::TodoList;
pub use user_card::UserCard;
pub use user_list::UserList;
