pub mod config;
pub mod task;
pub mod task_index;
pub mod todo_list;

pub use config::*;
pub use task::*;
pub use task_index::*;
pub use todo_list::*;
