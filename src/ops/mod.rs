pub mod filter;
pub mod history;
pub mod model_ops;

pub use filter::{KeywordMatcher, TaskFilter, TimeWindow};
pub use history::{HistoryEntry, HistoryStore};
pub use model_ops::{Model, ModelManager};
