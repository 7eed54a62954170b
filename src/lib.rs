//! To-do list core: tasks split into events, deadlines, floating and
//! completed lists, commands that act on them by category index, and a short
//! undo history. The `td` binary wraps it in a CLI that keeps its state in
//! JSON files.

pub mod cli;
pub mod command;
pub mod io;
pub mod logging;
pub mod logic;
pub mod model;
pub mod ops;
pub mod parse;

#[cfg(test)]
pub(crate) mod test_helpers;
