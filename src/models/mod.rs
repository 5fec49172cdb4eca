pub mod log;
pub mod visitor;

pub use log::{LogEntry, LogType};
pub use visitor::Visitor;
