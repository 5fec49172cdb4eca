pub mod counts;
pub mod logs;
pub mod register;
