pub mod details;
pub mod generate;
pub mod list;
pub mod search;
