pub mod agenda;
pub mod config;
pub mod edit;
pub mod list;
pub mod occurs;
pub mod upcoming;
