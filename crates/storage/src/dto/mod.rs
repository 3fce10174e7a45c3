pub mod common;
pub mod participant;
