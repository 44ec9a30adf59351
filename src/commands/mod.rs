pub mod build;
pub mod cards;
pub mod tables;
