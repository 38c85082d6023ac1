pub mod credits;
pub mod deployment;
pub mod generation;
pub mod project;
