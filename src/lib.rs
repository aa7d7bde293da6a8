pub mod agent;
pub mod tools;

pub(crate) mod utils;
