pub mod base;
pub mod directory;
pub mod history;
pub mod resolver;
