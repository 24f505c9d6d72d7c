pub mod mode;
pub mod path;
