pub mod raw;
pub mod text;
