pub mod compose;
pub mod members;
