pub mod expenses;
pub mod overview;
