pub mod growth;
pub mod time;
