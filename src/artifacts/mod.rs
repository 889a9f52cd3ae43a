pub mod errors;
pub mod objects;
