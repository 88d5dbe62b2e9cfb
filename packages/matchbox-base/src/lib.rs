pub mod converters;
pub mod error;
pub mod utils;
