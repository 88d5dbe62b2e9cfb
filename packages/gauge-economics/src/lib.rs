pub mod cache;
pub mod epoch;
pub mod math;
pub mod overview;
pub mod rewards;
pub mod voting;
