pub mod geo;
pub mod piers;
pub mod transit;
pub mod units;
