pub mod audit;
pub mod client;
pub mod coach;
