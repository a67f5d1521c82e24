pub mod aggregate;
pub mod quarter;
pub mod session;
