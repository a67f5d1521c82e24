pub mod coach;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod oplog;
pub mod pillar;
pub mod project;
pub mod quarter;
pub mod session;
pub mod trend;
