pub mod migrate;
pub mod oplog;
pub mod pool;
pub mod queries;
pub mod stats;
