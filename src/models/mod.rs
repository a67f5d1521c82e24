pub mod pillar;
pub mod project;
pub mod session;
pub mod work_log;

pub use project::{Project, ProjectStatus};
pub use session::{ActiveSession, SessionState};
pub use work_log::WorkLog;
