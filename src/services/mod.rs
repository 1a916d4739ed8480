pub mod session;

pub use session::{Command, Session, SessionSummary};
