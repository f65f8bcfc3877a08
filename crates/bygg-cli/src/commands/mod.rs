pub mod analyze;
pub mod dispatch;
pub mod entries;
pub mod projects;
pub mod schema;
pub mod shell;
pub mod stats;
