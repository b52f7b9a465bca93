// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod app_dirs;
pub mod celebration;
pub mod error;
pub mod history;
pub mod milestone;
pub mod pool;
pub mod question;
pub mod quiz;
pub mod runtime;
pub mod store;
pub mod timer;
pub mod util;
