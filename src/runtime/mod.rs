//! Session runtime: owns the model and runs commands
//!
//! The model is only ever touched from the thread that owns the [`Session`].
//! Completion streams run on worker threads and report back through a
//! channel; their messages are applied by [`Session::process_async_messages`].

mod session;

pub use session::Session;
