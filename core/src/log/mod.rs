// Copyright (c) 2024-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`tracing`] setup for the scanner and the `mention` binary. Logging is **DISABLED** by
//! **default**. Nothing is printed until one of [`try_initialize_logging_global`] or
//! [`try_initialize_logging_thread_local`] is called with a [`TracingConfig`] whose level
//! filter is not [`tracing_core::LevelFilter::OFF`].

// Attach sources.
pub mod log_public_api;
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use log_public_api::*;
pub use rolling_file_appender_impl::*;
pub use tracing_config::*;
pub use tracing_init::*;
