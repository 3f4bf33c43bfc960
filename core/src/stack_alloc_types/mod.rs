// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod sizes;

// Re-export.
pub use sizes::*;
