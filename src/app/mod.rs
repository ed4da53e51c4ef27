//! egui Native Desktop App Module
//!
//! Native desktop application (egui/eframe) for the authenticated account
//! screens, backed by a hosted identity provider.
//!
//! # Architecture
//!
//! The module is organized into focused submodules:
//!
//! - **`config`** - Configuration (provider URL, publishable key, token)
//! - **`auth`** - Identity provider HTTP client functions
//! - **`guard`** - Route guard: auth-gated navigation decisions
//! - **`router`** - Navigation stack with replace/push/back
//! - **`session`** - Auth state (loaded / signed-in / user snapshot)
//! - **`token_cache`** - Durable token storage for session restore
//! - **`types`** - Wire types and the user snapshot
//! - **`state`** - Central `AppState` and per-screen forms
//! - **`views`** - Screen rendering
//! - **`theme`** - Colors and styling
//! - **`debug`** - In-app debug console ring buffer
//!
//! The binary entry point lives in `main.rs` (`cargo run --bin anteroom`).

pub mod auth;
pub mod config;
pub mod debug;
pub mod guard;
pub mod router;
pub mod session;
pub mod state;
pub mod theme;
pub mod token_cache;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use debug::{DebugCategory, DebugLevel, DebugLogger};
pub use guard::{decide, AuthStateProvider, Navigator, Redirect, RouteGuard, Segment, Splash};
pub use router::Router;
pub use session::Session;
pub use state::AppState;
pub use token_cache::{TokenCache, SESSION_TOKEN_KEY};
pub use types::UserInfo;
