//! Anteroom - Main Library
//!
//! Anteroom is a native desktop application with authenticated screens
//! (home, profile, sign-in, sign-up, forgot-password, change-password)
//! backed by a hosted identity provider. The app renders UI, forwards user
//! input to the provider over HTTPS, and maps provider responses to screen
//! state; tokens, verification codes and session lifecycle all live on the
//! provider side.
//!
//! # Module Structure
//!
//! - **`shared`** - Types independent of the UI layer
//!   - Application configuration and its builder
//!   - Error types for provider/client failures
//!
//! - **`app`** - The egui/eframe desktop application
//!   - Route guard (auth-gated navigation) and router
//!   - Session state and restore-from-cache bootstrap
//!   - Identity provider HTTP client and token cache
//!   - Screens, theme, and in-app debug console
//!
//! # Concurrency
//!
//! The UI is single-threaded immediate mode. Provider calls run on worker
//! threads and deliver their results over `std::sync::mpsc` channels that
//! the UI thread drains once per frame.

/// Shared configuration and error types
pub mod shared;

/// egui native desktop app
pub mod app;
