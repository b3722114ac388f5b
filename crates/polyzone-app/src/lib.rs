//! Polyzone Application
//!
//! Headless host for the polygon editor. It plays the part of the visual
//! surface: gestures go in as commands, outline and overlay paths come out.

mod app;

pub use app::{App, AppConfig, AppError, SessionReport, demo_session};
