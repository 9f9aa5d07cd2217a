//! Daily Goals UI Components
//!
//! This crate provides the Dioxus building blocks shared by the Daily Goals
//! desktop screens: buttons, form fields, feedback states, and the priority
//! badge.
//!
//! ## Design Language
//!
//! Components render plain semantic markup and pick their colors up from the
//! CSS custom properties published by the app shell:
//! - **Teal (#0a7ea4)**: primary actions, headings, links
//! - **Green (#4CAF50)**: edit actions and the low-priority accent
//! - **Red (#ff3b30 / #f44336)**: destructive actions and error text
//! - **Orange (#FF9800)**: the medium-priority accent
//!
//! Light and dark palettes swap via the `theme-light` / `theme-dark` class on
//! the document root, so no component hard-codes a surface color.

pub mod components;

pub use components::*;
