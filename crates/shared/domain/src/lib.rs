//! # Domain Models
//!
//! Pure data types shared by every Tessera crate: component instances and their typed
//! settings, page definitions, resolved pages and the API configuration.
//! Keep it lean: no I/O, networking, or resolution logic, just data and simple helpers.

pub mod components;
pub mod config;
pub mod constants;
pub mod pages;
pub mod registry;
