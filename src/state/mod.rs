/// State management module
///
/// This module handles all application state, including:
/// - The key-value store standing in for local storage (library.rs)
/// - Shared data structures (data.rs)
/// - The persisted media collection (gallery.rs)
/// - Lightbox cursor and swipe tracking (lightbox.rs)
/// - The passcode prompt in front of deletions (delete_gate.rs)

pub mod data;
pub mod delete_gate;
pub mod gallery;
pub mod library;
pub mod lightbox;
