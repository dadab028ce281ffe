/// User interface module
///
/// One file per view. Every view is a plain function from state to
/// `Element`; all state lives in the application struct in main.rs.

pub mod footer;
pub mod gallery;
pub mod header;
pub mod lightbox;
pub mod masonry;
pub mod modal;
pub mod upload;

use crate::media::decode::Preview;

/// Display state of one item's picture
#[derive(Debug, Clone)]
pub enum PreviewState {
    Loading,
    Ready(Preview),
    /// Video without thumbnail, or a picture that failed to load
    Unavailable,
}

impl PreviewState {
    /// Relative tile height for the masonry layout
    pub fn aspect_ratio(&self) -> f32 {
        match self {
            PreviewState::Ready(preview) => preview.aspect_ratio(),
            PreviewState::Loading | PreviewState::Unavailable => 0.75,
        }
    }
}
