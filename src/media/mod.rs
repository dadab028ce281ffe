/// Media handling module
///
/// This module handles:
/// - Validating and reading uploads into data URLs
/// - Capturing still frames from videos
/// - Saving items back to disk
/// - Decoding media for display

pub mod data_url;
pub mod decode;
pub mod download;
pub mod thumbnail;
pub mod upload;
