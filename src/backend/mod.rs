//! The boundary to the imaging library.

use std::path::Path;

use crate::error::ReadError;
use crate::error::ShowError;

mod viewer;

pub use viewer::ImageViewer;

/// An imaging library that can read images from disk and display them.
///
/// The image type is opaque to the caller:
/// it is created by [`Self::read`] and only ever passed back to [`Self::show`].
pub trait ImageBackend {
	/// The in-memory image produced by the library.
	type Image;

	/// Read an image from a file.
	fn read(&mut self, path: &Path) -> Result<Self::Image, ReadError>;

	/// Display an image, optionally with a window title.
	fn show(&mut self, image: &Self::Image, title: Option<&str>) -> Result<(), ShowError>;
}
