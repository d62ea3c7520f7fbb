//! Read an image from disk and show it in a window.
//!
//! This crate is the library behind the `read-and-show` program:
//!
//! ```text
//! read-and-show <inputImage>
//! ```
//!
//! The image is read with the [`image`] crate and shown with `show-image`.
//! If the `SITK_NOSHOW` environment variable is set (to any value),
//! the image is read but not shown, which allows running without a display.
//!
//! The imaging library sits behind the [`ImageBackend`] trait,
//! so [`run`] can be driven by any backend.
//! [`ImageViewer`] is the real one.
//!
//! # Features
//!
//! * `display`: show images with `show-image` (enabled by default).
//!   Without it, showing an image fails with a [`ShowError`](error::ShowError).

use std::ffi::OsString;

pub mod backend;
pub mod cli;
pub mod display_toggle;
pub mod error;
pub mod termination;

pub use backend::ImageBackend;
pub use backend::ImageViewer;
pub use display_toggle::DisplayToggle;
pub use error::Error;

/// How a successful run ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
	/// The image was read and shown.
	Displayed,

	/// The image was read, display was suppressed by the environment.
	DisplaySuppressed,
}

/// Run the program with the given arguments.
///
/// The first argument is the program name.
/// The image is only read if the command line is valid,
/// and shown at most once, only if `toggle` allows it.
///
/// With [`ImageViewer`] and the `display` feature, a successful show does not return:
/// the process exits from inside [`ImageBackend::show`] once the window is closed,
/// reporting through [`termination::Termination`] just like `main` does.
/// [`Outcome::Displayed`] and show errors are returned from here only by backends that do return from `show`.
pub fn run<I, T, B>(args: I, toggle: DisplayToggle, backend: &mut B) -> Result<Outcome, Error>
where
	I: IntoIterator<Item = T>,
	T: Into<OsString> + Clone,
	B: ImageBackend,
{
	let invocation = cli::parse(args)?;

	log::debug!("reading image from {}", invocation.input.display());
	let image = backend.read(&invocation.input)?;

	if !toggle.is_enabled() {
		log::debug!("{} is set, not showing {}", display_toggle::NOSHOW_VAR, invocation.input.display());
		return Ok(Outcome::DisplaySuppressed);
	}

	backend.show(&image, Some(invocation.window_title()))?;
	Ok(Outcome::Displayed)
}
