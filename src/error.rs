//! Error types.

use std::path::Path;
use std::path::PathBuf;

/// Any error that can end a run.
#[derive(Debug)]
pub enum Error {
	Usage(UsageError),
	Read(ReadError),
	Show(ShowError),
}

/// The command line did not contain exactly one input path.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UsageError {
	/// The program name as it was invoked.
	pub program: String,
}

/// The imaging library failed to read the input image.
#[derive(Debug)]
pub struct ReadError {
	/// The path that could not be read.
	pub path: PathBuf,

	/// The error reported by the imaging library.
	pub error: image::ImageError,
}

/// The imaging library failed to display an image.
#[derive(Debug, Clone)]
pub struct ShowError {
	/// The message of the error reported by the display backend.
	pub message: String,
}

impl ReadError {
	/// Create a read error for a path.
	pub fn new(path: impl AsRef<Path>, error: image::ImageError) -> Self {
		Self {
			path: path.as_ref().to_path_buf(),
			error,
		}
	}
}

impl ShowError {
	/// Create a show error from the message of the underlying error.
	///
	/// The display backend reports errors of many different types,
	/// so only the message is kept.
	pub fn new(message: impl std::fmt::Display) -> Self {
		Self { message: message.to_string() }
	}
}

impl From<UsageError> for Error {
	fn from(other: UsageError) -> Self {
		Self::Usage(other)
	}
}

impl From<ReadError> for Error {
	fn from(other: ReadError) -> Self {
		Self::Read(other)
	}
}

impl From<ShowError> for Error {
	fn from(other: ShowError) -> Self {
		Self::Show(other)
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Usage(e) => Some(e),
			Self::Read(e) => Some(e),
			Self::Show(e) => Some(e),
		}
	}
}

impl std::error::Error for UsageError {}

impl std::error::Error for ReadError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		Some(&self.error)
	}
}

impl std::error::Error for ShowError {}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Usage(e) => e.fmt(f),
			Self::Read(e) => e.fmt(f),
			Self::Show(e) => e.fmt(f),
		}
	}
}

impl std::fmt::Display for UsageError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "Usage: {} inputImage", self.program)
	}
}

impl std::fmt::Display for ReadError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "failed to read image from {:?}: {}", self.path, self.error)
	}
}

impl std::fmt::Display for ShowError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "failed to show image: {}", self.message)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use assert2::assert;
	use assert2::let_assert;
	use std::error::Error as _;

	fn not_found() -> image::ImageError {
		image::ImageError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"))
	}

	#[test]
	fn usage_names_program() {
		let error = UsageError { program: "./read-and-show".into() };
		assert!(error.to_string() == "Usage: ./read-and-show inputImage");
	}

	#[test]
	fn read_error_names_path_and_cause() {
		let error = ReadError::new("missing.png", not_found());
		let message = error.to_string();
		assert!(message.starts_with("failed to read image from \"missing.png\": "));
		assert!(message.contains("no such file"));
		assert!(error.source().is_some());
	}

	#[test]
	fn umbrella_error_forwards_display() {
		let error = Error::from(ShowError::new("no display backend"));
		assert!(error.to_string() == "failed to show image: no display backend");
		let_assert!(Some(source) = error.source());
		assert!(source.to_string() == error.to_string());
	}
}
