use std::ffi::OsString;

/// Name of the environment variable that suppresses display.
///
/// Only the presence of the variable matters, its value is ignored.
pub const NOSHOW_VAR: &str = "SITK_NOSHOW";

/// Whether a loaded image should be displayed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DisplayToggle {
	/// Show the image in a window.
	Enabled,

	/// Only load the image, for headless or automated runs.
	Suppressed,
}

impl DisplayToggle {
	/// Determine the toggle from the process environment.
	pub fn from_env() -> Self {
		Self::from_var(std::env::var_os(NOSHOW_VAR))
	}

	/// Determine the toggle from the value of [`NOSHOW_VAR`], if it is set.
	pub fn from_var(value: Option<OsString>) -> Self {
		match value {
			Some(_) => Self::Suppressed,
			None => Self::Enabled,
		}
	}

	/// Check if the image should be shown.
	pub fn is_enabled(self) -> bool {
		self == Self::Enabled
	}
}
