use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::error::UsageError;

/// Program name used in messages when the argument list is empty.
pub const DEFAULT_PROGRAM_NAME: &str = "read-and-show";

/// Read an image from disk and show it in a window.
///
/// Set SITK_NOSHOW (to any value) to load the image without showing it.
#[derive(Debug, Parser)]
#[command(name = "read-and-show", disable_help_flag = true, disable_version_flag = true)]
struct Args {
	/// The image file to read.
	#[arg(value_name = "inputImage", allow_hyphen_values = true, value_parser = clap::builder::OsStringValueParser::new())]
	input: OsString,
}

/// A successfully parsed command line.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Invocation {
	/// The program name as it was invoked.
	pub program: String,

	/// The path of the image to read.
	pub input: PathBuf,
}

/// Parse the command line.
///
/// The first element of `args` is the program name.
/// Anything other than exactly one more argument results in a [`UsageError`].
/// That argument is always taken literally as the input path,
/// even if it is empty or looks like a flag.
pub fn parse<I, T>(args: I) -> Result<Invocation, UsageError>
where
	I: IntoIterator<Item = T>,
	T: Into<OsString> + Clone,
{
	let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
	let program = match args.first() {
		Some(x) => x.to_string_lossy().into_owned(),
		None => DEFAULT_PROGRAM_NAME.to_owned(),
	};

	let [name, input]: [OsString; 2] = match args.try_into() {
		Ok(x) => x,
		Err(args) => {
			log::debug!("expected exactly one argument, got {}", args.len().saturating_sub(1));
			return Err(UsageError { program });
		},
	};

	// Everything after `--` is a value, including another `--`.
	match Args::try_parse_from([name, OsString::from("--"), input]) {
		Ok(parsed) => Ok(Invocation { program, input: PathBuf::from(parsed.input) }),
		Err(e) => {
			log::debug!("rejected command line: {:?}", e.kind());
			Err(UsageError { program })
		},
	}
}

impl Invocation {
	/// The title for the display window: the file stem of the input path.
	pub fn window_title(&self) -> &str {
		self.input
			.file_stem()
			.and_then(|x| x.to_str())
			.unwrap_or("image")
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use assert2::assert;
	use assert2::let_assert;

	#[test]
	fn single_path_is_accepted() {
		let_assert!(Ok(invocation) = parse(["prog", "brain.nrrd"]));
		assert!(invocation.program == "prog");
		assert!(invocation.input == PathBuf::from("brain.nrrd"));
	}

	#[test]
	fn missing_path_is_usage_error() {
		let_assert!(Err(error) = parse(["./prog"]));
		assert!(error.program == "./prog");
	}

	#[test]
	fn extra_arguments_are_usage_error() {
		let_assert!(Err(error) = parse(["prog", "a.png", "b.png"]));
		assert!(error.program == "prog");
	}

	#[test]
	fn separator_counts_as_an_argument() {
		let_assert!(Err(error) = parse(["prog", "--", "a.png"]));
		assert!(error.program == "prog");
	}

	#[test]
	fn empty_argument_list_uses_default_program_name() {
		let_assert!(Err(error) = parse(Vec::<OsString>::new()));
		assert!(error.program == DEFAULT_PROGRAM_NAME);
	}

	#[test]
	fn flag_like_argument_is_a_path() {
		for arg in ["--frobnicate", "-x.png", "--help", "-h", "--version", "-V", "-", "--"] {
			let_assert!(Ok(invocation) = parse(["prog", arg]));
			assert!(invocation.input == PathBuf::from(arg));
		}
	}

	#[test]
	fn empty_argument_is_a_path() {
		let_assert!(Ok(invocation) = parse(["prog", ""]));
		assert!(invocation.input == PathBuf::new());
		assert!(invocation.window_title() == "image");
	}

	#[test]
	fn window_title_is_file_stem() {
		let invocation = Invocation { program: "prog".into(), input: "/data/ct/head.png".into() };
		assert!(invocation.window_title() == "head");

		let invocation = Invocation { program: "prog".into(), input: "/".into() };
		assert!(invocation.window_title() == "image");
	}
}
