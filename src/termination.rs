//! Turn the result of a run into an exit status.

use std::io::Write;

use crate::error::Error;
use crate::Outcome;

/// Exit status for a successful run.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit status for a usage error or a failure of the imaging library.
pub const EXIT_FAILURE: i32 = 1;

/// Dressed down version of [`std::process::Termination`] that knows where to report what.
///
/// Usage errors go to standard output, all other errors go to standard error.
/// Failures to write the report are ignored.
pub trait Termination {
	/// Print any messages to standard output or standard error and give the exit code for the process.
	fn report(self) -> i32
	where
		Self: Sized,
	{
		self.report_to(&mut std::io::stdout().lock(), &mut std::io::stderr().lock())
	}

	/// Print any messages to the given streams and give the exit code for the process.
	fn report_to(self, stdout: &mut dyn Write, stderr: &mut dyn Write) -> i32;
}

impl Termination for Result<Outcome, Error> {
	fn report_to(self, stdout: &mut dyn Write, stderr: &mut dyn Write) -> i32 {
		let status = match self {
			Ok(Outcome::Displayed) | Ok(Outcome::DisplaySuppressed) => EXIT_SUCCESS,
			Err(Error::Usage(e)) => {
				let _ = writeln!(stdout, "{}", e);
				EXIT_FAILURE
			},
			Err(e) => {
				let _ = writeln!(stderr, "Error: {}", e);
				EXIT_FAILURE
			},
		};
		let _ = stdout.flush();
		let _ = stderr.flush();
		status
	}
}
