use std::path::Path;

use crate::backend::ImageBackend;
use crate::error::ReadError;
use crate::error::ShowError;

/// Window title used when none is given.
const DEFAULT_TITLE: &str = "image";

/// Image backend that reads with the `image` crate and displays with `show-image`.
#[derive(Debug, Default)]
pub struct ImageViewer {
	_private: (),
}

impl ImageViewer {
	/// Create a new viewer.
	pub fn new() -> Self {
		Self::default()
	}
}

impl ImageBackend for ImageViewer {
	type Image = image::DynamicImage;

	fn read(&mut self, path: &Path) -> Result<Self::Image, ReadError> {
		let image = image::open(path).map_err(|e| ReadError::new(path, e))?;
		log::info!("read {}: {}x{} {:?}", path.display(), image.width(), image.height(), image.color());
		Ok(image)
	}

	/// Show the image in a window.
	///
	/// The `show-image` context needs the main thread,
	/// so this function hands the current thread over to it and never returns on success.
	/// The process exits with status 0 once the window is closed or Escape is pressed.
	/// If the window can not be created, the error is reported through
	/// [`Termination`](crate::termination::Termination) and the process exits with status 1.
	///
	/// This must be called from the main thread.
	#[cfg(feature = "display")]
	fn show(&mut self, image: &Self::Image, title: Option<&str>) -> Result<(), ShowError> {
		let title = title.unwrap_or(DEFAULT_TITLE).to_owned();
		let pixels = image.to_rgba8();
		show_image::run_context::<_, ()>(move || {
			use crate::termination::Termination;
			let result = show_until_closed(&title, &pixels)
				.map(|()| crate::Outcome::Displayed)
				.map_err(crate::Error::from);
			std::process::exit(result.report());
		})
	}

	#[cfg(not(feature = "display"))]
	fn show(&mut self, _image: &Self::Image, title: Option<&str>) -> Result<(), ShowError> {
		log::debug!("can not show {:?}: built without the display feature", title.unwrap_or(DEFAULT_TITLE));
		Err(ShowError::new(format!(
			"display support is not compiled in, enable the `display` feature or set {}",
			crate::display_toggle::NOSHOW_VAR,
		)))
	}
}

/// Open a window with the image and block until it is closed.
///
/// Must run as the user task of the `show-image` context.
#[cfg(feature = "display")]
fn show_until_closed(title: &str, pixels: &image::RgbaImage) -> Result<(), ShowError> {
	use show_image::event::VirtualKeyCode;
	use show_image::event::WindowEvent;

	let info = show_image::ImageInfo::rgba8(pixels.width(), pixels.height());
	let view = show_image::ImageView::new(info, pixels.as_raw());

	let window = show_image::create_window(title, Default::default()).map_err(ShowError::new)?;
	window.set_image(title, view).map_err(ShowError::new)?;
	log::debug!("showing {:?}, close the window or press Escape to exit", title);

	// The channel is closed when the window is destroyed.
	for event in window.event_channel().map_err(ShowError::new)? {
		if let WindowEvent::KeyboardInput(event) = event {
			if event.is_synthetic {
				continue;
			}
			if event.input.key_code == Some(VirtualKeyCode::Escape) && event.input.state.is_pressed() {
				break;
			}
		}
	}

	Ok(())
}
