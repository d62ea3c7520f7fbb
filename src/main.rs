use read_and_show::termination::Termination;
use read_and_show::DisplayToggle;
use read_and_show::ImageViewer;

fn main() {
	env_logger::init();

	let mut viewer = ImageViewer::new();
	let status = read_and_show::run(std::env::args_os(), DisplayToggle::from_env(), &mut viewer).report();
	std::process::exit(status);
}
