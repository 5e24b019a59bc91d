use winit::event_loop::EventLoop;

use seastrike::app::App;

fn main() {
    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            eprintln!("Failed to create event loop: {:?}", e);
            std::process::exit(1);
        }
    };

    let mut app = App::new();
    if let Err(e) = event_loop.run_app(&mut app) {
        eprintln!("Event loop error: {:?}", e);
        std::process::exit(1);
    }
}
