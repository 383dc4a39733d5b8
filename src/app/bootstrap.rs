use crate::app::controller::AppController;
use crate::cli;
use crate::error::Result;

/// Entry point used by `main` to bootstrap the controller stack. No
/// provisioning backend or settings store exists yet, so both seams start
/// empty.
pub fn run() -> Result<()> {
    cli::show_banner();
    let controller = AppController::new(None, None);
    controller.run()
}
