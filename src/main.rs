// Fri Oct 16 2026 - Alex

use layout_fuzz::ui;

fn main() {
    if let Err(e) = ui::cli::run() {
        ui::print_error(&e);
        std::process::exit(1);
    }
}
