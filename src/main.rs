//! fitness-tracker main entrypoint.

use fitness_tracker::run;
use fitness_tracker::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
