//! rStandup main entrypoint.

use rstandup::run;
use rstandup::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
