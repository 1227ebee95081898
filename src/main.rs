//! rWorkoutMap main entrypoint.

use rworkoutmap::run;

fn main() {
    println!();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
