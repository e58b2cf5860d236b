// optour: operator tour printed line by line

use std::io;

use optour::interpreter::engine::Interpreter;
use optour::program::tour::tour;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut interpreter = Interpreter::new(tour());

    let result = interpreter.run();

    // Lines printed before a fault are still written
    interpreter.terminal().write_to(io::stdout().lock())?;

    if let Err(e) = result {
        eprintln!("Runtime error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
