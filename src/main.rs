use std::process;

use png2icns::cli::{self, Invocation, USAGE};

fn main() {
    let cli = match cli::parse(std::env::args_os()) {
        Invocation::Convert(cli) => cli,
        Invocation::Usage => {
            println!("{}", USAGE);
            process::exit(1);
        }
    };

    match png2icns::commands::convert::run(&cli.input, &cli.output) {
        Ok(summary) => {
            if !summary.is_square() {
                eprintln!(
                    "Warning: {} is {}x{}, renditions were stretched to square",
                    cli.input.display(),
                    summary.source_width,
                    summary.source_height
                );
            }
            println!("Created {}", cli.output.display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}
