use std::fs;

use clap::Parser;
use tuplet::{create_context, eval_source, stringify};

/// tuplet is a small, embeddable expression language. The CLI evaluates a
/// single expression and prints its string form.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tuplet to read the expression from a file instead of the
    /// command line.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let runtime = match tokio::runtime::Builder::new_current_thread().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start the runtime: {e}");
            std::process::exit(1);
        },
    };

    let mut context = create_context([]);
    match runtime.block_on(eval_source(&source, &mut context)) {
        Ok(value) => println!("{}", stringify(&value)),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
