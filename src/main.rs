use clap::Parser;
use infix::{evaluator::try_evaluate, lexer::tokenize};

/// infix is a lenient evaluator for plain arithmetic expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the token sequence instead of evaluating it.
    #[arg(short, long)]
    tokens: bool,

    expression: String,
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = Args::parse();

    if args.tokens {
        let tokens = tokenize(&args.expression);
        let rendered: Vec<String> = tokens.as_slice()
                                          .iter()
                                          .map(ToString::to_string)
                                          .collect();
        println!("{}", rendered.join(" "));
        return;
    }

    match try_evaluate(&args.expression) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
