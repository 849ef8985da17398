use std::io::{self, BufRead, Write};

use deskcalc::eval;

#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
struct Cli {
    /// Expression to evaluate; reads expressions from stdin when omitted
    expression: Vec<String>,
}

fn main() {
    env_logger::init();

    let cli = <Cli as clap::Parser>::parse();

    if cli.expression.is_empty() {
        repl();
    } else {
        println!("{}", answer(&cli.expression.join(" ")));
    }
}

fn repl() {
    let stdin = io::stdin();
    prompt();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        if !line.is_empty() {
            println!("{}", answer(line));
        }
        prompt();
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

/// Reduce an evaluation to what the calculator display shows: the numeric
/// result, or the literal `Error` marker.
fn answer(input: &str) -> String {
    match eval(input) {
        Ok(value) => value.to_string(),
        Err(cause) => {
            log::debug!("{input:?} failed: {cause}");
            "Error".to_string()
        }
    }
}
