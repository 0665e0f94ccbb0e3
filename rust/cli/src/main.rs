use std::io::{stderr, stdout};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let code = greenfelt_cli::run(args, &mut stdout(), &mut stderr());
    std::process::exit(code);
}
