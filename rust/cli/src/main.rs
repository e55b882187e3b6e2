use std::io;

fn main() {
    roach_cli::logging::init_logging();
    let code = roach_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
