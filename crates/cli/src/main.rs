use std::io;

fn main() {
    stockbook_observability::init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let exit_code = stockbook_cli::app::run(
        std::env::args_os(),
        &mut input,
        &mut stdout,
        &mut stderr,
    );
    drop(input);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}
