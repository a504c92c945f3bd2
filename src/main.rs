use std::process;

fn main() {
    env_logger::init();

    if let Err(err) = parlor::run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
