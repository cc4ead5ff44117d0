use unicode_conv::cli::{run, USAGE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let results = run(std::env::args_os().skip(1));
    if results.is_err() {
        eprintln!("{USAGE}");
    }
    Ok(results?)
}
