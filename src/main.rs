use logo_trim::config::Config;
use logo_trim::run;

fn main() {
    if let Err(error) = run(Config::default()) {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
