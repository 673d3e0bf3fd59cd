mod cli;

fn main() {
    if let Err(err) = cli::run() {
        println!("Error: {}", err);
        #[allow(clippy::exit)]
        std::process::exit(1);
    }
}
