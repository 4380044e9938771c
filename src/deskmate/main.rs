fn main() {
    if let Err(e) = deskmate::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
