fn main() {
    if let Err(e) = lcg_hist::cli::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
