fn main() {
    if let Err(err) = sankey_arrow::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
