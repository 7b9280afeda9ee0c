//! Binary entrypoint delegating to [`relabeler_cli::run`].

fn main() {
    std::process::exit(relabeler_cli::run());
}
