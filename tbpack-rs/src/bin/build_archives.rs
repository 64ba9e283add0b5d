use tbpack::build;
use tbpack::cli;

const USAGE: &str = "Usage: build-archives [-C<dir>] [-f[<file>]] [-s<dir>] [-d<file>] [-o<dir>] [-vqh]";

fn main() {
    let args = match cli::parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("build-archives: {e}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };
    if args.help {
        println!("{USAGE}");
        return;
    }
    cli::init_logging(&args);

    let layout = match cli::load_layout(&args) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("build-archives: {e}");
            std::process::exit(1);
        }
    };

    match build::build_all(&layout) {
        Ok(reports) => log::info!("wrote {} archive(s)", reports.len()),
        Err(e) => {
            log::debug!("aborting on {} failure", e.kind());
            eprintln!("build-archives: {e}");
            std::process::exit(1);
        }
    }
}
