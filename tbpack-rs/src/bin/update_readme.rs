use tbpack::cli;
use tbpack::sync::{self, SyncOutcome};

const USAGE: &str = "Usage: update-readme [-C<dir>] [-f[<file>]] [-s<dir>] [-d<file>] [-vqh]";

fn main() {
    let args = match cli::parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("update-readme: {e}");
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
            eprintln!("update-readme: {e}");
            std::process::exit(1);
        }
    };

    match sync::sync_all(&layout) {
        Ok(results) => {
            let updated = results
                .iter()
                .filter(|(_, o)| matches!(o, SyncOutcome::Updated { .. }))
                .count();
            log::info!("{updated} of {} version(s) updated", results.len());
        }
        Err(e) => {
            log::debug!("aborting on {} failure", e.kind());
            eprintln!("update-readme: {e}");
            std::process::exit(1);
        }
    }
}
