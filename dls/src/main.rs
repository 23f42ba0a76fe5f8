extern crate dls;

use std::io::{self, BufWriter};
use std::process;

use dirlist::{Lister, debug_eprintln};

fn main() {
    if let Err(err) = run() {
        if err.is_broken_pipe() {
            debug_eprintln!("DEBUG: stdout closed early");
            return;
        }
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run() -> dls::error::Result<()> {
    let matches = dls::cli::parse_flags()?;

    dls::utils::initialize_debug_from_args(&matches);

    let invocation = dls::cli::Invocation::from_matches(&matches);
    debug_eprintln!("DEBUG: {:?}", invocation);

    let mut lister = Lister::new(BufWriter::new(io::stdout().lock()));
    lister.list(&invocation.path, &invocation.options)?;
    lister.finish()?;
    Ok(())
}
