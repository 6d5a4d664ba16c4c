//! Binary entry point for datatmpl.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use datatmpl_input::RealStdin;

fn main() -> ExitCode {
    let mut out = BufWriter::new(io::stdout().lock());
    let mut err = io::stderr().lock();
    let code = datatmpl::run(std::env::args_os(), &RealStdin, &mut out, &mut err);
    ExitCode::from(code)
}
