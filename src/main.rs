use clap::Parser;

use g3d2::cli::{die, G3d2};

fn main() {
	if let Err(e) = G3d2::parse().exec() {
		die(exitcode::IOERR, &format!("{e:#}"))
	}
}
