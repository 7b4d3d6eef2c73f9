use std::{
	ffi::OsString,
	fs,
	io::{self, Read},
	os::unix::prelude::{OsStrExt, OsStringExt},
	path::{Path, PathBuf},
};

pub trait PathExt {
	/// Reads the whole file, or stdin if the path is `-`
	fn read_input(&self) -> io::Result<Vec<u8>>;
	fn tilde_expand(&self) -> PathBuf;
}

impl PathExt for Path {
	fn read_input(&self) -> io::Result<Vec<u8>> {
		if self.as_os_str() == "-" {
			let mut buf = Vec::new();
			io::stdin().lock().read_to_end(&mut buf)?;
			Ok(buf)
		} else {
			fs::read(self.tilde_expand())
		}
	}

	fn tilde_expand(&self) -> PathBuf {
		OsString::from_vec(tilde_expand::tilde_expand(self.as_os_str().as_bytes())).into()
	}
}
