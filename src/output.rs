use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Error};

/// Where rendered output goes: an owned file or stdout.
///
/// The file handle is dropped (and with it closed) when the value goes
/// out of scope, on success and failure alike.
pub struct Output {
    file: Option<File>,
}

impl Output {
    pub fn new(filename: Option<&Path>) -> Result<Output, Error> {
        Ok(Output {
            file: match filename {
                Some(path) => Some(File::create(path).with_context(|| {
                    format!("unable to create output file '{}'", path.display())
                })?),
                None => None,
            },
        })
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.file {
            Some(ref mut out) => out.write(buf),
            None => io::stdout().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file {
            Some(ref mut out) => out.flush(),
            None => io::stdout().flush(),
        }
    }
}
