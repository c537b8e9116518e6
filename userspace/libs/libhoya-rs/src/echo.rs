// SPDX-License-Identifier: GPL-3.0-or-later

use std::{
    ffi::OsStr,
    io::{self, Write},
};

use crate::ArgVector;

/// First line of every run.
pub const GREETING: &str = "Hoya";

/// Writes the greeting followed by one line per argument.
pub struct Echo<W: Write> {
    out: W,
}

impl<W: Write> Echo<W> {
    pub fn new(out: W) -> Echo<W> {
        Echo { out }
    }

    pub fn greet(&mut self) -> io::Result<()> {
        self.write_line(GREETING.as_bytes())
    }

    /// Writes `arg` as raw bytes, so nothing is lost for non UTF-8 input.
    pub fn write_arg(&mut self, arg: &OsStr) -> io::Result<()> {
        self.write_line(arg.as_encoded_bytes())
    }

    /// Greets, writes every argument (program path included) and flushes.
    ///
    /// Returns the number of lines written, which is always `argv.len() + 1`.
    pub fn run(&mut self, argv: &ArgVector) -> io::Result<usize> {
        self.greet()?;
        let mut lines = 1;

        for (i, arg) in argv.iter().enumerate() {
            log::trace!("argv[{}]: {:?}", i, arg);
            self.write_arg(arg)?;
            lines += 1;
        }

        self.out.flush()?;
        log::debug!("wrote {} lines", lines);
        Ok(lines)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.out.write_all(line)?;
        self.out.write_all(b"\n")
    }
}
