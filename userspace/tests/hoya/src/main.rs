// SPDX-License-Identifier: GPL-3.0-or-later

use std::{
    io::{stdout, BufWriter},
    process::ExitCode,
};

use libhoya_rs::{error::is_closed, logging, ArgVector, Echo};

fn main() -> ExitCode {
    logging::init();

    let argv = ArgVector::from_env();
    if argv.is_empty() {
        log::warn!("started without an argument vector");
    } else {
        log::debug!("argc: {}, program: {:?}", argv.len(), argv.program());
    }

    let stdout = stdout();
    let mut echo = Echo::new(BufWriter::new(stdout.lock()));

    // output failures never change the exit code
    match echo.run(&argv) {
        Ok(_) => {}
        Err(e) if is_closed(&e) => log::debug!("stdout closed: {}", e),
        Err(e) => log::warn!("failed to write to stdout: {}", e),
    }

    ExitCode::SUCCESS
}
