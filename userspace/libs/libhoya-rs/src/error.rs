// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::{Error, ErrorKind};

/// Returns true when the output stream has gone away and nothing more can be written.
///
/// `write_all` reports a sink that stops accepting bytes as `WriteZero`,
/// which ends up the same for a caller.
pub fn is_closed(err: &Error) -> bool {
    matches!(err.kind(), ErrorKind::BrokenPipe | ErrorKind::WriteZero)
}
