// SPDX-License-Identifier: GPL-3.0-or-later

use std::ffi::{OsStr, OsString};

/// The argument vector handed to the process by the OS.
///
/// Element 0 is conventionally the invocation path. Elements are stored as
/// `OsString` so arguments that are not valid UTF-8 survive unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArgVector {
    args: Vec<OsString>,
}

impl ArgVector {
    pub fn new<I, S>(args: I) -> ArgVector
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        ArgVector {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Captures the arguments of the current process, in order.
    pub fn from_env() -> ArgVector {
        ArgVector::new(std::env::args_os())
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn program(&self) -> Option<&OsStr> {
        self.args.first().map(OsString::as_os_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OsStr> + '_ {
        self.args.iter().map(OsString::as_os_str)
    }
}

impl<S: Into<OsString>> FromIterator<S> for ArgVector {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        ArgVector::new(iter)
    }
}
