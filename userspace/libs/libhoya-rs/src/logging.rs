// SPDX-License-Identifier: GPL-3.0-or-later

use env_logger::{Builder, Env, Target};

/// Environment variable holding the log filter, in `env_logger` syntax.
pub const LOG_ENV: &str = "HOYA_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Installs the stderr logger. Calling it again is a no-op.
///
/// Stdout carries the program's output, so nothing is ever logged there.
pub fn init() {
    let env = Env::new().filter_or(LOG_ENV, DEFAULT_FILTER);

    if Builder::from_env(env)
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init()
        .is_err()
    {
        log::trace!("logger already installed");
    }
}
