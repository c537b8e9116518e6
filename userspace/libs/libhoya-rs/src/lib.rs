// SPDX-License-Identifier: GPL-3.0-or-later

// ! Process arguments
pub mod argv;
pub use argv::ArgVector;

// ! Output
pub mod echo;
pub use echo::{Echo, GREETING};

pub mod error;
pub mod logging;
