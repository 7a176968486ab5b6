use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use crate::arch::{Arch, Simulator};

/// Failure modes of a build-and-run cycle. Every variant is terminal; the
/// pipeline never retries a step.
#[derive(Error, Debug)]
pub enum RunError {
    /// The (architecture, simulator) pair is categorically disallowed.
    #[error("{arch} under {simulator} is not supported yet")]
    UnsupportedCombination { arch: Arch, simulator: Simulator },

    /// The architecture parses on the command line but has no build or run
    /// path wired up.
    #[error("no {0} port yet: nothing to configure or run")]
    UnsupportedArchitecture(Arch),

    /// An external tool could not be started at all.
    #[error("failed to launch `{command}`")]
    Launch {
        command: &'static str,
        #[source]
        source: io::Error,
    },

    /// An external tool ran and exited with a non-zero status.
    #[error("`{command}` failed with {status}")]
    ExternalToolFailure {
        command: &'static str,
        status: ExitStatus,
    },

    /// The build directory could not be wiped and recreated.
    #[error("failed to reset build directory {path}")]
    ResetBuildDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
