//! krun - build-and-run orchestration for the multi-architecture kernel
//! tree.
//!
//! One invocation is one full cycle: validate the (architecture, simulator)
//! selection, wipe the build tree, configure it with the matching cross
//! toolchain, build, and boot the image in the matching emulator. Steps run
//! strictly in sequence and the first failure ends the run.

pub mod arch;
pub mod build;
pub mod cli;
pub mod config;
pub mod error;
pub mod qemu;

pub use arch::{Arch, Simulator};
pub use config::RunConfig;
pub use error::RunError;

/// Run one full validate, clean, configure, build, run cycle.
///
/// Both external invocations are resolved before the build directory is
/// touched, so an architecture without a port aborts with no side effects.
pub fn run_cycle(config: &RunConfig) -> Result<(), RunError> {
    config.validate()?;
    let cmake = build::cmake_args(config.arch)?;
    let (emulator, emulator_args) = qemu::emulator_invocation(config)?;

    build::reset_build_dir(&config.build_dir)?;
    build::configure(&config.build_dir, &cmake)?;
    build::make(&config.build_dir)?;
    qemu::launch(emulator, &emulator_args)
}
