use clap::Parser;

use crate::arch::{Arch, Simulator};
use crate::config::RunConfig;

/// Fixed version identifier reported by `-v/--version`.
pub const VERSION: &str = "dev";

/// Command-line surface. Lives in the library so parsing stays testable.
#[derive(Debug, Parser)]
#[command(
    name = "krun",
    about = "Build the kernel for one target architecture and boot it in a simulator"
)]
pub struct Cli {
    /// Target architecture.
    #[arg(short, long, value_enum, default_value_t = Arch::I386)]
    pub arch: Arch,

    /// Simulator used to boot the built image.
    #[arg(short, long, value_enum, default_value_t = Simulator::Bochs)]
    pub simulator: Simulator,

    /// Print version.
    #[arg(short = 'v', long = "version")]
    pub version: bool,
}

impl Cli {
    pub fn config(&self) -> RunConfig {
        RunConfig::new(self.arch, self.simulator)
    }
}
