use std::path::PathBuf;

use crate::arch::{Arch, Simulator};
use crate::error::RunError;

/// Build tree, wiped and repopulated on every run.
pub const BUILD_DIR: &str = "./build";

/// OpenSBI jump firmware handed to the emulator as the first boot stage.
pub const FIRMWARE: &str = "./tools/opensbi/build/platform/generic/firmware/fw_jump.elf";

/// Everything one build-and-run cycle needs, resolved once from the parsed
/// command line. There is no other configuration state.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub arch: Arch,
    pub simulator: Simulator,
    pub build_dir: PathBuf,
    pub firmware: PathBuf,
}

impl RunConfig {
    pub fn new(arch: Arch, simulator: Simulator) -> Self {
        RunConfig {
            arch,
            simulator,
            build_dir: PathBuf::from(BUILD_DIR),
            firmware: PathBuf::from(FIRMWARE),
        }
    }

    /// Gate against the static compatibility table. The i386 and x86_64
    /// images boot through grub and bochs; their qemu path does not exist
    /// yet.
    pub fn validate(&self) -> Result<(), RunError> {
        match (self.arch, self.simulator) {
            (Arch::I386 | Arch::X86_64, Simulator::Qemu) => {
                Err(RunError::UnsupportedCombination {
                    arch: self.arch,
                    simulator: self.simulator,
                })
            }
            _ => Ok(()),
        }
    }

    /// Where the build leaves the kernel image.
    pub fn kernel_image(&self) -> PathBuf {
        self.build_dir.join("bin").join("kernel.elf")
    }
}
