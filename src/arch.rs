use std::fmt;

use clap::ValueEnum;

/// Instruction-set architectures the build system knows about.
///
/// All targets need cmake and make on the host. Beyond that, i386 and
/// x86_64 images boot through bochs and grub2 and are compiled with an
/// x86_64-elf cross toolchain, arm wants qemu-system-aarch64 and
/// arm-none-eabi-g++, and riscv64 wants qemu-system-riscv64 and
/// riscv64-unknown-elf-g++.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Arch {
    I386,
    #[value(name = "x86_64")]
    X86_64,
    Arm,
    Aarch64,
    /// Also accepted as plain `riscv`.
    #[value(alias = "riscv")]
    Riscv64,
}

impl Arch {
    /// Spelling used on the command line and in cmake defines.
    pub fn label(&self) -> &'static str {
        match self {
            Arch::I386 => "i386",
            Arch::X86_64 => "x86_64",
            Arch::Arm => "arm",
            Arch::Aarch64 => "aarch64",
            Arch::Riscv64 => "riscv64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Simulators a built kernel image can be booted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Simulator {
    Bochs,
    Qemu,
}

impl Simulator {
    pub fn label(&self) -> &'static str {
        match self {
            Simulator::Bochs => "bochs",
            Simulator::Qemu => "qemu",
        }
    }
}

impl fmt::Display for Simulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
