//! Emulator launch: boot the built image with this process's stdio attached
//! as the guest serial console.

use std::process::Command;

use tracing::info;

use crate::arch::Arch;
use crate::config::RunConfig;
use crate::error::RunError;

/// Emulator program and argv for the configured architecture.
///
/// Dispatch is on architecture alone; the simulator selector only
/// participates in the compatibility gate.
pub fn emulator_invocation(config: &RunConfig) -> Result<(&'static str, Vec<String>), RunError> {
    match config.arch {
        Arch::Riscv64 => {
            let args = vec![
                "-machine".to_string(),
                "virt".to_string(),
                "-serial".to_string(),
                "stdio".to_string(),
                "-bios".to_string(),
                config.firmware.display().to_string(),
                "-kernel".to_string(),
                config.kernel_image().display().to_string(),
            ];
            Ok(("qemu-system-riscv64", args))
        }
        Arch::I386 | Arch::X86_64 | Arch::Arm | Arch::Aarch64 => {
            Err(RunError::UnsupportedArchitecture(config.arch))
        }
    }
}

/// Launch the emulator and block until it exits, normally via user
/// interrupt. Stdio is inherited so the serial console is interactive.
pub fn launch(program: &'static str, args: &[String]) -> Result<(), RunError> {
    info!("launching {}", program);
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|source| RunError::Launch {
            command: program,
            source,
        })?;
    if !status.success() {
        return Err(RunError::ExternalToolFailure {
            command: program,
            status,
        });
    }
    Ok(())
}
