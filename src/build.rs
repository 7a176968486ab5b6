//! Build-side steps: wiping the build tree, configuring it with cmake and
//! driving make.

use std::fs;
use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::arch::Arch;
use crate::error::RunError;

/// cmake toolchain descriptor for the riscv64 cross build.
pub const RISCV64_TOOLCHAIN: &str = "./cmake/toolchain_mac_riscv.cmake";

/// Wipe and recreate the build directory.
///
/// Runs before any configuration step; calling it twice in a row leaves the
/// same empty tree.
pub fn reset_build_dir(dir: &Path) -> Result<(), RunError> {
    info!("resetting build directory {}", dir.display());
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(|source| RunError::ResetBuildDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    fs::create_dir_all(dir).map_err(|source| RunError::ResetBuildDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// cmake argv for `arch`.
///
/// Every architecture is matched explicitly; a target without a toolchain
/// wired up fails here instead of falling through to an unconfigured build.
pub fn cmake_args(arch: Arch) -> Result<Vec<String>, RunError> {
    match arch {
        Arch::Riscv64 => Ok(vec![
            format!("-DCMAKE_TOOLCHAIN_FILE={}", RISCV64_TOOLCHAIN),
            format!("-DARCH={}", arch.label()),
            "-DCMAKE_BUILD_TYPE=DEBUG".to_string(),
            "..".to_string(),
        ]),
        Arch::I386 | Arch::X86_64 | Arch::Arm | Arch::Aarch64 => {
            Err(RunError::UnsupportedArchitecture(arch))
        }
    }
}

/// Run cmake inside the build directory, pointed back at the source tree.
pub fn configure(build_dir: &Path, args: &[String]) -> Result<(), RunError> {
    info!("configuring build tree with cmake");
    let status = Command::new("cmake")
        .args(args)
        .current_dir(build_dir)
        .status()
        .map_err(|source| RunError::Launch {
            command: "cmake",
            source,
        })?;
    if !status.success() {
        return Err(RunError::ExternalToolFailure {
            command: "cmake",
            status,
        });
    }
    Ok(())
}

/// Run make with no arguments inside the build directory.
pub fn make(build_dir: &Path) -> Result<(), RunError> {
    info!("building kernel with make");
    let status = Command::new("make")
        .current_dir(build_dir)
        .status()
        .map_err(|source| RunError::Launch {
            command: "make",
            source,
        })?;
    if !status.success() {
        return Err(RunError::ExternalToolFailure {
            command: "make",
            status,
        });
    }
    Ok(())
}
