//! Compatibility-table behavior of the validation gate.

use krun::{Arch, RunConfig, RunError, Simulator};

#[test]
fn x86_family_under_qemu_is_rejected() {
    for arch in [Arch::I386, Arch::X86_64] {
        let config = RunConfig::new(arch, Simulator::Qemu);
        let err = config.validate().unwrap_err();
        match err {
            RunError::UnsupportedCombination { arch: a, simulator } => {
                assert_eq!(a, arch);
                assert_eq!(simulator, Simulator::Qemu);
            }
            other => panic!("expected UnsupportedCombination, got {other}"),
        }
    }
}

#[test]
fn every_other_pair_passes_validation() {
    let allowed = [
        (Arch::I386, Simulator::Bochs),
        (Arch::X86_64, Simulator::Bochs),
        (Arch::Arm, Simulator::Bochs),
        (Arch::Arm, Simulator::Qemu),
        (Arch::Aarch64, Simulator::Bochs),
        (Arch::Aarch64, Simulator::Qemu),
        (Arch::Riscv64, Simulator::Bochs),
        (Arch::Riscv64, Simulator::Qemu),
    ];
    for (arch, simulator) in allowed {
        let config = RunConfig::new(arch, simulator);
        assert!(
            config.validate().is_ok(),
            "{arch} under {simulator} should pass validation"
        );
    }
}
