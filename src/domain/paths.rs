//! # Executable Paths
//!
//! Where a virtual-environment install of the external program lives,
//! relative to a base directory.

use std::path::{Path, PathBuf};

pub const PROGRAM_NAME: &str = "trestle";
pub const VENV_DIR: &str = ".venv";
pub const VENV_BIN_DIR: &str = "bin";

/// `<base>/.venv/bin/<program>`
pub fn venv_binary(base: &Path, program: &str) -> PathBuf {
    base.join(VENV_DIR).join(VENV_BIN_DIR).join(program)
}

/// `<install_dir>/../../.venv/bin/<program>`
pub fn install_venv_binary(install_dir: &Path, program: &str) -> PathBuf {
    venv_binary(&install_dir.join("..").join(".."), program)
}
