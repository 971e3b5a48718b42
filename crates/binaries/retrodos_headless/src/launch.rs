/*
    retrodos
    https://github.com/retrodos/retrodos

    Copyright 2024-2025 The retrodos developers

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------

    retrodos_headless::launch.rs

    Boot script composition and emulator invocation.

*/

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::Error;
use retrodos_config::MountSpec;
use retrodos_frontend_common::{BootScript, GameDir, MountKind};

pub const CONFIG_FILE_NAME: &str = "retrodos.conf";
pub const REGISTRY_PATCH_FILE_NAME: &str = "display.reg";

/// Guest drive used to reach the output directory when copying the registry patch.
pub const PATCH_DRIVE: char = 'y';
pub const PATCH_GUEST_PATH: &str = "c:\\windows\\display.reg";

/// A composed boot script.
#[derive(Clone, Debug, PartialEq)]
pub struct BootPlan {
    pub script: String,
    /// Set when the script copies the registry patch into a booted guest.
    pub copies_patch: bool,
}

/// Compose the boot script for a game.
///
/// Explicit mounts replace the default `c:` mount of the game directory (or its hard disk image).
/// If any hard disk image is mounted the guest is booted from it; otherwise the descriptor's
/// program, if any, is run. `patch_dir` is mounted and the registry patch copied into the guest
/// only when booting.
pub fn build_boot_script(game: &GameDir, mounts: &[MountSpec], patch_dir: Option<&Path>) -> Result<BootPlan, Error> {
    let mut script = BootScript::new();
    let mut boot_drive: Option<char> = None;
    let mut copies_patch = false;

    if mounts.is_empty() {
        match game.hdd_image_path() {
            Some(image) => {
                script.imgmount('c', &image, MountKind::Hdd)?;
                boot_drive = Some('c');
            }
            None => {
                script.mount('c', &game.path)?;
            }
        }
    }
    else {
        for spec in mounts {
            log::debug!("build_boot_script(): mounting {:?} as {}: ({})", spec.path, spec.drive, spec.kind);
            script.attach(spec.drive, &spec.path, spec.kind, &spec.options)?;
            if spec.kind == MountKind::Hdd && boot_drive.is_none() {
                boot_drive = Some(spec.drive);
            }
        }
    }

    match boot_drive {
        Some(drive) => {
            if let Some(dir) = patch_dir {
                script
                    .mount(PATCH_DRIVE, dir)?
                    .copy(&format!("{}:\\{}", PATCH_DRIVE, REGISTRY_PATCH_FILE_NAME), PATCH_GUEST_PATH);
                copies_patch = true;
            }
            script.boot(drive)?;
        }
        None => {
            if let Some(program) = &game.descriptor.exec {
                script.exec(program);
            }
        }
    }

    Ok(BootPlan {
        script: script.build(),
        copies_patch,
    })
}

/// Build the emulator command line: `<binary> -conf <conf_path> [extra args...]`.
pub fn emulator_command(binary: &Path, conf_path: &Path, extra_args: &[String]) -> Command {
    let mut command = Command::new(binary);
    command.arg("-conf").arg(conf_path).args(extra_args);
    command
}

pub fn output_paths(output_dir: &Path) -> (PathBuf, PathBuf) {
    (
        output_dir.join(CONFIG_FILE_NAME),
        output_dir.join(REGISTRY_PATCH_FILE_NAME),
    )
}
