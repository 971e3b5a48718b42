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

    retrodos_config::lib.rs

    Launcher configuration file and command line overlay.

*/

//! The `retrodos_config` crate parses the launcher's main configuration file, `retrodos.toml`, and
//! overlays command line arguments on top of it. Command line arguments always take priority over
//! the configuration file.
//!
//! Features:
//! - `use_bpaf`: Enable BPAF support for command line argument parsing.

mod bpaf_config;
mod mount;

use std::path::{Path, PathBuf};

pub use bpaf_config::CmdLineArgs;
#[cfg(feature = "use_bpaf")]
use bpaf_config::cli_args;
pub use mount::MountSpec;

use cfg_if::cfg_if;
use retrodos_common::EmulatorKind;
use retrodos_core::win9x::HeightVariant;
use retrodos_frontend_common::resource_manager::PathConfigItem;
use serde_derive::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "./retrodos.toml";

const fn _default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct Launcher {
    pub basedir: PathBuf,
    pub paths: Vec<PathConfigItem>,
    #[serde(default)]
    pub ignore_dirs: Vec<String>,
    pub default_exe_type: Option<String>,
    /// Comment block written at the top of every generated configuration.
    pub header: Option<String>,
    #[serde(default)]
    pub use_templates: bool,
    #[serde(default)]
    pub height_variant: HeightVariant,
    #[serde(default = "_default_true")]
    pub write_registry_patch: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct Emulator {
    pub dosbox: Option<PathBuf>,
    pub dosbox_x: Option<PathBuf>,
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Emulator {
    /// The configured binary for an emulator, or its bare name to be found on `PATH`.
    pub fn binary_for(&self, kind: EmulatorKind) -> PathBuf {
        let configured = match kind {
            EmulatorKind::DosBox => self.dosbox.as_ref(),
            EmulatorKind::DosBoxX => self.dosbox_x.as_ref(),
        };
        configured
            .cloned()
            .unwrap_or_else(|| PathBuf::from(kind.default_binary()))
    }
}

/// Per-launch parameters. Usually given on the command line, but may be set in the file.
#[derive(Debug, Default, Deserialize)]
pub struct Run {
    pub game: Option<PathBuf>,
    pub exe_type: Option<String>,
    pub preset: Option<String>,
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub no_launch: bool,
    #[serde(default)]
    pub dump_settings: bool,
    #[serde(skip)]
    pub mounts: Vec<MountSpec>,
}

#[derive(Debug, Deserialize)]
pub struct ConfigFileParams {
    pub launcher: Launcher,
    #[serde(default)]
    pub emulator: Emulator,
    #[serde(default)]
    pub run: Run,
}

impl ConfigFileParams {
    pub fn overlay(&mut self, shell_args: CmdLineArgs) {
        if let Some(basedir) = shell_args.base_dir {
            self.launcher.basedir = basedir;
        }
        if let Some(game) = shell_args.game {
            self.run.game = Some(game);
        }
        if let Some(exe_type) = shell_args.exe_type {
            self.run.exe_type = Some(exe_type);
        }
        if let Some(preset) = shell_args.preset {
            self.run.preset = Some(preset);
        }
        if let Some(output) = shell_args.output {
            self.run.output = Some(output);
        }

        self.launcher.use_templates |= shell_args.use_templates;
        self.run.no_launch |= shell_args.no_launch;
        self.run.dump_settings |= shell_args.dump_settings;

        self.run.mounts.extend(shell_args.mounts);
    }
}

pub fn read_config(toml_string: impl AsRef<str>, shell_args: CmdLineArgs) -> Result<ConfigFileParams, anyhow::Error> {
    let mut toml_args: ConfigFileParams = toml::from_str(toml_string.as_ref())?;

    // Command line arguments override config file arguments
    toml_args.overlay(shell_args);

    Ok(toml_args)
}

fn shell_args() -> CmdLineArgs {
    let shell_args: CmdLineArgs;

    cfg_if! {
        if #[cfg(feature = "use_bpaf")] {
            log::debug!("Reading command line arguments...");
            shell_args = cli_args().run();
        } else {
            log::debug!("Argument reading disabled...");
            shell_args = CmdLineArgs::default();
        }
    }
    shell_args
}

/// Read the TOML configuration from a file path, parse and overlay command line arguments.
pub fn read_config_file<P>(default_path: P) -> Result<ConfigFileParams, anyhow::Error>
where
    P: AsRef<Path>,
{
    let shell_args = shell_args();

    // Allow configuration file path to be overridden by command line argument 'config_file'
    let toml_string = if let Some(configfile_path) = shell_args.config_file.as_ref() {
        std::fs::read_to_string(configfile_path)?
    }
    else {
        std::fs::read_to_string(default_path)?
    };

    read_config(toml_string, shell_args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use retrodos_frontend_common::MountKind;

    const SAMPLE: &str = r##"
[launcher]
basedir = "/opt/retrodos"
paths = [
    { resource = "presets", path = "$basedir$/presets" },
    { resource = "templates", path = "$basedir$/templates" },
    { resource = "output", path = "$basedir$/out", create = true },
]
default_exe_type = "dos"
header = "# Generated by retrodos"
height_variant = "FourThree"

[emulator]
dosbox_x = "/usr/local/bin/dosbox-x"
extra_args = ["-nomenu"]
"##;

    #[test]
    fn parses_sample_config() {
        let config = read_config(SAMPLE, CmdLineArgs::default()).unwrap();
        assert_eq!(config.launcher.basedir, PathBuf::from("/opt/retrodos"));
        assert_eq!(config.launcher.paths.len(), 3);
        assert!(config.launcher.paths[2].create);
        assert_eq!(config.launcher.height_variant, HeightVariant::FourThree);
        assert!(config.launcher.write_registry_patch);
        assert!(!config.launcher.use_templates);
        assert_eq!(
            config.emulator.binary_for(EmulatorKind::DosBoxX),
            PathBuf::from("/usr/local/bin/dosbox-x")
        );
        assert_eq!(config.emulator.binary_for(EmulatorKind::DosBox), PathBuf::from("dosbox"));
        assert!(config.run.game.is_none());
    }

    #[test]
    fn command_line_wins() {
        let args = CmdLineArgs {
            base_dir: Some(PathBuf::from("/home/me/retrodos")),
            game: Some(PathBuf::from("/games/Descent")),
            exe_type: Some("win98".to_string()),
            use_templates: true,
            no_launch: true,
            mounts: vec!["d:iso:/media/descent.iso".parse().unwrap()],
            ..Default::default()
        };
        let config = read_config(SAMPLE, args).unwrap();
        assert_eq!(config.launcher.basedir, PathBuf::from("/home/me/retrodos"));
        assert_eq!(config.run.game, Some(PathBuf::from("/games/Descent")));
        assert_eq!(config.run.exe_type.as_deref(), Some("win98"));
        assert!(config.launcher.use_templates);
        assert!(config.run.no_launch);
        assert_eq!(config.run.mounts.len(), 1);
        assert_eq!(config.run.mounts[0].kind, MountKind::Iso);
    }

    #[test]
    fn missing_launcher_table_is_an_error() {
        assert!(read_config("[emulator]\n", CmdLineArgs::default()).is_err());
    }
}
