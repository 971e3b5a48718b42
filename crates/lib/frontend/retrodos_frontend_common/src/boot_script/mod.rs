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

    frontend_common::boot_script::mod.rs

    Builder for the `[autoexec]` boot script.

*/

use std::{fmt::Display, path::Path, str::FromStr};

use anyhow::Error;
use serde_derive::Deserialize;
use strum_macros::Display;

/// How a host path is attached to a guest drive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Display, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MountKind {
    #[default]
    Dir,
    Iso,
    Hdd,
}

impl FromStr for MountKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dir" => Ok(MountKind::Dir),
            "iso" | "cd" | "cdrom" => Ok(MountKind::Iso),
            "hdd" | "hd" | "img" => Ok(MountKind::Hdd),
            _ => Err(format!("Bad value for mount kind: {}", s)),
        }
    }
}

/// Validate a guest drive letter, returning it lowercased.
pub fn check_drive(drive: char) -> Result<char, Error> {
    if drive.is_ascii_alphabetic() {
        Ok(drive.to_ascii_lowercase())
    }
    else {
        Err(anyhow::anyhow!("Invalid drive letter: '{}'", drive))
    }
}

fn quoted(path: impl Display) -> String {
    format!("\"{}\"", path)
}

/// A `-name [value]` switch appended to a mount command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MountOption {
    pub name:  String,
    pub value: Option<String>,
}

impl Display for MountOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) if value.contains(' ') => write!(f, "-{} {}", self.name, quoted(value)),
            Some(value) => write!(f, "-{} {}", self.name, value),
            None => write!(f, "-{}", self.name),
        }
    }
}

/// Accumulates boot script lines. The finished text is passed to the assembler verbatim.
#[derive(Clone, Debug, Default)]
pub struct BootScript {
    lines: Vec<String>,
}

impl BootScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a host directory as a guest drive.
    pub fn mount(&mut self, drive: char, host_dir: &Path) -> Result<&mut Self, Error> {
        self.attach(drive, host_dir, MountKind::Dir, &[])
    }

    /// Mount a disk image as a guest drive. [MountKind::Dir] falls through to [BootScript::mount].
    pub fn imgmount(&mut self, drive: char, image: &Path, kind: MountKind) -> Result<&mut Self, Error> {
        self.attach(drive, image, kind, &[])
    }

    /// Mount a host path of any kind, appending `options` to the command in order.
    pub fn attach(
        &mut self,
        drive: char,
        host_path: &Path,
        kind: MountKind,
        options: &[MountOption],
    ) -> Result<&mut Self, Error> {
        let drive = check_drive(drive)?;
        let mut line = match kind {
            MountKind::Dir => format!("mount {} {}", drive, quoted(host_path.display())),
            MountKind::Iso => format!("imgmount {} {} -t iso", drive, quoted(host_path.display())),
            MountKind::Hdd => format!("imgmount {} {} -t hdd", drive, quoted(host_path.display())),
        };
        for option in options {
            line.push(' ');
            line.push_str(&option.to_string());
        }
        self.lines.push(line);
        Ok(self)
    }

    pub fn copy(&mut self, from: &str, to: &str) -> &mut Self {
        self.lines.push(format!("copy {} {}", from, to));
        self
    }

    pub fn line(&mut self, raw: &str) -> &mut Self {
        self.lines.push(raw.to_string());
        self
    }

    /// Boot the guest from a mounted drive.
    pub fn boot(&mut self, drive: char) -> Result<&mut Self, Error> {
        let drive = check_drive(drive)?;
        self.lines.push(format!("boot {}:", drive));
        Ok(self)
    }

    /// Change to the program's drive and directory, then run it. `program` is a guest path such
    /// as `c:\games\doom\doom.exe`; a bare file name runs from the current directory.
    pub fn exec(&mut self, program: &str) -> &mut Self {
        let program = program.trim();
        let (dir, file) = match program.rsplit_once('\\') {
            Some((dir, file)) => (Some(dir), file),
            None => (None, program),
        };

        if let Some(dir) = dir {
            if let Some((drive, rest)) = dir.split_once(':') {
                self.lines.push(format!("{}:", drive));
                self.lines
                    .push(format!("cd {}", if rest.is_empty() { "\\" } else { rest }));
            }
            else if !dir.is_empty() {
                self.lines.push(format!("cd {}", dir));
            }
        }
        self.lines.push(file.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Join all lines with `\n`, with a trailing newline.
    pub fn build(&self) -> String {
        let mut script = self.lines.join("\n");
        if !script.is_empty() {
            script.push('\n');
        }
        script
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn builds_mount_and_boot() {
        let mut script = BootScript::new();
        script
            .imgmount('C', &PathBuf::from("/games/win98/hdd.img"), MountKind::Hdd)
            .unwrap()
            .mount('y', &PathBuf::from("/tmp/out"))
            .unwrap()
            .copy("y:\\display.reg", "c:\\windows\\display.reg")
            .boot('c')
            .unwrap();

        assert_eq!(
            script.build(),
            "imgmount c \"/games/win98/hdd.img\" -t hdd\n\
             mount y \"/tmp/out\"\n\
             copy y:\\display.reg c:\\windows\\display.reg\n\
             boot c:\n"
        );
    }

    #[test]
    fn attach_appends_options_in_order() {
        let options = vec![
            MountOption {
                name:  "label".to_string(),
                value: Some("GAMECD".to_string()),
            },
            MountOption {
                name:  "fs".to_string(),
                value: Some("iso".to_string()),
            },
            MountOption {
                name:  "ro".to_string(),
                value: None,
            },
        ];
        let mut script = BootScript::new();
        script
            .attach('d', &PathBuf::from("/media/cd.iso"), MountKind::Iso, &options)
            .unwrap()
            .attach(
                'e',
                &PathBuf::from("/data"),
                MountKind::Dir,
                &[MountOption {
                    name:  "label".to_string(),
                    value: Some("MY DATA".to_string()),
                }],
            )
            .unwrap();

        assert_eq!(
            script.build(),
            "imgmount d \"/media/cd.iso\" -t iso -label GAMECD -fs iso -ro\n\
             mount e \"/data\" -label \"MY DATA\"\n"
        );
    }

    #[test]
    fn exec_changes_directory() {
        let mut script = BootScript::new();
        script.exec("c:\\games\\doom\\doom.exe");
        assert_eq!(script.build(), "c:\ncd \\games\\doom\ndoom.exe\n");

        let mut script = BootScript::new();
        script.exec("c:\\install.bat");
        assert_eq!(script.build(), "c:\ncd \\\ninstall.bat\n");

        let mut script = BootScript::new();
        script.exec("game.com");
        assert_eq!(script.build(), "game.com\n");
    }

    #[test]
    fn drive_letters_are_checked() {
        let mut script = BootScript::new();
        assert!(script.mount('1', &PathBuf::from("/x")).is_err());
        assert!(script.boot('!').is_err());
        assert!(script.is_empty());
        assert_eq!(script.build(), "");
    }

    #[test]
    fn mount_kind_names() {
        assert_eq!("ISO".parse::<MountKind>(), Ok(MountKind::Iso));
        assert_eq!("hdd".parse::<MountKind>(), Ok(MountKind::Hdd));
        assert!("tape".parse::<MountKind>().is_err());
        assert_eq!(MountKind::Hdd.to_string(), "hdd");
    }
}
