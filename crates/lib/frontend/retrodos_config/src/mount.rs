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

    retrodos_config::mount.rs

    Parsing of command line mount specifications.

*/

use retrodos_frontend_common::{MountKind, MountOption};
use std::{path::PathBuf, str::FromStr};

/// A `drive:kind:path[?opt=val&...]` mount request, e.g. `d:iso:/media/game.iso?label=GAMECD`.
/// Options are passed to the guest mount command as `-opt val` in the order given; an option
/// without `=` becomes a bare `-opt` switch.
#[derive(Clone, Debug, PartialEq)]
pub struct MountSpec {
    pub drive:   char,
    pub kind:    MountKind,
    pub path:    PathBuf,
    pub options: Vec<MountOption>,
}

impl FromStr for MountSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Split once for optional options
        let (main, opt_str) = match s.split_once('?') {
            Some((left, right)) => (left, Some(right)),
            None => (s, None),
        };

        let mut parts = main.splitn(3, ':');

        let drive_str = parts.next().ok_or("Missing drive letter")?;
        let kind_str = parts.next().ok_or("Missing mount type")?;
        let path_str = parts.next().ok_or("Missing host path")?;

        let mut drive_chars = drive_str.chars();
        let drive = match (drive_chars.next(), drive_chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_lowercase(),
            _ => return Err(format!("Invalid drive letter: {drive_str}")),
        };

        let kind = kind_str.parse::<MountKind>()?;

        if path_str.is_empty() {
            return Err("Missing host path".to_string());
        }
        let path = PathBuf::from(path_str);
        let mut options = Vec::new();

        if let Some(opts) = opt_str {
            for entry in opts.split('&').filter(|e| !e.is_empty()) {
                let (name, value) = match entry.split_once('=') {
                    Some((name, value)) => (name, Some(value.to_string())),
                    None => (entry, None),
                };
                if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                    return Err(format!("Invalid mount option: {entry}"));
                }
                options.push(MountOption {
                    name: name.to_lowercase(),
                    value,
                });
            }
        }

        Ok(MountSpec {
            drive,
            kind,
            path,
            options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kinds() {
        let spec: MountSpec = "C:dir:/home/user/games".parse().unwrap();
        assert_eq!(spec.drive, 'c');
        assert_eq!(spec.kind, MountKind::Dir);
        assert_eq!(spec.path, PathBuf::from("/home/user/games"));

        let spec: MountSpec = "d:iso:/media/cd.iso?label=GAMECD&ro".parse().unwrap();
        assert_eq!(spec.kind, MountKind::Iso);
        assert_eq!(spec.path, PathBuf::from("/media/cd.iso"));
        assert_eq!(
            spec.options,
            vec![
                MountOption {
                    name:  "label".to_string(),
                    value: Some("GAMECD".to_string()),
                },
                MountOption {
                    name:  "ro".to_string(),
                    value: None,
                },
            ]
        );

        let spec: MountSpec = "c:hdd:D:\\images\\win98.img".parse().unwrap();
        assert_eq!(spec.kind, MountKind::Hdd);
        assert_eq!(spec.path, PathBuf::from("D:\\images\\win98.img"));
    }

    #[test]
    fn rejects_bad_specs() {
        assert!("cc:dir:/x".parse::<MountSpec>().is_err());
        assert!("1:dir:/x".parse::<MountSpec>().is_err());
        assert!("c:tape:/x".parse::<MountSpec>().is_err());
        assert!("c:dir".parse::<MountSpec>().is_err());
        assert!("c:dir:".parse::<MountSpec>().is_err());
        assert!("d:iso:/x.iso?=GAMECD".parse::<MountSpec>().is_err());
        assert!("d:iso:/x.iso?la bel=GAMECD".parse::<MountSpec>().is_err());
    }
}
