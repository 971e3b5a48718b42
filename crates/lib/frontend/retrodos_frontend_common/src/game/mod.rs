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

    frontend_common::game::mod.rs

    Loading of a game directory: the `game.toml` descriptor and the
    `edit.conf` override file.

*/

use std::path::{Path, PathBuf};

use anyhow::Error;
use retrodos_core::entry::{parse, ParsedOverride};
use serde_derive::Deserialize;

pub const GAME_DESCRIPTOR_FILE: &str = "game.toml";
pub const GAME_OVERRIDE_FILE: &str = "edit.conf";

/// Contents of `game.toml`. Every field is optional.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GameDescriptor {
    pub title: Option<String>,
    pub exe_type: Option<String>,
    /// Preset reference, resolved by the preset manager.
    pub conf: Option<String>,
    /// Guest program to run after mounting. Ignored when booting a disk image.
    pub exec: Option<String>,
    /// Hard disk image, relative to the game directory.
    pub hdd_image: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct GameDir {
    pub path: PathBuf,
    pub descriptor: GameDescriptor,
    pub override_file: Option<ParsedOverride>,
}

impl GameDir {
    pub fn load(path: &Path) -> Result<Self, Error> {
        if !path.is_dir() {
            return Err(anyhow::anyhow!("Game directory not found: {}", path.display()));
        }

        let descriptor_path = path.join(GAME_DESCRIPTOR_FILE);
        let descriptor = if descriptor_path.is_file() {
            let toml_str = std::fs::read_to_string(&descriptor_path)?;
            toml::from_str::<GameDescriptor>(&toml_str).map_err(|e| {
                anyhow::anyhow!("Error parsing game descriptor '{}':\n{}", descriptor_path.display(), e)
            })?
        }
        else {
            log::debug!("GameDir::load(): no {} in {:?}", GAME_DESCRIPTOR_FILE, path);
            GameDescriptor::default()
        };

        let override_path = path.join(GAME_OVERRIDE_FILE);
        let override_file = if override_path.is_file() {
            let bytes = std::fs::read(&override_path)?;
            let parsed = parse(&String::from_utf8_lossy(&bytes));
            log::debug!(
                "GameDir::load(): {} has {} entries ({} schema)",
                GAME_OVERRIDE_FILE,
                parsed.entries.len(),
                parsed.schema_version()
            );
            Some(parsed)
        }
        else {
            None
        };

        Ok(Self {
            path: path.to_path_buf(),
            descriptor,
            override_file,
        })
    }

    /// A display name for logs: the descriptor title, or the directory name.
    pub fn title(&self) -> String {
        match &self.descriptor.title {
            Some(title) => title.clone(),
            None => self
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }

    /// The hard disk image path resolved against the game directory.
    pub fn hdd_image_path(&self) -> Option<PathBuf> {
        self.descriptor.hdd_image.as_ref().map(|image| self.path.join(image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource_manager::test_util::write_file;

    #[test]
    fn loads_descriptor_and_override() {
        let root = tempfile::tempdir().unwrap();
        write_file(
            root.path(),
            "Descent/game.toml",
            "title = \"Descent\"\nexe_type = \"win98\"\nconf = \"C:\\\\conf\\\\win98.conf\"\nhdd_image = \"hdd.img\"\n",
        );
        write_file(root.path(), "Descent/edit.conf", "ver.22.04.01\r\n7|3|128\r\n");

        let game = GameDir::load(&root.path().join("Descent")).unwrap();
        assert_eq!(game.title(), "Descent");
        assert_eq!(game.descriptor.exe_type.as_deref(), Some("win98"));
        assert_eq!(game.descriptor.conf.as_deref(), Some("C:\\conf\\win98.conf"));
        assert_eq!(game.hdd_image_path(), Some(root.path().join("Descent").join("hdd.img")));

        let parsed = game.override_file.unwrap();
        assert_eq!(parsed.version, 220401);
        assert_eq!(parsed.entries.len(), 1);
    }

    #[test]
    fn bare_directory_is_valid() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("Keen")).unwrap();

        let game = GameDir::load(&root.path().join("Keen")).unwrap();
        assert_eq!(game.title(), "Keen");
        assert!(game.override_file.is_none());
        assert!(game.hdd_image_path().is_none());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        assert!(GameDir::load(&root.path().join("nope")).is_err());
    }

    #[test]
    fn bad_descriptor_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        write_file(root.path(), "Doom/game.toml", "title = [\n");
        assert!(GameDir::load(&root.path().join("Doom")).is_err());
    }
}
