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

    frontend_common::resource_manager::mod.rs

    File and path services for frontends.

*/

mod local_fs;
mod path_manager;

use std::{ffi::OsString, path::PathBuf};

pub use path_manager::{PathConfigItem, PathManager};

use anyhow::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResourceItemType {
    Directory,
    LocalFile,
}

#[derive(Clone, Debug)]
pub struct ResourceItem {
    pub rtype: ResourceItemType,
    pub location: PathBuf,
    pub filename_only: Option<OsString>,
}

impl ResourceItem {
    pub fn is_file(&self) -> bool {
        self.rtype == ResourceItemType::LocalFile
    }

    /// The lowercased file name without extension.
    pub fn stem_lowercase(&self) -> Option<String> {
        self.location
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_lowercase())
    }
}

pub struct ResourceManager {
    pub pm: PathManager,
    pub ignore_dirs: Vec<String>,
}

impl ResourceManager {
    pub fn new(base_path: PathBuf) -> Self {
        Self {
            pm: PathManager::new(base_path),
            ignore_dirs: Vec::new(),
        }
    }

    pub fn from_config(base_path: PathBuf, config: &[PathConfigItem]) -> Result<Self, Error> {
        let mut rm = Self::new(base_path);
        for item in config {
            rm.pm.add_path(&item.resource, &item.path, item.create)?;
        }
        Ok(rm)
    }

    pub fn set_ignore_dirs(&mut self, dirs: Vec<String>) {
        self.ignore_dirs = dirs;
    }

    pub fn resource_path(&self, resource: &str) -> Option<PathBuf> {
        self.pm.resource_path(resource)
    }

    pub fn has_resource(&self, resource: &str) -> bool {
        self.pm.resource_path(resource).is_some()
    }

    pub fn path_contains_dirs(path: &std::path::Path, dirs: &[&str]) -> bool {
        dirs.iter().any(|&dir| path.iter().any(|component| component == dir))
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use std::path::{Path, PathBuf};

    /// Write `contents` to `rel` under `root`, creating parent directories.
    pub fn write_file(root: &Path, rel: &str, contents: &str) -> PathBuf {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, contents).unwrap();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::{test_util::write_file, *};

    #[test]
    fn enumerates_by_extension() {
        let root = tempfile::tempdir().unwrap();
        write_file(root.path(), "presets/Win98.conf", "7|3|64\n");
        write_file(root.path(), "presets/readme.txt", "notes");
        write_file(root.path(), "presets/nested/dos.CONF", "7|3|16\n");

        let config = vec![PathConfigItem {
            resource: "presets".to_string(),
            path: "$basedir$/presets".to_string(),
            create: false,
        }];
        let rm = ResourceManager::from_config(root.path().to_path_buf(), &config).unwrap();

        let flat_items = rm.enumerate_items("presets", false, Some(&["conf"])).unwrap();
        assert!(flat_items
            .iter()
            .any(|item| item.rtype == ResourceItemType::Directory && item.location.ends_with("nested")));

        let mut flat: Vec<String> = flat_items
            .iter()
            .filter(|item| item.is_file())
            .filter_map(|item| item.stem_lowercase())
            .collect();
        flat.sort();
        assert_eq!(flat, vec!["win98".to_string()]);

        let mut deep: Vec<String> = rm
            .enumerate_items("presets", true, Some(&["conf"]))
            .unwrap()
            .iter()
            .filter_map(|item| item.stem_lowercase())
            .collect();
        deep.sort();
        assert_eq!(deep, vec!["dos".to_string(), "win98".to_string()]);
    }

    #[test]
    fn create_flag_makes_directory() {
        let root = tempfile::tempdir().unwrap();
        let config = vec![PathConfigItem {
            resource: "output".to_string(),
            path: "$basedir$/out".to_string(),
            create: true,
        }];
        let rm = ResourceManager::from_config(root.path().to_path_buf(), &config).unwrap();
        assert!(ResourceManager::path_is_dir(&rm.resource_path("output").unwrap()));
    }
}
