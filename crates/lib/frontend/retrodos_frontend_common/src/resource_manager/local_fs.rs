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

    frontend_common::resource_manager::local_fs.rs

    Method implementations for local filesystem operations.

*/

use crate::resource_manager::{ResourceItem, ResourceItemType, ResourceManager};
use anyhow::Error;
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

fn extension_matches(path: &Path, extensions: Option<&[&str]>) -> bool {
    let Some(extensions) = extensions else {
        return true;
    };
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy();
            extensions.iter().any(|want| ext.eq_ignore_ascii_case(want))
        })
        .unwrap_or(false)
}

impl ResourceManager {
    /// List the items in a resource directory. Files are filtered by extension (case-insensitive)
    /// when `extensions` is given; directories are only returned when not recursing.
    pub fn enumerate_items(
        &self,
        resource: &str,
        recursive: bool,
        extensions: Option<&[&str]>,
    ) -> Result<Vec<ResourceItem>, Error> {
        let root = self
            .pm
            .resource_path(resource)
            .ok_or(anyhow::anyhow!("Resource path not found: {}", resource))?;

        let mut items: Vec<ResourceItem> = Vec::new();

        if recursive {
            let mut visited = HashSet::new();
            let ignore_dirs: Vec<&str> = self.ignore_dirs.iter().map(|s| s.as_str()).collect();
            ResourceManager::visit_dirs(&root, &mut visited, &ignore_dirs, &mut |entry: &fs::DirEntry| {
                let path = entry.path();
                if extension_matches(&path, extensions) {
                    items.push(ResourceItem {
                        rtype: ResourceItemType::LocalFile,
                        filename_only: path.file_name().map(|s| s.to_os_string()),
                        location: path,
                    });
                }
            })?;
            return Ok(items);
        }

        for entry in fs::read_dir(&root)? {
            let path = entry?.path();

            if path.is_dir() {
                items.push(ResourceItem {
                    rtype: ResourceItemType::Directory,
                    filename_only: path.file_name().map(|s| s.to_os_string()),
                    location: path,
                });
            }
            else if extension_matches(&path, extensions) {
                items.push(ResourceItem {
                    rtype: ResourceItemType::LocalFile,
                    filename_only: path.file_name().map(|s| s.to_os_string()),
                    location: path,
                });
            }
        }

        Ok(items)
    }

    fn visit_dirs(
        dir: &Path,
        visited: &mut HashSet<PathBuf>,
        ignore_dirs: &[&str],
        cb: &mut dyn FnMut(&fs::DirEntry),
    ) -> std::io::Result<()> {
        if dir.is_dir() {
            for entry in fs::read_dir(dir)? {
                let entry = entry?;
                let path = entry.path();

                // Resolve symlinks so loops are only walked once
                let canonical_path = fs::canonicalize(&path)?;
                if visited.contains(&canonical_path) {
                    continue;
                }

                if ResourceManager::path_contains_dirs(&canonical_path, ignore_dirs) {
                    continue;
                }
                visited.insert(canonical_path);

                if path.is_dir() {
                    ResourceManager::visit_dirs(&path, visited, ignore_dirs, cb)?;
                }
                else {
                    cb(&entry);
                }
            }
        }
        Ok(())
    }

    pub fn path_exists(path: &Path) -> bool {
        path.exists()
    }

    pub fn path_is_dir(path: &Path) -> bool {
        path.canonicalize().map(|p| p.is_dir()).unwrap_or(false)
    }

    pub fn create_path(path: &Path) -> Result<(), Error> {
        fs::create_dir_all(path)?;
        Ok(())
    }

    pub fn read_string_from_path(&self, path: &Path) -> Result<String, Error> {
        let bytes = fs::read(path)?;
        // Override files may be in a legacy code page
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn write_string_to_path(&self, path: &Path, contents: &str) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, contents)?;
        log::debug!("write_string_to_path(): wrote {} bytes to {:?}", contents.len(), path);
        Ok(())
    }
}
