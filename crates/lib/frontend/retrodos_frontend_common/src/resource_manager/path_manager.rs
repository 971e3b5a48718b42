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

    frontend_common::resource_manager::path_manager.rs

    Resolution of named resource directories, with `$basedir$` substitution.

*/

use std::path::{Path, PathBuf};

use crate::resource_manager::ResourceManager;
use anyhow::Error;
use retrodos_common::RetroHashMap;
use serde_derive::Deserialize;

const BASEDIR_TOKEN: &str = "$basedir$";

#[derive(Clone, Debug, Deserialize)]
pub struct PathConfigItem {
    pub resource: String,
    pub path: String,
    #[serde(default)]
    pub create: bool,
}

pub struct PathManager {
    base_path: PathBuf,
    paths: RetroHashMap<String, PathBuf>,
}

impl PathManager {
    pub fn new(base_path: PathBuf) -> Self {
        Self {
            base_path,
            paths: RetroHashMap::default(),
        }
    }

    /// Register a resource directory. The directory must exist unless `create` is set, in which
    /// case it is created.
    pub fn add_path(&mut self, resource_name: &str, path_str: &str, create: bool) -> Result<(), Error> {
        let resolved_path = self.resolve_path(path_str)?;

        if create && !ResourceManager::path_exists(&resolved_path) {
            log::debug!("add_path(): creating resource directory {:?}", resolved_path);
            ResourceManager::create_path(&resolved_path)?;
        }

        if !ResourceManager::path_is_dir(&resolved_path) {
            return Err(anyhow::anyhow!(
                "Path for resource '{}' is not a directory: {}",
                resource_name,
                resolved_path.display()
            ));
        }
        self.paths.insert(resource_name.to_string(), resolved_path);
        Ok(())
    }

    /// Replace a leading `$basedir$` token with the base path.
    pub fn resolve_path(&self, in_path: &str) -> Result<PathBuf, Error> {
        match in_path.matches(BASEDIR_TOKEN).count() {
            0 => Ok(PathBuf::from(in_path)),
            1 if in_path.starts_with(BASEDIR_TOKEN) => {
                let rest = in_path[BASEDIR_TOKEN.len()..].trim_start_matches(['/', '\\']);
                let mut built_path = self.base_path.clone();
                if !rest.is_empty() {
                    built_path.push(rest);
                }
                Ok(built_path)
            }
            _ => Err(anyhow::anyhow!(
                "Replacement token should only occur at start: {}",
                in_path
            )),
        }
    }

    pub fn resource_path(&self, resource_name: &str) -> Option<PathBuf> {
        self.paths.get(resource_name).cloned()
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn dump_paths(&self) -> Vec<PathBuf> {
        self.paths.values().cloned().collect()
    }
}
