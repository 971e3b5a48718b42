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

    frontend_common::template_manager::mod.rs

    Template text services for frontends. Compiled-in templates may be
    overridden by files in the `templates` resource directory.

*/

use std::path::PathBuf;

use crate::resource_manager::ResourceManager;
use anyhow::Error;
use retrodos_common::RetroHashMap;
use retrodos_core::template::TemplateKind;

pub const TEMPLATE_RESOURCE: &str = "templates";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TemplateSource {
    Builtin,
    Disk,
}

pub struct TemplateManager {
    override_dir: Option<PathBuf>,
    cache: RetroHashMap<TemplateKind, (TemplateSource, String)>,
}

impl TemplateManager {
    pub fn new(override_dir: Option<PathBuf>) -> Self {
        Self {
            override_dir,
            cache: RetroHashMap::default(),
        }
    }

    /// Use the `templates` resource as the override directory, if one is configured.
    pub fn from_resources(rm: &ResourceManager) -> Self {
        let dir = rm.resource_path(TEMPLATE_RESOURCE);
        if dir.is_none() {
            log::debug!(
                "from_resources(): no '{}' resource, using builtin templates only",
                TEMPLATE_RESOURCE
            );
        }
        Self::new(dir)
    }

    /// Return the text for a template kind, loading it on first use.
    pub fn get_template(&mut self, kind: TemplateKind) -> Result<&str, Error> {
        if !self.cache.contains_key(&kind) {
            let loaded = self.load(kind)?;
            self.cache.insert(kind, loaded);
        }
        // Inserted above if it was missing.
        let (_source, text) = &self.cache[&kind];
        Ok(text.as_str())
    }

    /// Where the cached text for `kind` came from, if it has been loaded.
    pub fn source(&self, kind: TemplateKind) -> Option<TemplateSource> {
        self.cache.get(&kind).map(|(source, _)| *source)
    }

    fn load(&self, kind: TemplateKind) -> Result<(TemplateSource, String), Error> {
        if let Some(dir) = &self.override_dir {
            let path = dir.join(kind.file_name());
            if ResourceManager::path_exists(&path) {
                log::debug!("get_template(): loading {} template from {:?}", kind, path);
                let text = std::fs::read_to_string(&path)
                    .map_err(|e| anyhow::anyhow!("Error reading template '{}': {}", path.display(), e))?;
                return Ok((TemplateSource::Disk, text));
            }
        }
        log::debug!("get_template(): using builtin {} template", kind);
        Ok((TemplateSource::Builtin, kind.builtin_text().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource_manager::test_util::write_file;

    #[test]
    fn builtin_without_override_dir() {
        let mut tm = TemplateManager::new(None);
        let text = tm.get_template(TemplateKind::Win95).unwrap().to_string();
        assert_eq!(text, TemplateKind::Win95.builtin_text());
        assert_eq!(tm.source(TemplateKind::Win95), Some(TemplateSource::Builtin));
        assert_eq!(tm.source(TemplateKind::Base), None);
    }

    #[test]
    fn disk_override_is_cached() {
        let root = tempfile::tempdir().unwrap();
        let path = write_file(root.path(), "win98.conf", "[cpu]\ncore=@cpu_core@\n");

        let mut tm = TemplateManager::new(Some(root.path().to_path_buf()));
        assert_eq!(tm.get_template(TemplateKind::Win98).unwrap(), "[cpu]\ncore=@cpu_core@\n");
        assert_eq!(tm.source(TemplateKind::Win98), Some(TemplateSource::Disk));

        std::fs::remove_file(path).unwrap();
        assert_eq!(tm.get_template(TemplateKind::Win98).unwrap(), "[cpu]\ncore=@cpu_core@\n");

        assert_eq!(tm.get_template(TemplateKind::Base).unwrap(), TemplateKind::Base.builtin_text());
    }
}
