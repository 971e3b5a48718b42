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

    frontend_common::preset_manager::mod.rs

    Preset override file services for frontends.

*/

//! Presets are bundled override-format files applied beneath a game's own override. Games refer
//! to a preset by a loose reference string (often a DOS or Windows path copied from the original
//! launcher), which is reduced to a lowercase file stem for lookup.

use std::{collections::BTreeMap, path::PathBuf};

use crate::resource_manager::ResourceManager;
use anyhow::Error;
use retrodos_core::entry::{parse, ParsedOverride};

pub const PRESET_RESOURCE: &str = "presets";
pub const PRESET_EXTENSION: &str = "conf";

#[derive(Clone, Debug)]
pub struct PresetEntry {
    pub name: String,
    pub location: PathBuf,
    pub parsed: ParsedOverride,
}

#[derive(Default)]
pub struct PresetManager {
    presets: BTreeMap<String, PresetEntry>,
}

/// Reduce a preset reference to its lookup key: directories and extension stripped, lowercased.
/// Both `/` and `\` are treated as separators.
pub fn preset_key(reference: &str) -> String {
    let file = reference
        .trim()
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let stem = match file.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => file,
    };
    stem.to_lowercase()
}

impl PresetManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse every preset file in the `presets` resource.
    pub fn load_presets(&mut self, rm: &ResourceManager) -> Result<(), Error> {
        log::debug!("load_presets(): Loading preset files...");

        let items = rm.enumerate_items(PRESET_RESOURCE, true, Some(&[PRESET_EXTENSION]))?;
        log::debug!("load_presets(): Found {} preset files", items.len());

        for item in items.iter().filter(|item| item.is_file()) {
            let text = rm.read_string_from_path(&item.location).map_err(|e| {
                anyhow::anyhow!("Error reading preset file '{}': {}", item.location.display(), e)
            })?;
            self.add_preset(&item.location.to_string_lossy(), item.location.clone(), &text)?;
        }

        Ok(())
    }

    /// Register a preset from text. `reference` determines the lookup key.
    pub fn add_preset(&mut self, reference: &str, location: PathBuf, text: &str) -> Result<(), Error> {
        let name = preset_key(reference);
        if name.is_empty() {
            return Err(anyhow::anyhow!("Invalid preset name: '{}'", reference));
        }
        if let Some(existing) = self.presets.get(&name) {
            return Err(anyhow::anyhow!(
                "Duplicate preset name '{}': {} and {}",
                name,
                existing.location.display(),
                location.display()
            ));
        }

        let parsed = parse(text);
        log::trace!(
            "add_preset(): {} ({} schema, {} entries)",
            name,
            parsed.schema_version(),
            parsed.entries.len()
        );
        self.presets.insert(
            name.clone(),
            PresetEntry {
                name,
                location,
                parsed,
            },
        );
        Ok(())
    }

    /// Return the names of all loaded presets, sorted.
    pub fn get_preset_names(&self) -> Vec<String> {
        self.presets.keys().cloned().collect()
    }

    /// Look up a preset by reference string. A reference that matches nothing is an error.
    pub fn get_preset(&self, reference: &str) -> Result<&PresetEntry, Error> {
        let key = preset_key(reference);
        self.presets
            .get(&key)
            .ok_or(anyhow::anyhow!("Preset not found: '{}' (looked up as '{}')", reference, key))
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
