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

    core::settings.rs

    Resolution of override entries into section/key settings maps, and merging of settings layers.

*/

use std::fmt::{self, Display};

use indexmap::IndexMap;

use crate::{
    entry::{OverrideEntry, ParsedOverride},
    schema::{SchemaSet, SchemaVersion},
};

/// Sections that carry metadata or aliasing information and are never written to an emulator
/// configuration document.
pub const PSEUDO_SECTIONS: &[&str] = &["default", "win9x", "pcem", "separator", "glide"];

/// Keys of the legacy `glide` section and where they live in the emitted `voodoo` section.
const GLIDE_FOLD: &[(&str, &str)] = &[("glide", "glide"), ("lfb", "lfb"), ("splash", "splash")];

pub fn is_pseudo_section(name: &str) -> bool {
    PSEUDO_SECTIONS.iter().any(|s| s.eq_ignore_ascii_case(name))
}

pub type Section = IndexMap<String, String>;

/// A nested `section -> key -> value` map. Values are kept as raw strings; consumers do their own
/// coercion. Iteration follows insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsMap {
    sections: IndexMap<String, Section>,
}

impl SettingsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from `(section, key, value)` triples. Later triples overwrite earlier ones.
    pub fn from_triples<'a, I>(triples: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    {
        let mut map = Self::new();
        for (section, key, value) in triples {
            map.set(section, key, value);
        }
        map
    }

    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .map(|v| v.as_str())
    }

    pub fn section(&self, section: &str) -> Option<&Section> {
        self.sections.get(section)
    }

    pub fn contains_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, section)| (name.as_str(), section))
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of keys over all sections.
    pub fn len(&self) -> usize {
        self.sections.values().map(|s| s.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into the `section_key` form used for template tokens.
    pub fn flatten(&self) -> IndexMap<String, String> {
        let mut flat = IndexMap::with_capacity(self.len());
        for (section, keys) in self.sections.iter() {
            for (key, value) in keys.iter() {
                flat.insert(flat_key(section, key), value.clone());
            }
        }
        flat
    }
}

impl Display for SettingsMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (section, keys) in self.sections.iter() {
            for (key, value) in keys.iter() {
                writeln!(f, "{}.{}={}", section, key, value)?;
            }
        }
        Ok(())
    }
}

/// Build the template token name for a section and key.
pub fn flat_key(section: &str, key: &str) -> String {
    format!("{}_{}", section, key)
}

/// Translate override entries into a settings map using the table for `version`. Entries whose
/// address the table doesn't define are dropped.
pub fn resolve(entries: &[OverrideEntry], version: SchemaVersion, schemas: &SchemaSet) -> SettingsMap {
    let registry = schemas.for_version(version);
    let mut map = SettingsMap::new();

    for entry in entries {
        match registry.lookup(entry.section, entry.item) {
            Some((section, key)) => {
                map.set(section, key, entry.value.as_str());
            }
            None => {
                log::debug!(
                    "resolve(): no {} mapping for {}|{}, dropping entry",
                    version,
                    entry.section,
                    entry.item
                );
            }
        }
    }

    fold_glide(&mut map);
    map
}

/// Resolve a parsed override file using the schema its own version marker selects.
pub fn resolve_parsed(parsed: &ParsedOverride, schemas: &SchemaSet) -> SettingsMap {
    resolve(&parsed.entries, parsed.schema_version(), schemas)
}

/// Copy the legacy `glide` pseudo-section into the emitted `voodoo` section. Keys already present in
/// `voodoo` take priority.
fn fold_glide(map: &mut SettingsMap) {
    let Some(glide) = map.section("glide").cloned() else {
        return;
    };

    for (glide_key, voodoo_key) in GLIDE_FOLD {
        if let Some(value) = glide.get(*glide_key) {
            if map.get("voodoo", voodoo_key).is_none() {
                map.set("voodoo", voodoo_key, value.as_str());
            }
        }
    }
}

/// Return a copy of `base` with every key in `overlay` written over it.
pub fn merge(base: &SettingsMap, overlay: &SettingsMap) -> SettingsMap {
    let mut merged = base.clone();
    for (section, keys) in overlay.sections() {
        for (key, value) in keys.iter() {
            merged.set(section, key, value.as_str());
        }
    }
    merged
}

/// Apply override layers in precedence order (lowest first) over `defaults`. Each layer is resolved
/// with the schema its own version marker selects.
pub fn resolve_layers(defaults: &SettingsMap, layers: &[&ParsedOverride], schemas: &SchemaSet) -> SettingsMap {
    let mut resolved = defaults.clone();
    for layer in layers {
        let layer_map = resolve_parsed(layer, schemas);
        log::debug!(
            "resolve_layers(): applying {} layer with {} settings",
            layer.schema_version(),
            layer_map.len()
        );
        resolved = merge(&resolved, &layer_map);
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::parse;

    #[test]
    fn memsize_resolves_under_each_schema_independently() {
        let schemas = SchemaSet::builtin();
        let entries = vec![OverrideEntry::new(7, 3, "256")];

        let legacy = resolve(&entries, SchemaVersion::Legacy, schemas);
        assert_eq!(legacy, SettingsMap::from_triples([("dosbox", "memsize", "256")]));

        let current = resolve(&entries, SchemaVersion::Current, schemas);
        let (section, key) = schemas
            .for_version(SchemaVersion::Current)
            .lookup(7, 3)
            .unwrap();
        assert_eq!(current.get(section, key), Some("256"));
        assert_eq!(current.len(), 1);
    }

    #[test]
    fn same_address_means_different_settings() {
        let schemas = SchemaSet::builtin();
        let entries = vec![OverrideEntry::new(3, 0, "svga_s3")];

        let legacy = resolve(&entries, SchemaVersion::Legacy, schemas);
        assert_eq!(legacy.get("dosbox", "machine"), Some("svga_s3"));

        let current = resolve(&entries, SchemaVersion::Current, schemas);
        assert_eq!(current.get("dosbox", "machine"), None);
        assert_eq!(current.get("separator", "line"), Some("svga_s3"));
    }

    #[test]
    fn unknown_addresses_are_dropped() {
        let schemas = SchemaSet::builtin();
        let entries = vec![OverrideEntry::new(99, 99, "anything")];
        assert!(resolve(&entries, SchemaVersion::Legacy, schemas).is_empty());
        assert!(resolve(&entries, SchemaVersion::Current, schemas).is_empty());

        // Known section, unknown item.
        let entries = vec![OverrideEntry::new(8, 42, "x")];
        assert!(resolve(&entries, SchemaVersion::Current, schemas).is_empty());
    }

    #[test]
    fn merge_override_wins() {
        let base = SettingsMap::from_triples([("dosbox", "memsize", "16")]);
        let overlay = SettingsMap::from_triples([("dosbox", "memsize", "256"), ("cpu", "core", "auto")]);
        let merged = merge(&base, &overlay);

        assert_eq!(
            merged,
            SettingsMap::from_triples([("dosbox", "memsize", "256"), ("cpu", "core", "auto")])
        );
        // Inputs are untouched.
        assert_eq!(base.get("dosbox", "memsize"), Some("16"));
    }

    #[test]
    fn merge_keeps_untouched_base_keys() {
        let base = SettingsMap::from_triples([("dosbox", "memsize", "16"), ("dosbox", "machine", "svga_s3")]);
        let overlay = SettingsMap::from_triples([("dosbox", "memsize", "64")]);
        let merged = merge(&base, &overlay);
        assert_eq!(merged.get("dosbox", "machine"), Some("svga_s3"));
        assert_eq!(merged.get("dosbox", "memsize"), Some("64"));
    }

    #[test]
    fn legacy_glide_folds_into_voodoo() {
        let schemas = SchemaSet::builtin();
        let parsed = parse("ver.21.06.01\n18|0|true\n18|1|full\n21|0|software\n");
        let map = resolve_parsed(&parsed, schemas);

        assert_eq!(map.get("voodoo", "glide"), Some("true"));
        assert_eq!(map.get("voodoo", "lfb"), Some("full"));
        assert_eq!(map.get("voodoo", "voodoo_card"), Some("software"));
        assert!(map.contains_section("glide"));
    }

    #[test]
    fn glide_fold_does_not_overwrite_voodoo() {
        let mut map = SettingsMap::from_triples([("voodoo", "glide", "false"), ("glide", "glide", "true")]);
        fold_glide(&mut map);
        assert_eq!(map.get("voodoo", "glide"), Some("false"));
    }

    #[test]
    fn layers_apply_in_precedence_order() {
        let schemas = SchemaSet::builtin();
        let defaults = SettingsMap::from_triples([("dosbox", "memsize", "16"), ("cpu", "core", "auto")]);
        // Preset written by the legacy launcher: cpu lives at section 6.
        let preset = parse("ver.21.01.01\n6|0|normal\n7|3|32\n");
        // Game override written by the current launcher: cpu lives at section 8.
        let game = parse("ver.22.02.02\n7|3|64\n");

        let resolved = resolve_layers(&defaults, &[&preset, &game], schemas);
        assert_eq!(resolved.get("cpu", "core"), Some("normal"));
        assert_eq!(resolved.get("dosbox", "memsize"), Some("64"));
    }

    #[test]
    fn flatten_joins_with_underscore() {
        let map = SettingsMap::from_triples([("dosbox", "memsize", "256"), ("voodoo", "voodoo_card", "auto")]);
        let flat = map.flatten();
        assert_eq!(flat.get("dosbox_memsize").map(String::as_str), Some("256"));
        assert_eq!(flat.get("voodoo_voodoo_card").map(String::as_str), Some("auto"));
    }

    #[test]
    fn pseudo_sections() {
        for name in ["default", "win9x", "pcem", "separator", "glide", "Win9x"] {
            assert!(is_pseudo_section(name), "{}", name);
        }
        assert!(!is_pseudo_section("dosbox"));
        assert!(!is_pseudo_section("voodoo"));
    }
}
