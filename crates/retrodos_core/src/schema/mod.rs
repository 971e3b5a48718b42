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

    core::schema::mod.rs

    Versioned section/item address tables for edit.conf override files.

*/

//! The override format addresses every setting by a pair of opaque numbers, `section|item`. What a
//! pair means depends entirely on which generation of the format wrote the file; the launcher that
//! produced these files renumbered its option pages between major versions. A [SchemaRegistry] holds
//! one generation's table, and a [SchemaSet] bundles the legacy and current registries so callers can
//! pick one per file by [SchemaVersion].
//!
//! The two tables are defined independently in [legacy] and [current] and must never be derived from
//! one another.

pub mod current;
pub mod legacy;

use lazy_static::lazy_static;
use retrodos_common::RetroHashMap;
use strum_macros::{Display, EnumIter};

/// Version numbers (`YYMMDD`) at or above this value use the current table.
pub const CURRENT_SCHEMA_THRESHOLD: u32 = 220000;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SchemaVersion {
    #[default]
    #[strum(serialize = "legacy")]
    Legacy,
    #[strum(serialize = "current")]
    Current,
}

impl SchemaVersion {
    pub fn from_version_number(version: u32) -> Self {
        if version < CURRENT_SCHEMA_THRESHOLD {
            SchemaVersion::Legacy
        }
        else {
            SchemaVersion::Current
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, SchemaVersion::Legacy)
    }
}

/// A static description of one numbered section and its numbered items.
#[derive(Copy, Clone, Debug)]
pub struct SectionDef {
    pub index: u32,
    pub name:  &'static str,
    pub items: &'static [(u32, &'static str)],
}

#[derive(Debug)]
struct SectionSchema {
    name:  &'static str,
    items: RetroHashMap<u32, &'static str>,
}

/// A single generation's address table. Lookups that miss return `None`; an unknown address is
/// routine and never an error.
#[derive(Debug)]
pub struct SchemaRegistry {
    version:  SchemaVersion,
    sections: RetroHashMap<u32, SectionSchema>,
}

impl SchemaRegistry {
    pub fn from_tables(version: SchemaVersion, table: &[SectionDef]) -> Self {
        let mut sections: RetroHashMap<u32, SectionSchema> = RetroHashMap::default();

        for def in table {
            let items = def.items.iter().copied().collect::<RetroHashMap<u32, &'static str>>();
            if sections
                .insert(def.index, SectionSchema { name: def.name, items })
                .is_some()
            {
                log::warn!(
                    "from_tables(): {} schema defines section {} more than once, keeping the last definition",
                    version,
                    def.index
                );
            }
        }

        Self { version, sections }
    }

    pub fn version(&self) -> SchemaVersion {
        self.version
    }

    /// Return the section name for a section index, if the table defines one.
    pub fn section_name(&self, section: u32) -> Option<&'static str> {
        self.sections.get(&section).map(|s| s.name)
    }

    /// Return the key name for an item within a section, if the table defines one.
    pub fn key_name(&self, section: u32, item: u32) -> Option<&'static str> {
        self.sections.get(&section).and_then(|s| s.items.get(&item).copied())
    }

    /// Resolve an address to a `(section, key)` pair.
    pub fn lookup(&self, section: u32, item: u32) -> Option<(&'static str, &'static str)> {
        let schema = self.sections.get(&section)?;
        let key = schema.items.get(&item)?;
        Some((schema.name, *key))
    }

    /// Return every address defined for the named section, sorted by item index. A section name may
    /// be spread over several section indices.
    pub fn addresses_of(&self, section_name: &str) -> Vec<(u32, u32, &'static str)> {
        let mut addresses = Vec::new();
        for (section_idx, schema) in self.sections.iter() {
            if schema.name == section_name {
                for (item_idx, key) in schema.items.iter() {
                    addresses.push((*section_idx, *item_idx, *key));
                }
            }
        }
        addresses.sort_unstable_by_key(|(s, i, _)| (*s, *i));
        addresses
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}

/// The pair of registries a resolver chooses from.
#[derive(Debug)]
pub struct SchemaSet {
    legacy:  SchemaRegistry,
    current: SchemaRegistry,
}

lazy_static! {
    static ref BUILTIN_SCHEMAS: SchemaSet = SchemaSet::new(
        SchemaRegistry::from_tables(SchemaVersion::Legacy, legacy::SECTIONS),
        SchemaRegistry::from_tables(SchemaVersion::Current, current::SECTIONS),
    );
}

impl SchemaSet {
    pub fn new(legacy: SchemaRegistry, current: SchemaRegistry) -> Self {
        Self { legacy, current }
    }

    /// The compiled-in tables, built on first use.
    pub fn builtin() -> &'static SchemaSet {
        &BUILTIN_SCHEMAS
    }

    pub fn for_version(&self, version: SchemaVersion) -> &SchemaRegistry {
        match version {
            SchemaVersion::Legacy => &self.legacy,
            SchemaVersion::Current => &self.current,
        }
    }
}
