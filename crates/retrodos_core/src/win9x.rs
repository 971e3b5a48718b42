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

    core::win9x.rs

    Guest display and audio settings for Windows 9x titles.

*/

//! The `win9x` pseudo-section never reaches the emulator configuration. Its slots describe the
//! guest's display mode, DirectX/3dfx acceleration, MIDI driver and mixer volumes, and are turned
//! into a registry patch by [regpatch](crate::regpatch).
//!
//! Files written by the legacy launcher store the resolution at `21|1`, inside the voodoo page. The
//! legacy schema table leaves that address unmapped, so the resolver reads it here before any
//! schema lookup.

use std::fmt::{self, Display};

use serde_derive::Deserialize;
use strum_macros::{Display as StrumDisplay, EnumIter};

use crate::{
    entry::OverrideEntry,
    schema::{SchemaSet, SchemaVersion},
    settings::SettingsMap,
};

pub const WIN9X_SECTION: &str = "win9x";

/// Where legacy override files keep the Win9x resolution.
pub const LEGACY_RESOLUTION_ADDRESS: (u32, u32) = (21, 1);

/// The keys of the `win9x` section the resolver honours. Anything else in the section is ignored.
pub const WIN9X_SLOTS: &[&str] = &[
    "resolution",
    "ddraw",
    "d3d",
    "3dfx",
    "midi",
    "vol_master",
    "vol_wave",
    "vol_midi",
    "vol_cd",
];

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;
pub const DEFAULT_BPP: u32 = 8;

/// How to derive the height for a 1280 pixel wide mode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum HeightVariant {
    /// 1280x1024
    #[default]
    Standard,
    /// 1280x960
    FourThree,
}

/// Derive the height of a display mode from its width. Unknown widths get 480.
pub fn height_for_width(width: u32, variant: HeightVariant) -> u32 {
    match width {
        640 => 480,
        800 => 600,
        1024 => 768,
        1152 => 864,
        1280 => match variant {
            HeightVariant::Standard => 1024,
            HeightVariant::FourThree => 960,
        },
        1600 => 1200,
        _ => DEFAULT_HEIGHT,
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u32,
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            bits_per_pixel: DEFAULT_BPP,
        }
    }
}

impl Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.bits_per_pixel)
    }
}

/// Parse a `{width}x{bpp}` resolution string with the standard height table.
pub fn parse_9x_resolution(value: &str) -> Resolution {
    parse_9x_resolution_with(value, HeightVariant::Standard)
}

/// Parse a `{width}x{bpp}` resolution string. A three-part `{width}x{height}x{bpp}` string is also
/// accepted. Anything else yields the 640x480x8 default.
pub fn parse_9x_resolution_with(value: &str, variant: HeightVariant) -> Resolution {
    let lowered = value.trim().to_ascii_lowercase();
    let parts: Vec<Option<u32>> = lowered.split('x').map(|p| p.trim().parse::<u32>().ok()).collect();

    let (width, height, bpp) = match parts.as_slice() {
        [Some(w), Some(b)] => (*w, height_for_width(*w, variant), *b),
        [Some(w), Some(h), Some(b)] => (*w, *h, *b),
        _ => {
            log::debug!("parse_9x_resolution(): unrecognized resolution {:?}, using default", value);
            return Resolution::default();
        }
    };

    if width == 0 || height == 0 || bpp == 0 || bpp > 32 {
        log::debug!("parse_9x_resolution(): out of range resolution {:?}, using default", value);
        return Resolution::default();
    }

    Resolution {
        width,
        height,
        bits_per_pixel: bpp,
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, StrumDisplay, EnumIter)]
pub enum MidiDriver {
    #[default]
    #[strum(serialize = "SB FM")]
    Sbfm,
    #[strum(serialize = "MPU-401")]
    Mpu401,
}

impl MidiDriver {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sbfm" | "fm" | "sb" | "0" => Some(MidiDriver::Sbfm),
            "mpu401" | "mpu" | "mpu-401" | "1" => Some(MidiDriver::Mpu401),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Volumes {
    pub master: u8,
    pub wave: u8,
    pub midi: u8,
    pub cd: u8,
}

impl Default for Volumes {
    fn default() -> Self {
        Self {
            master: 255,
            wave: 255,
            midi: 255,
            cd: 128,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") || value == "1" {
        Some(true)
    }
    else if value.eq_ignore_ascii_case("false") || value == "0" {
        Some(false)
    }
    else {
        None
    }
}

fn parse_volume(value: &str) -> Option<u8> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .map(|v| v.clamp(0, u8::MAX as i64) as u8)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Win9xDisplaySettings {
    pub resolution: Resolution,
    pub ddraw: bool,
    pub d3d: bool,
    pub three_dfx: bool,
    pub midi_driver: MidiDriver,
    pub volumes: Volumes,
    pub height_variant: HeightVariant,
}

impl Default for Win9xDisplaySettings {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            ddraw: true,
            d3d: true,
            three_dfx: true,
            midi_driver: MidiDriver::default(),
            volumes: Volumes::default(),
            height_variant: HeightVariant::default(),
        }
    }
}

impl Win9xDisplaySettings {
    pub fn with_height_variant(variant: HeightVariant) -> Self {
        Self {
            height_variant: variant,
            ..Default::default()
        }
    }

    /// Apply one `win9x` slot. Returns false if `key` is not a slot or `value` can't be used, in
    /// which case nothing changes.
    pub fn apply_slot(&mut self, key: &str, value: &str) -> bool {
        match key {
            "resolution" => {
                self.resolution = parse_9x_resolution_with(value, self.height_variant);
                true
            }
            "ddraw" => apply_value(&mut self.ddraw, parse_flag(value)),
            "d3d" => apply_value(&mut self.d3d, parse_flag(value)),
            "3dfx" => apply_value(&mut self.three_dfx, parse_flag(value)),
            "midi" => apply_value(&mut self.midi_driver, MidiDriver::parse(value)),
            "vol_master" => apply_value(&mut self.volumes.master, parse_volume(value)),
            "vol_wave" => apply_value(&mut self.volumes.wave, parse_volume(value)),
            "vol_midi" => apply_value(&mut self.volumes.midi, parse_volume(value)),
            "vol_cd" => apply_value(&mut self.volumes.cd, parse_volume(value)),
            _ => false,
        }
    }

    /// Apply the `win9x` slots present in a resolved settings map.
    pub fn apply_settings(&mut self, map: &SettingsMap) {
        for slot in WIN9X_SLOTS {
            if let Some(value) = map.get(WIN9X_SECTION, slot) {
                self.apply_slot(slot, value);
            }
        }
    }

    /// Apply the `win9x` slots addressed by raw override entries, in order.
    pub fn apply_entries(&mut self, entries: &[OverrideEntry], version: SchemaVersion, schemas: &SchemaSet) {
        let registry = schemas.for_version(version);

        for entry in entries {
            if version.is_legacy() && (entry.section, entry.item) == LEGACY_RESOLUTION_ADDRESS {
                self.apply_slot("resolution", &entry.value);
                continue;
            }
            if let Some((WIN9X_SECTION, key)) = registry.lookup(entry.section, entry.item) {
                if !self.apply_slot(key, &entry.value) {
                    log::debug!(
                        "apply_entries(): ignoring win9x entry {}|{} = {:?}",
                        entry.section,
                        entry.item,
                        entry.value
                    );
                }
            }
        }
    }
}

fn apply_value<T>(target: &mut T, value: Option<T>) -> bool {
    match value {
        Some(value) => {
            *target = value;
            true
        }
        None => false,
    }
}

/// Build display settings from the defaults and a list of override entries.
pub fn extract_display_settings(
    entries: &[OverrideEntry],
    version: SchemaVersion,
    schemas: &SchemaSet,
) -> Win9xDisplaySettings {
    let mut settings = Win9xDisplaySettings::default();
    settings.apply_entries(entries, version, schemas);
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::parse;

    #[test]
    fn resolution_parsing() {
        assert_eq!(
            parse_9x_resolution("800x16"),
            Resolution {
                width: 800,
                height: 600,
                bits_per_pixel: 16
            }
        );
        assert_eq!(parse_9x_resolution("garbage"), Resolution::default());
        assert_eq!(parse_9x_resolution(""), Resolution::default());
        assert_eq!(parse_9x_resolution("800x"), Resolution::default());
        assert_eq!(parse_9x_resolution("0x16"), Resolution::default());
        assert_eq!(parse_9x_resolution("1024X32").to_string(), "1024x768x32");
        assert_eq!(parse_9x_resolution("720x8").to_string(), "720x480x8");
        assert_eq!(parse_9x_resolution("800x600x24").to_string(), "800x600x24");
    }

    #[test]
    fn height_table_variants() {
        assert_eq!(height_for_width(1152, HeightVariant::Standard), 864);
        assert_eq!(height_for_width(1280, HeightVariant::Standard), 1024);
        assert_eq!(height_for_width(1280, HeightVariant::FourThree), 960);
        assert_eq!(height_for_width(1600, HeightVariant::FourThree), 1200);
        assert_eq!(parse_9x_resolution_with("1280x16", HeightVariant::FourThree).height, 960);
    }

    #[test]
    fn defaults() {
        let settings = Win9xDisplaySettings::default();
        assert_eq!(settings.resolution.to_string(), "640x480x8");
        assert!(settings.ddraw && settings.d3d && settings.three_dfx);
        assert_eq!(settings.midi_driver, MidiDriver::Sbfm);
        assert_eq!(settings.volumes.master, 255);
        assert_eq!(settings.volumes.cd, 128);
    }

    #[test]
    fn current_schema_slots() {
        let parsed = parse("ver.22.04.01\n20|0|1024x16\n20|1|false\n20|4|mpu401\n20|8|300\n20|5|-4\n21|1|true\n");
        let settings = extract_display_settings(&parsed.entries, parsed.schema_version(), SchemaSet::builtin());

        assert_eq!(settings.resolution.to_string(), "1024x768x16");
        assert!(!settings.ddraw);
        assert!(settings.d3d);
        assert_eq!(settings.midi_driver, MidiDriver::Mpu401);
        assert_eq!(settings.volumes.cd, 255);
        assert_eq!(settings.volumes.master, 0);
    }

    #[test]
    fn legacy_resolution_alias() {
        let parsed = parse("ver.21.08.01\n21|1|800x16\n16|0|false\n");
        let settings = extract_display_settings(&parsed.entries, parsed.schema_version(), SchemaSet::builtin());
        assert_eq!(settings.resolution.to_string(), "800x600x16");
        assert!(!settings.ddraw);
    }

    #[test]
    fn alias_address_is_voodoo_under_current() {
        let parsed = parse("ver.22.04.01\n21|1|800x16\n");
        let settings = extract_display_settings(&parsed.entries, parsed.schema_version(), SchemaSet::builtin());
        assert_eq!(settings.resolution, Resolution::default());
    }

    #[test]
    fn unusable_values_keep_previous() {
        let mut settings = Win9xDisplaySettings::default();
        assert!(!settings.apply_slot("d3d", "maybe"));
        assert!(!settings.apply_slot("midi", "gm"));
        assert!(!settings.apply_slot("vol_wave", "loud"));
        assert!(!settings.apply_slot("colour", "blue"));
        assert_eq!(settings, Win9xDisplaySettings::default());
    }

    #[test]
    fn apply_settings_reads_only_slots() {
        let map = SettingsMap::from_triples([
            ("win9x", "resolution", "1280x32"),
            ("win9x", "3dfx", "FALSE"),
            ("win9x", "wallpaper", "clouds"),
            ("dosbox", "ddraw", "false"),
        ]);
        let mut settings = Win9xDisplaySettings::with_height_variant(HeightVariant::FourThree);
        settings.apply_settings(&map);
        assert_eq!(settings.resolution.to_string(), "1280x960x32");
        assert!(!settings.three_dfx);
        assert!(settings.ddraw);
    }
}
