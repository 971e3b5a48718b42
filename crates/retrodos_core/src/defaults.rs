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

    core::defaults.rs

    Compiled-in default settings for each guest platform family.

*/

//! Default tables are the lowest-precedence settings layer. They are also the fallback source for
//! template tokens that neither the preset nor the game override supplies.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use retrodos_common::RetroHashMap;
use serde_derive::Deserialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::{
    settings::{merge, SettingsMap},
    template::TemplateKind,
};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, Deserialize)]
pub enum PlatformFamily {
    #[default]
    Dos,
    Win31,
    Win9x,
}

impl PlatformFamily {
    /// Classify an executable-type identifier. Never fails.
    pub fn from_exe_type(exe_type: &str) -> Self {
        TemplateKind::select(exe_type).family()
    }

    pub fn is_win9x(&self) -> bool {
        matches!(self, PlatformFamily::Win9x)
    }
}

type DefaultTriple = (&'static str, &'static str, &'static str);

static BASE_DEFAULTS: &[DefaultTriple] = &[
    ("sdl", "fullscreen", "false"),
    ("sdl", "fulldouble", "false"),
    ("sdl", "fullresolution", "desktop"),
    ("sdl", "windowresolution", "original"),
    ("sdl", "output", "opengl"),
    ("sdl", "autolock", "true"),
    ("sdl", "sensitivity", "100"),
    ("render", "frameskip", "0"),
    ("render", "aspect", "true"),
    ("render", "scaler", "normal2x"),
    ("dosbox", "machine", "svga_s3"),
    ("dosbox", "captures", "capture"),
    ("dosbox", "memsize", "16"),
    ("dos", "xms", "true"),
    ("dos", "ems", "true"),
    ("dos", "umb", "true"),
    ("dos", "ver", "5.0"),
    ("dos", "keyboardlayout", "auto"),
    ("dos", "lfn", "auto"),
    ("video", "vmemsize", "-1"),
    ("cpu", "core", "auto"),
    ("cpu", "cputype", "auto"),
    ("cpu", "cycles", "auto"),
    ("cpu", "cycleup", "10"),
    ("cpu", "cycledown", "20"),
    ("mixer", "nosound", "false"),
    ("mixer", "rate", "44100"),
    ("mixer", "blocksize", "1024"),
    ("mixer", "prebuffer", "25"),
    ("midi", "mpu401", "intelligent"),
    ("midi", "mididevice", "default"),
    ("sblaster", "sbtype", "sb16"),
    ("sblaster", "sbbase", "220"),
    ("sblaster", "irq", "7"),
    ("sblaster", "dma", "1"),
    ("sblaster", "hdma", "5"),
    ("sblaster", "oplmode", "auto"),
    ("sblaster", "oplemu", "default"),
    ("sblaster", "oplrate", "44100"),
    ("gus", "gus", "false"),
    ("speaker", "pcspeaker", "true"),
    ("speaker", "pcrate", "44100"),
    ("speaker", "tandy", "auto"),
    ("speaker", "disney", "true"),
    ("joystick", "joysticktype", "auto"),
    ("joystick", "timed", "true"),
    ("joystick", "autofire", "false"),
    ("joystick", "swap34", "false"),
    ("joystick", "buttonwrap", "false"),
    ("serial", "serial1", "dummy"),
    ("serial", "serial2", "dummy"),
    ("serial", "serial3", "disabled"),
    ("serial", "serial4", "disabled"),
];

static WIN31_DEFAULTS: &[DefaultTriple] = &[
    ("dosbox", "memsize", "32"),
    ("dos", "ver", "6.22"),
    ("cpu", "core", "normal"),
    ("cpu", "cputype", "486"),
    ("cpu", "cycles", "max"),
    ("video", "vmemsize", "2"),
];

static WIN9X_DEFAULTS: &[DefaultTriple] = &[
    ("dosbox", "memsize", "64"),
    ("dos", "ver", "7.1"),
    ("dos", "lfn", "true"),
    ("cpu", "core", "dynamic"),
    ("cpu", "cputype", "pentium_mmx"),
    ("cpu", "cycles", "max"),
    ("cpu", "fpu", "true"),
    ("video", "vmemsize", "8"),
    ("pci", "voodoo", "true"),
    ("voodoo", "voodoo_card", "software"),
    ("voodoo", "voodoo_maxmem", "true"),
    ("voodoo", "glide", "true"),
    ("voodoo", "lfb", "full_noaux"),
    ("voodoo", "splash", "true"),
    ("win9x", "resolution", "640x8"),
    ("win9x", "ddraw", "true"),
    ("win9x", "d3d", "true"),
    ("win9x", "3dfx", "true"),
    ("win9x", "midi", "sbfm"),
    ("win9x", "vol_master", "255"),
    ("win9x", "vol_wave", "255"),
    ("win9x", "vol_midi", "255"),
    ("win9x", "vol_cd", "128"),
];

/// A default settings table, both nested and flattened.
#[derive(Clone, Debug)]
pub struct DefaultTable {
    family:   PlatformFamily,
    settings: SettingsMap,
    flat:     IndexMap<String, String>,
}

lazy_static! {
    static ref BUILTIN_DEFAULTS: RetroHashMap<PlatformFamily, DefaultTable> = {
        let mut map = RetroHashMap::default();
        for family in PlatformFamily::iter() {
            map.insert(family, DefaultTable::build(family));
        }
        map
    };
}

impl DefaultTable {
    fn build(family: PlatformFamily) -> Self {
        let base = SettingsMap::from_triples(BASE_DEFAULTS.iter().copied());
        let settings = match family {
            PlatformFamily::Dos => base,
            PlatformFamily::Win31 => merge(&base, &SettingsMap::from_triples(WIN31_DEFAULTS.iter().copied())),
            PlatformFamily::Win9x => merge(&base, &SettingsMap::from_triples(WIN9X_DEFAULTS.iter().copied())),
        };
        Self::from_settings(family, settings)
    }

    /// Wrap an arbitrary settings map as a default table. Used to substitute tables in tests and
    /// by frontends that load their own defaults.
    pub fn from_settings(family: PlatformFamily, settings: SettingsMap) -> Self {
        let flat = settings.flatten();
        Self { family, settings, flat }
    }

    pub fn builtin(family: PlatformFamily) -> &'static DefaultTable {
        // Every family is inserted when the table is built.
        &BUILTIN_DEFAULTS[&family]
    }

    pub fn for_exe_type(exe_type: &str) -> &'static DefaultTable {
        Self::builtin(PlatformFamily::from_exe_type(exe_type))
    }

    pub fn family(&self) -> PlatformFamily {
        self.family
    }

    pub fn settings(&self) -> &SettingsMap {
        &self.settings
    }

    /// The `section_key` form used as the template fallback table.
    pub fn flat(&self) -> &IndexMap<String, String> {
        &self.flat
    }
}
