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

    core::regpatch.rs

    REGEDIT4 patch generation for Windows 9x guests.

*/

//! The boot script copies the patch to `c:\windows\display.reg`; guest images merge it with
//! `regedit /s` on startup.
//! Windows' registry editor expects CRLF line endings.

use std::fmt::Write;

use crate::win9x::{MidiDriver, Win9xDisplaySettings};

pub const REGEDIT_HEADER: &str = "REGEDIT4";
const CRLF: &str = "\r\n";

const DISPLAY_CLASS_KEY: &str = r"HKEY_LOCAL_MACHINE\System\CurrentControlSet\Services\Class\Display\0000\DEFAULT";
const DISPLAY_CONFIG_KEY: &str = r"HKEY_LOCAL_MACHINE\Config\0001\Display\Settings";
const DIRECTDRAW_KEY: &str = r"HKEY_LOCAL_MACHINE\Software\Microsoft\DirectDraw";
const DIRECT3D_KEY: &str = r"HKEY_LOCAL_MACHINE\Software\Microsoft\Direct3D\Drivers";
const GLIDE_KEY: &str = r"HKEY_LOCAL_MACHINE\Software\3Dfx Interactive\Voodoo\Glide";
const MIDIMAP_KEY: &str = r"HKEY_CURRENT_USER\Software\Microsoft\Windows\CurrentVersion\Multimedia\MIDIMap";
const MIXER_KEY: &str = r"HKEY_CURRENT_USER\Software\Microsoft\Windows\CurrentVersion\Multimedia\Audio\Mixer";

fn midi_instrument(driver: MidiDriver) -> &'static str {
    match driver {
        MidiDriver::Sbfm => "Creative Music Synth [220]",
        MidiDriver::Mpu401 => "MPU-401 Compatible",
    }
}

/// A minimal REGEDIT4 writer.
#[derive(Clone, Debug)]
pub struct RegPatch {
    text: String,
}

impl RegPatch {
    pub fn new() -> Self {
        let mut text = String::with_capacity(1024);
        text.push_str(REGEDIT_HEADER);
        text.push_str(CRLF);
        Self { text }
    }

    /// Open a key. Values written afterwards belong to it.
    pub fn key(&mut self, path: &str) -> &mut Self {
        let _ = write!(self.text, "{}[{}]{}", CRLF, path, CRLF);
        self
    }

    pub fn string(&mut self, name: &str, value: &str) -> &mut Self {
        let _ = write!(self.text, "\"{}\"=\"{}\"{}", escape(name), escape(value), CRLF);
        self
    }

    pub fn dword(&mut self, name: &str, value: u32) -> &mut Self {
        let _ = write!(self.text, "\"{}\"=dword:{:08x}{}", escape(name), value, CRLF);
        self
    }

    pub fn build(&self) -> String {
        let mut text = self.text.clone();
        text.push_str(CRLF);
        text
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', r"\\").replace('"', "\\\"")
}

/// Build the display/audio patch for a set of guest display settings.
pub fn build_display_patch(settings: &Win9xDisplaySettings) -> String {
    let res = &settings.resolution;
    let resolution = format!("{},{}", res.width, res.height);
    let bpp = res.bits_per_pixel.to_string();
    let volume = |v: u8| u32::from(v) * 0x101;

    let mut patch = RegPatch::new();
    patch
        .key(DISPLAY_CLASS_KEY)
        .string("Resolution", &resolution)
        .string("BitsPerPixel", &bpp)
        .key(DISPLAY_CONFIG_KEY)
        .string("Resolution", &resolution)
        .string("BitsPerPixel", &bpp)
        .key(DIRECTDRAW_KEY)
        .dword("EmulationOnly", u32::from(!settings.ddraw))
        .key(DIRECT3D_KEY)
        .dword("SoftwareOnly", u32::from(!settings.d3d))
        .key(GLIDE_KEY)
        .dword("Enable", u32::from(settings.three_dfx))
        .key(MIDIMAP_KEY)
        .string("CurrentInstrument", midi_instrument(settings.midi_driver))
        .dword("UseScheme", 0)
        .dword("AutoScheme", 0)
        .key(MIXER_KEY)
        .dword("Master", volume(settings.volumes.master))
        .dword("Wave", volume(settings.volumes.wave))
        .dword("Midi", volume(settings.volumes.midi))
        .dword("CD", volume(settings.volumes.cd));

    patch.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::win9x::{parse_9x_resolution, Volumes};

    #[test]
    fn default_patch_layout() {
        let patch = build_display_patch(&Win9xDisplaySettings::default());
        assert!(patch.starts_with("REGEDIT4\r\n\r\n[HKEY_LOCAL_MACHINE\\System\\"));
        assert!(patch.contains("\"Resolution\"=\"640,480\"\r\n\"BitsPerPixel\"=\"8\"\r\n"));
        assert!(patch.contains("\"EmulationOnly\"=dword:00000000\r\n"));
        assert!(patch.contains("\"SoftwareOnly\"=dword:00000000\r\n"));
        assert!(patch.contains("\"Enable\"=dword:00000001\r\n"));
        assert!(patch.contains("\"CurrentInstrument\"=\"Creative Music Synth [220]\""));
        assert!(patch.contains("\"Master\"=dword:0000ffff\r\n"));
        assert!(patch.contains("\"CD\"=dword:00008080\r\n"));
        assert!(patch.ends_with("\r\n\r\n"));
        assert!(!patch.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn disabled_acceleration_and_mpu() {
        let settings = Win9xDisplaySettings {
            resolution: parse_9x_resolution("1024x16"),
            ddraw: false,
            d3d: false,
            three_dfx: false,
            midi_driver: MidiDriver::Mpu401,
            volumes: Volumes {
                master: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        let patch = build_display_patch(&settings);
        assert_eq!(patch.matches("\"Resolution\"=\"1024,768\"").count(), 2);
        assert!(patch.contains("\"EmulationOnly\"=dword:00000001"));
        assert!(patch.contains("\"SoftwareOnly\"=dword:00000001"));
        assert!(patch.contains("\"Enable\"=dword:00000000"));
        assert!(patch.contains("MPU-401 Compatible"));
        assert!(patch.contains("\"Master\"=dword:00000000"));
    }

    #[test]
    fn strings_are_escaped() {
        let mut patch = RegPatch::new();
        patch.key(r"HKEY_CURRENT_USER\Test").string("Path", r#"C:\GAMES\"X""#);
        assert!(patch.build().contains(r#""Path"="C:\\GAMES\\\"X\"""#));
    }
}
