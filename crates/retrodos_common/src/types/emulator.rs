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

   common::types::emulator.rs

   Emulator kinds a generated configuration can target.
*/

use std::fmt::Display;

use serde::Deserialize;

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum EmulatorKind {
    #[default]
    DosBox,
    DosBoxX,
}

impl EmulatorKind {
    /// The executable name searched for on the host when no explicit path is configured.
    pub fn default_binary(&self) -> &'static str {
        match self {
            EmulatorKind::DosBox => "dosbox",
            EmulatorKind::DosBoxX => "dosbox-x",
        }
    }
}

impl Display for EmulatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmulatorKind::DosBox => write!(f, "DOSBox"),
            EmulatorKind::DosBoxX => write!(f, "DOSBox-X"),
        }
    }
}
