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

    lib.rs

    Frontend common library

*/

//! Facilities shared by retrodos front ends.
//!
//! - ResourceManager: resolves named resource directories (presets, templates, output) and
//!     performs the file reads and writes.
//! - PresetManager: loads bundled preset override files and resolves preset references.
//! - TemplateManager: supplies template text, preferring on-disk overrides to compiled-in text.
//! - GameDir: reads a game directory's descriptor and override file.
//! - BootScript: builds the boot script placed in the `[autoexec]` section.

pub mod boot_script;
pub mod game;
pub mod preset_manager;
pub mod resource_manager;
pub mod template_manager;

pub use boot_script::{BootScript, MountKind, MountOption};
pub use game::{GameDescriptor, GameDir};
pub use preset_manager::PresetManager;
pub use resource_manager::ResourceManager;
pub use template_manager::TemplateManager;
