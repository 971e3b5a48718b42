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

    Configuration translation core

*/

//! Translates a legacy launcher's numerically indexed override files (`edit.conf`) and
//! per-executable-type templates into emulator configuration documents, and derives the Win9x guest
//! display settings written into the registry patch.
//!
//! Everything here is synchronous and infallible. Malformed input is dropped with a log message,
//! never reported as an error.

pub mod assembler;
pub mod defaults;
pub mod entry;
pub mod pipeline;
pub mod regpatch;
pub mod schema;
pub mod settings;
pub mod template;
pub mod win9x;

pub use assembler::{assemble, assemble_rendered};
pub use defaults::{DefaultTable, PlatformFamily};
pub use entry::{parse, parse_version, OverrideEntry, ParsedOverride};
pub use pipeline::{translate, translate_with, TranslationRequest, TranslationResult};
pub use schema::{SchemaRegistry, SchemaSet, SchemaVersion};
pub use settings::{merge, resolve, resolve_layers, SettingsMap};
pub use template::{render, render_report, TemplateKind};
pub use win9x::{extract_display_settings, parse_9x_resolution, Win9xDisplaySettings};
