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

    core::assembler.rs

    Assembly of the final emulator configuration document.

*/

use crate::settings::{is_pseudo_section, SettingsMap};

pub const AUTOEXEC_SECTION: &str = "autoexec";

fn push_line_block(doc: &mut String, text: &str) {
    doc.push_str(text);
    if !text.is_empty() && !text.ends_with('\n') {
        doc.push('\n');
    }
}

fn push_autoexec(doc: &mut String, autoexec: &str) {
    doc.push('[');
    doc.push_str(AUTOEXEC_SECTION);
    doc.push_str("]\n");
    push_line_block(doc, autoexec);
}

/// Return the section name if `line` is a `[section]` header.
fn section_header(line: &str) -> Option<&str> {
    let line = line.trim();
    line.strip_prefix('[')?.strip_suffix(']').map(|name| name.trim())
}

/// Serialize a settings map into a configuration document. Pseudo-sections are skipped, and the
/// boot script is written verbatim as the final `[autoexec]` section. An empty header is omitted.
pub fn assemble(map: &SettingsMap, autoexec: &str, header: Option<&str>) -> String {
    let mut doc = String::with_capacity(2048);

    if let Some(header) = header.filter(|h| !h.is_empty()) {
        push_line_block(&mut doc, header);
        doc.push('\n');
    }

    for (name, keys) in map.sections() {
        if is_pseudo_section(name) || name.eq_ignore_ascii_case(AUTOEXEC_SECTION) {
            log::trace!("assemble(): skipping section [{}]", name);
            continue;
        }
        doc.push('[');
        doc.push_str(name);
        doc.push_str("]\n");
        for (key, value) in keys.iter() {
            doc.push_str(key);
            doc.push('=');
            doc.push_str(value);
            doc.push('\n');
        }
        doc.push('\n');
    }

    push_autoexec(&mut doc, autoexec);
    doc
}

/// Remove whole sections (header through the line before the next header) for which `drop`
/// returns true.
pub fn strip_sections<F>(text: &str, drop: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut out = String::with_capacity(text.len());
    let mut dropping = false;

    for line in text.split_inclusive('\n') {
        if let Some(name) = section_header(line) {
            dropping = drop(name);
            if dropping {
                log::trace!("strip_sections(): dropping section [{}]", name);
            }
        }
        if !dropping {
            out.push_str(line);
        }
    }
    out
}

/// Combine a rendered template with the boot script. Any `[autoexec]` or pseudo-section the
/// template carries is removed first.
pub fn assemble_rendered(rendered: &str, autoexec: &str, header: Option<&str>) -> String {
    let body = strip_sections(rendered, |name| {
        is_pseudo_section(name) || name.eq_ignore_ascii_case(AUTOEXEC_SECTION)
    });

    let mut doc = String::with_capacity(body.len() + autoexec.len() + 64);
    if let Some(header) = header.filter(|h| !h.is_empty()) {
        push_line_block(&mut doc, header);
        doc.push('\n');
    }

    let body = body.trim_end();
    if !body.is_empty() {
        doc.push_str(body);
        doc.push_str("\n\n");
    }

    push_autoexec(&mut doc, autoexec);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pseudo_sections_are_not_emitted() {
        let map = SettingsMap::from_triples([("default", "version", "x"), ("dosbox", "memsize", "16")]);
        let doc = assemble(&map, "exit\n", None);

        assert!(!doc.contains("[default]"));
        assert!(doc.contains("[dosbox]"));
        assert!(doc.ends_with("[autoexec]\nexit\n"));
        assert_eq!(doc, "[dosbox]\nmemsize=16\n\n[autoexec]\nexit\n");
    }

    #[test]
    fn sections_follow_map_order() {
        let map = SettingsMap::from_triples([
            ("sdl", "fullscreen", "false"),
            ("win9x", "resolution", "800x16"),
            ("cpu", "core", "dynamic"),
            ("cpu", "cycles", "max"),
            ("glide", "glide", "true"),
            ("separator", "line", "-"),
            ("pcem", "machine", "p55t2p4"),
        ]);
        let doc = assemble(&map, "", Some("# generated"));
        assert_eq!(
            doc,
            "# generated\n\n[sdl]\nfullscreen=false\n\n[cpu]\ncore=dynamic\ncycles=max\n\n[autoexec]\n"
        );
    }

    #[test]
    fn autoexec_gets_trailing_newline() {
        let doc = assemble(&SettingsMap::new(), "mount c .\nc:", None);
        assert_eq!(doc, "[autoexec]\nmount c .\nc:\n");
    }

    #[test]
    fn empty_header_is_omitted() {
        let map = SettingsMap::from_triples([("dosbox", "memsize", "16")]);
        assert_eq!(assemble(&map, "exit\n", Some("")), assemble(&map, "exit\n", None));
        assert!(assemble(&map, "exit\n", Some("")).starts_with("[dosbox]\n"));
        assert!(assemble_rendered("[cpu]\ncore=auto\n", "exit\n", Some("")).starts_with("[cpu]\n"));
    }

    #[test]
    fn rendered_template_autoexec_is_replaced() {
        let rendered = "[cpu]\ncore=auto\n\n[autoexec]\nold line\n\n[win9x]\nddraw=true\n\n[dos]\nems=true\n";
        let doc = assemble_rendered(rendered, "boot c:\n", Some("# hdr\n"));
        assert_eq!(doc, "# hdr\n\n[cpu]\ncore=auto\n\n[dos]\nems=true\n\n[autoexec]\nboot c:\n");
    }

    #[test]
    fn strip_keeps_leading_comments() {
        let text = "# top\n[glide]\nglide=true\n[sdl]\noutput=opengl\n";
        assert_eq!(strip_sections(text, |n| n == "glide"), "# top\n[sdl]\noutput=opengl\n");
    }
}
