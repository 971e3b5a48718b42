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

    core::template::mod.rs

    Configuration templates and @token@ substitution.

*/

//! A template is a configuration document skeleton containing `@name@` placeholders. Token names use
//! the flattened `section_key` form produced by [SettingsMap::flatten](crate::settings::SettingsMap::flatten).
//!
//! Each token is resolved from the supplied values first, then from the default table (only if the
//! default is non-empty). Tokens that resolve to nothing are replaced by an empty string and logged.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use retrodos_common::EmulatorKind;
use serde_derive::Deserialize;
use strum_macros::{Display, EnumIter};

use crate::defaults::PlatformFamily;

lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new(r"@([^@]+)@").unwrap();
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, Deserialize)]
pub enum TemplateKind {
    Win98Korean,
    Win98,
    Win95,
    Win31,
    DosKorean,
    DosBoxX,
    #[default]
    Base,
}

impl TemplateKind {
    /// Choose a template for an executable-type identifier. Rules are case-insensitive substring
    /// matches evaluated in order; anything unmatched uses [TemplateKind::Base].
    pub fn select(exe_type: &str) -> Self {
        let id = exe_type.to_ascii_lowercase();
        let korean = id.contains("kor") || id.contains("ko_") || id.contains("-ko") || id.ends_with("_ko");

        if id.contains("98") && korean {
            TemplateKind::Win98Korean
        }
        else if id.contains("98") || id.contains("win9x") {
            TemplateKind::Win98
        }
        else if id.contains("95") {
            TemplateKind::Win95
        }
        else if id.contains("win31") || id.contains("win3.1") || id.contains("wfw") {
            TemplateKind::Win31
        }
        else if id.contains("kor") || id.contains("han") {
            TemplateKind::DosKorean
        }
        else if id.contains("dosbox-x") || id.contains("dosbox_x") || id.contains("dbx") {
            TemplateKind::DosBoxX
        }
        else {
            TemplateKind::Base
        }
    }

    pub fn family(&self) -> PlatformFamily {
        match self {
            TemplateKind::Win98Korean | TemplateKind::Win98 | TemplateKind::Win95 => PlatformFamily::Win9x,
            TemplateKind::Win31 => PlatformFamily::Win31,
            TemplateKind::DosKorean | TemplateKind::DosBoxX | TemplateKind::Base => PlatformFamily::Dos,
        }
    }

    /// The emulator the template was written for.
    pub fn emulator(&self) -> EmulatorKind {
        match self {
            TemplateKind::Base => EmulatorKind::DosBox,
            _ => EmulatorKind::DosBoxX,
        }
    }

    /// File name used for on-disk template overrides.
    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateKind::Win98Korean => "win98_kor.conf",
            TemplateKind::Win98 => "win98.conf",
            TemplateKind::Win95 => "win95.conf",
            TemplateKind::Win31 => "win31.conf",
            TemplateKind::DosKorean => "dos_kor.conf",
            TemplateKind::DosBoxX => "dosbox_x.conf",
            TemplateKind::Base => "base.conf",
        }
    }

    pub fn builtin_text(&self) -> &'static str {
        match self {
            TemplateKind::Win98Korean => include_str!("builtin/win98_kor.conf"),
            TemplateKind::Win98 => include_str!("builtin/win98.conf"),
            TemplateKind::Win95 => include_str!("builtin/win95.conf"),
            TemplateKind::Win31 => include_str!("builtin/win31.conf"),
            TemplateKind::DosKorean => include_str!("builtin/dos_kor.conf"),
            TemplateKind::DosBoxX => include_str!("builtin/dosbox_x.conf"),
            TemplateKind::Base => include_str!("builtin/base.conf"),
        }
    }
}

/// Output of [render_report]: the rendered text and every token that had no value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOutput {
    pub text: String,
    pub unresolved: Vec<String>,
}

/// Return the distinct token names used by a template, in order of first appearance.
pub fn tokens(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in TOKEN_RE.captures_iter(template) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Substitute every `@token@` in `template`.
pub fn render(template: &str, values: &IndexMap<String, String>, defaults: &IndexMap<String, String>) -> String {
    render_report(template, values, defaults).text
}

/// Substitute every `@token@` in `template`, also reporting unresolved tokens.
pub fn render_report(
    template: &str,
    values: &IndexMap<String, String>,
    defaults: &IndexMap<String, String>,
) -> RenderOutput {
    let mut unresolved: Vec<String> = Vec::new();

    let text = TOKEN_RE.replace_all(template, |caps: &Captures| {
        let name = &caps[1];
        if let Some(value) = values.get(name) {
            return value.clone();
        }
        match defaults.get(name) {
            Some(value) if !value.is_empty() => value.clone(),
            _ => {
                log::warn!("render(): unresolved template token @{}@, substituting empty string", name);
                unresolved.push(name.to_string());
                String::new()
            }
        }
    });

    RenderOutput {
        text: text.into_owned(),
        unresolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::DefaultTable;
    use strum::IntoEnumIterator;

    fn map(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn substitutes_values_then_defaults() {
        let out = render(
            "memsize=@dosbox_memsize@\ncore=@cpu_core@",
            &map(&[("dosbox_memsize", "256")]),
            &map(&[("cpu_core", "auto")]),
        );
        assert_eq!(out, "memsize=256\ncore=auto");
    }

    #[test]
    fn values_shadow_defaults() {
        let out = render(
            "cycles=@cpu_cycles@",
            &map(&[("cpu_cycles", "max")]),
            &map(&[("cpu_cycles", "auto")]),
        );
        assert_eq!(out, "cycles=max");
    }

    #[test]
    fn explicit_empty_value_is_used() {
        let out = render("x=@sdl_mapperfile@;", &map(&[("sdl_mapperfile", "")]), &map(&[("sdl_mapperfile", "m.map")]));
        assert_eq!(out, "x=;");
    }

    #[test]
    fn unresolved_tokens_become_empty() {
        let out = render_report(
            "a=@missing@\nb=@blank_default@\nc=@missing@",
            &IndexMap::new(),
            &map(&[("blank_default", "")]),
        );
        assert_eq!(out.text, "a=\nb=\nc=");
        assert_eq!(out.unresolved, vec!["missing", "blank_default", "missing"]);
    }

    #[test]
    fn text_without_tokens_is_untouched() {
        let text = "# mail me at someone@example.com\n[dosbox]\nmemsize=16\n";
        assert_eq!(render(text, &IndexMap::new(), &IndexMap::new()), text);
    }

    #[test]
    fn tokens_may_span_lines() {
        let text = "@a\nb@";
        assert_eq!(tokens(text), vec!["a\nb".to_string()]);

        let mut values = IndexMap::new();
        values.insert("a\nb".to_string(), "X".to_string());
        assert_eq!(render(text, &values, &IndexMap::new()), "X");
        assert_eq!(render("x@a\nb@y", &IndexMap::new(), &IndexMap::new()), "xy");
    }

    #[test]
    fn select_is_total_and_ordered() {
        assert_eq!(TemplateKind::select("Win98_KOR_DOSBox-X"), TemplateKind::Win98Korean);
        assert_eq!(TemplateKind::select("win98_ko"), TemplateKind::Win98Korean);
        assert_eq!(TemplateKind::select("WIN98"), TemplateKind::Win98);
        assert_eq!(TemplateKind::select("win9x_generic"), TemplateKind::Win98);
        assert_eq!(TemplateKind::select("Win95_OSR2"), TemplateKind::Win95);
        assert_eq!(TemplateKind::select("win3.1"), TemplateKind::Win31);
        assert_eq!(TemplateKind::select("dos_kor"), TemplateKind::DosKorean);
        assert_eq!(TemplateKind::select("hangul_dos"), TemplateKind::DosKorean);
        assert_eq!(TemplateKind::select("DOSBox-X"), TemplateKind::DosBoxX);
        assert_eq!(TemplateKind::select("dos"), TemplateKind::Base);
        assert_eq!(TemplateKind::select(""), TemplateKind::Base);
        assert_eq!(TemplateKind::select("@@\u{1F47E}"), TemplateKind::Base);
    }

    #[test]
    fn builtin_templates_resolve_against_their_defaults() {
        for kind in TemplateKind::iter() {
            let defaults = DefaultTable::builtin(kind.family());
            let out = render_report(kind.builtin_text(), &IndexMap::new(), defaults.flat());
            assert!(out.unresolved.is_empty(), "{}: unresolved {:?}", kind, out.unresolved);
            assert!(!out.text.contains('@'), "{}", kind);
        }
    }

    #[test]
    fn builtin_templates_do_not_emit_pseudo_sections() {
        for kind in TemplateKind::iter() {
            let text = kind.builtin_text();
            for pseudo in crate::settings::PSEUDO_SECTIONS {
                assert!(!text.contains(&format!("[{}]", pseudo)), "{} contains [{}]", kind, pseudo);
            }
        }
    }
}
