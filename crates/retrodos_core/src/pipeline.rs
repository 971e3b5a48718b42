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

    core::pipeline.rs

    Drives a full translation: layered settings resolution, template or direct
    document assembly, and Win9x display settings.

*/

use indexmap::IndexMap;

use crate::{
    assembler::{assemble, assemble_rendered},
    defaults::{DefaultTable, PlatformFamily},
    entry::ParsedOverride,
    schema::SchemaSet,
    settings::{merge, resolve_layers, resolve_parsed, SettingsMap},
    template::{render_report, TemplateKind},
    win9x::{HeightVariant, Win9xDisplaySettings},
};

/// Everything needed to produce one configuration document.
#[derive(Clone, Debug)]
pub struct TranslationRequest<'a> {
    pub exe_type: &'a str,
    pub preset: Option<&'a ParsedOverride>,
    pub game: Option<&'a ParsedOverride>,
    /// Template text. When set, the document is rendered from the template instead of being
    /// assembled from the settings map.
    pub template: Option<&'a str>,
    pub autoexec: &'a str,
    pub header: Option<&'a str>,
    pub height_variant: HeightVariant,
}

impl<'a> TranslationRequest<'a> {
    pub fn new(exe_type: &'a str) -> Self {
        Self {
            exe_type,
            preset: None,
            game: None,
            template: None,
            autoexec: "",
            header: None,
            height_variant: HeightVariant::default(),
        }
    }

    pub fn with_preset(mut self, preset: &'a ParsedOverride) -> Self {
        self.preset = Some(preset);
        self
    }

    pub fn with_game(mut self, game: &'a ParsedOverride) -> Self {
        self.game = Some(game);
        self
    }

    pub fn with_template(mut self, template: &'a str) -> Self {
        self.template = Some(template);
        self
    }

    pub fn with_autoexec(mut self, autoexec: &'a str) -> Self {
        self.autoexec = autoexec;
        self
    }

    pub fn with_header(mut self, header: &'a str) -> Self {
        self.header = Some(header);
        self
    }

    pub fn with_height_variant(mut self, variant: HeightVariant) -> Self {
        self.height_variant = variant;
        self
    }

    pub fn template_kind(&self) -> TemplateKind {
        TemplateKind::select(self.exe_type)
    }

    pub fn family(&self) -> PlatformFamily {
        self.template_kind().family()
    }

    fn layers(&self) -> Vec<&'a ParsedOverride> {
        self.preset.iter().chain(self.game.iter()).copied().collect()
    }
}

#[derive(Clone, Debug)]
pub struct TranslationResult {
    pub document: String,
    /// Fully resolved settings, defaults included.
    pub settings: SettingsMap,
    /// Present only for Win9x guests.
    pub display: Option<Win9xDisplaySettings>,
    pub unresolved_tokens: Vec<String>,
}

/// Translate a request using the builtin default table for its executable type.
pub fn translate(request: &TranslationRequest, schemas: &SchemaSet) -> TranslationResult {
    translate_with(request, DefaultTable::builtin(request.family()), schemas)
}

/// Translate a request against an explicit default table.
pub fn translate_with(request: &TranslationRequest, defaults: &DefaultTable, schemas: &SchemaSet) -> TranslationResult {
    let layers = request.layers();
    let settings = resolve_layers(defaults.settings(), &layers, schemas);

    log::debug!(
        "translate(): exe type {:?} -> {} family, {} override layers, {} settings",
        request.exe_type,
        defaults.family(),
        layers.len(),
        settings.len()
    );

    let (document, unresolved_tokens) = match request.template {
        Some(template) => {
            let values = override_values(&layers, schemas);
            let output = render_report(template, &values, defaults.flat());
            (
                assemble_rendered(&output.text, request.autoexec, request.header),
                output.unresolved,
            )
        }
        None => (assemble(&settings, request.autoexec, request.header), Vec::new()),
    };

    let display = if defaults.family().is_win9x() {
        Some(display_settings(request, defaults, schemas))
    }
    else {
        None
    };

    TranslationResult {
        document,
        settings,
        display,
        unresolved_tokens,
    }
}

/// Flattened values from the override layers only. Template fallback to the defaults happens in
/// the renderer, which skips empty default values.
fn override_values(layers: &[&ParsedOverride], schemas: &SchemaSet) -> IndexMap<String, String> {
    layers
        .iter()
        .fold(SettingsMap::new(), |acc, layer| merge(&acc, &resolve_parsed(layer, schemas)))
        .flatten()
}

fn display_settings(request: &TranslationRequest, defaults: &DefaultTable, schemas: &SchemaSet) -> Win9xDisplaySettings {
    let mut display = Win9xDisplaySettings::with_height_variant(request.height_variant);
    display.apply_settings(defaults.settings());
    for layer in request.layers() {
        display.apply_entries(&layer.entries, layer.schema_version(), schemas);
    }
    display
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{entry::parse, win9x::Resolution};

    #[test]
    fn game_overrides_preset_overrides_defaults() {
        let preset = parse("7|3|32\n6|0|normal\n");
        let game = parse("ver.22.01.05\n7|3|64\n");
        let request = TranslationRequest::new("dos")
            .with_preset(&preset)
            .with_game(&game)
            .with_autoexec("exit\n");

        let result = translate(&request, SchemaSet::builtin());
        assert_eq!(result.settings.get("dosbox", "memsize"), Some("64"));
        assert_eq!(result.settings.get("cpu", "core"), Some("normal"));
        assert_eq!(result.settings.get("sblaster", "sbtype"), Some("sb16"));
        assert!(result.display.is_none());
        assert!(result.document.contains("memsize=64\n"));
        assert!(result.document.ends_with("[autoexec]\nexit\n"));
    }

    #[test]
    fn template_mode_prefers_override_values() {
        let game = parse("7|3|256\n");
        let request = TranslationRequest::new("dos")
            .with_game(&game)
            .with_template("[dosbox]\nmemsize=@dosbox_memsize@\n[cpu]\ncore=@cpu_core@\nx=@nothing_here@\n")
            .with_autoexec("exit");

        let result = translate(&request, SchemaSet::builtin());
        assert_eq!(
            result.document,
            "[dosbox]\nmemsize=256\n[cpu]\ncore=auto\nx=\n\n[autoexec]\nexit\n"
        );
        assert_eq!(result.unresolved_tokens, vec!["nothing_here".to_string()]);
    }

    #[test]
    fn win9x_display_follows_layers() {
        let preset = parse("16|0|false\n");
        let game = parse("21|1|1024x16\n");
        let request = TranslationRequest::new("win98")
            .with_preset(&preset)
            .with_game(&game);

        let result = translate(&request, SchemaSet::builtin());
        let display = result.display.expect("win9x guests have display settings");
        assert_eq!(
            display.resolution,
            Resolution {
                width: 1024,
                height: 768,
                bits_per_pixel: 16,
            }
        );
        assert_eq!(display.ddraw, false);
        assert_eq!(display.d3d, true);
        assert_eq!(display.volumes.cd, 128);
        assert!(!result.document.contains("[win9x]"));
    }

    #[test]
    fn explicit_default_table() {
        let defaults = DefaultTable::from_settings(
            PlatformFamily::Dos,
            SettingsMap::from_triples([("dosbox", "memsize", "8")]),
        );
        let request = TranslationRequest::new("anything").with_header("# test");
        let result = translate_with(&request, &defaults, SchemaSet::builtin());
        assert_eq!(result.document, "# test\n\n[dosbox]\nmemsize=8\n\n[autoexec]\n");
    }
}
