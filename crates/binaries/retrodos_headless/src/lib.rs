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

    retrodos_headless::lib.rs

    Command line front end main library component.

*/

//! Resolves the launcher configuration, translates a game's override files into an emulator
//! configuration, writes it (and the Win9x registry patch) to disk and launches the emulator.

#![forbid(unsafe_code)]

mod error;
mod launch;

use std::path::Path;

pub use error::LaunchError;

use retrodos_config::{ConfigFileParams, DEFAULT_CONFIG_FILE};
use retrodos_core::{
    entry::ParsedOverride,
    pipeline::{translate, TranslationRequest},
    regpatch::build_display_patch,
    schema::SchemaSet,
    template::TemplateKind,
};
use retrodos_frontend_common::{
    preset_manager::PRESET_RESOURCE,
    GameDir,
    PresetManager,
    ResourceManager,
    TemplateManager,
};

use crate::launch::{build_boot_script, emulator_command, output_paths};

/// Resource name for the generated file directory.
pub const OUTPUT_RESOURCE: &str = "output";
pub const FALLBACK_EXE_TYPE: &str = "dos";

pub fn run() {
    env_logger::init();

    if let Err(e) = try_run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn load_config() -> Result<ConfigFileParams, LaunchError> {
    use LaunchError::*;
    let path = DEFAULT_CONFIG_FILE;

    match retrodos_config::read_config_file(path) {
        Ok(config) => Ok(config),
        Err(e) => match e.downcast_ref::<std::io::Error>() {
            Some(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ConfigNotFound(path.to_string())),
            Some(e) => Err(ConfigIOError(path.to_string(), e.to_string())),
            None => Err(ConfigParseError(path.to_string(), e.to_string())),
        },
    }
}

pub fn try_run() -> Result<(), LaunchError> {
    use LaunchError::*;

    // Resolve the launcher configuration by parsing the configuration toml and merging it with
    // command line arguments.
    let config = load_config()?;

    let mut resource_manager = ResourceManager::from_config(config.launcher.basedir.clone(), &config.launcher.paths)
        .map_err(|e| ResourceError(e.to_string()))?;
    resource_manager.set_ignore_dirs(config.launcher.ignore_dirs.clone());

    for path in resource_manager.pm.dump_paths() {
        log::debug!("Resolved resource path: {:?}", path);
    }

    let game_path = config.run.game.clone().ok_or(NoGame)?;
    let game =
        GameDir::load(&game_path).map_err(|e| GameDirInvalid(game_path.display().to_string(), e.to_string()))?;
    log::info!("Preparing '{}' from {:?}", game.title(), game.path);

    let exe_type = config
        .run
        .exe_type
        .clone()
        .or_else(|| game.descriptor.exe_type.clone())
        .or_else(|| config.launcher.default_exe_type.clone())
        .unwrap_or_else(|| FALLBACK_EXE_TYPE.to_string());
    let kind = TemplateKind::select(&exe_type);
    log::debug!("Executable type '{}' selects {} template ({} family)", exe_type, kind, kind.family());

    let preset = resolve_preset(&config, &game, &resource_manager)?;

    let template_text = if config.launcher.use_templates {
        let mut template_manager = TemplateManager::from_resources(&resource_manager);
        let text = template_manager
            .get_template(kind)
            .map_err(|e| TemplateError(e.to_string()))?;
        Some(text.to_string())
    }
    else {
        None
    };

    let output_dir = match (&config.run.output, resource_manager.resource_path(OUTPUT_RESOURCE)) {
        (Some(dir), _) => dir.clone(),
        (None, Some(dir)) => dir,
        (None, None) => game.path.clone(),
    };
    let (conf_path, patch_path) = output_paths(&output_dir);

    let write_patch = kind.family().is_win9x() && config.launcher.write_registry_patch;
    let boot_plan = build_boot_script(&game, &config.run.mounts, write_patch.then_some(output_dir.as_path()))
        .map_err(|e| BootScriptError(e.to_string()))?;
    if write_patch && !boot_plan.copies_patch {
        log::info!("No hard disk image is booted, skipping the registry patch");
    }

    let mut request = TranslationRequest::new(&exe_type)
        .with_autoexec(&boot_plan.script)
        .with_height_variant(config.launcher.height_variant);
    if let Some(preset) = &preset {
        request = request.with_preset(preset);
    }
    if let Some(game_override) = &game.override_file {
        request = request.with_game(game_override);
    }
    if let Some(text) = &template_text {
        request = request.with_template(text);
    }
    if let Some(header) = &config.launcher.header {
        request = request.with_header(header);
    }

    let result = translate(&request, SchemaSet::builtin());

    if !result.unresolved_tokens.is_empty() {
        log::warn!(
            "{} template tokens had no value: {}",
            result.unresolved_tokens.len(),
            result.unresolved_tokens.join(", ")
        );
    }

    if config.run.dump_settings {
        println!("{}", result.settings);
    }

    write_file(&resource_manager, &conf_path, &result.document)?;
    println!("Wrote {}", conf_path.display());

    if let Some(display) = result.display.filter(|_| boot_plan.copies_patch) {
        log::debug!("Display settings: {:?}", display);
        write_file(&resource_manager, &patch_path, &build_display_patch(&display))?;
        println!("Wrote {}", patch_path.display());
    }

    if config.run.no_launch {
        return Ok(());
    }

    let binary = config.emulator.binary_for(kind.emulator());
    log::info!("Launching {} ({})", kind.emulator(), binary.display());

    let status = emulator_command(&binary, &conf_path, &config.emulator.extra_args)
        .status()
        .map_err(|e| SpawnError(binary.display().to_string(), e.to_string()))?;

    if !status.success() {
        return Err(EmulatorFailed(status.code().unwrap_or(-1)));
    }
    Ok(())
}

/// Load presets and resolve the reference from the command line or game descriptor, if any.
fn resolve_preset(
    config: &ConfigFileParams,
    game: &GameDir,
    rm: &ResourceManager,
) -> Result<Option<ParsedOverride>, LaunchError> {
    let Some(reference) = config.run.preset.as_ref().or(game.descriptor.conf.as_ref()) else {
        return Ok(None);
    };

    if !rm.has_resource(PRESET_RESOURCE) {
        return Err(LaunchError::MissingPreset(format!(
            "'{}' was requested but no '{}' resource path is configured",
            reference, PRESET_RESOURCE
        )));
    }

    let mut preset_manager = PresetManager::new();
    preset_manager
        .load_presets(rm)
        .map_err(|e| LaunchError::ResourceError(e.to_string()))?;

    let preset = preset_manager
        .get_preset(reference)
        .map_err(|e| LaunchError::MissingPreset(e.to_string()))?;
    log::debug!("Using preset '{}' from {:?}", preset.name, preset.location);
    Ok(Some(preset.parsed.clone()))
}

fn write_file(rm: &ResourceManager, path: &Path, contents: &str) -> Result<(), LaunchError> {
    rm.write_string_to_path(path, contents)
        .map_err(|e| LaunchError::WriteError(path.display().to_string(), e.to_string()))
}
