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

    retrodos_headless::error.rs

    Errors reported at the front end boundary.

*/

#[derive(thiserror::Error, Debug)]
pub enum LaunchError {
    #[error("Configuration file '{0}' could not be found")]
    ConfigNotFound(String),
    #[error("IO Error reading configuration file '{0}': {1}")]
    ConfigIOError(String, String),
    #[error("Error parsing configuration file '{0}': {1}")]
    ConfigParseError(String, String),
    #[error("An error occurred reading or scanning launcher resources: {0}")]
    ResourceError(String),
    #[error("No game directory was specified. Use --game or set run.game in the configuration file.")]
    NoGame,
    #[error("Invalid game directory '{0}': {1}")]
    GameDirInvalid(String, String),
    #[error("Preset could not be resolved: {0}")]
    MissingPreset(String),
    #[error("Failed to load template: {0}")]
    TemplateError(String),
    #[error("Failed to build boot script: {0}")]
    BootScriptError(String),
    #[error("Failed to write '{0}': {1}")]
    WriteError(String, String),
    #[error("Failed to start emulator '{0}': {1}")]
    SpawnError(String, String),
    #[error("Emulator exited with status {0}")]
    EmulatorFailed(i32),
}
