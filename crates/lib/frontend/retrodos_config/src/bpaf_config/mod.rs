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

    retrodos_config::bpaf_config::mod.rs

    Command line arguments, read with bpaf when the `use_bpaf` feature is
    enabled.

*/

use std::path::PathBuf;

use crate::mount::MountSpec;

#[cfg(feature = "use_bpaf")]
use bpaf::{Bpaf, Parser};

#[cfg(feature = "use_bpaf")]
fn mount_arg() -> impl Parser<Vec<MountSpec>> {
    bpaf::short('m')
        .long("mount")
        .help("Mount a host path with syntax: c:dir:/path, d:iso:/path/cd.iso?label=CD or c:hdd:/path/hdd.img")
        .argument::<String>("mountspec")
        .parse(|s| s.parse::<MountSpec>())
        .many()
}

#[cfg_attr(feature = "use_bpaf", derive(Bpaf))]
#[cfg_attr(feature = "use_bpaf", bpaf(options, version, generate(cli_args)))]
#[derive(Debug, Default)]
pub struct CmdLineArgs {
    #[cfg_attr(feature = "use_bpaf", bpaf(long("config_file"), long("configfile")))]
    pub config_file: Option<PathBuf>,

    #[cfg_attr(feature = "use_bpaf", bpaf(long("base_dir"), long("basedir")))]
    pub base_dir: Option<PathBuf>,

    /// Game directory containing edit.conf and game.toml
    #[cfg_attr(feature = "use_bpaf", bpaf(long))]
    pub game: Option<PathBuf>,

    /// Executable type identifier, e.g. win98, dos_kor
    #[cfg_attr(feature = "use_bpaf", bpaf(long("exe_type"), long("exetype")))]
    pub exe_type: Option<String>,

    /// Preset reference, overriding the game descriptor
    #[cfg_attr(feature = "use_bpaf", bpaf(long))]
    pub preset: Option<String>,

    /// Directory to write retrodos.conf and display.reg into
    #[cfg_attr(feature = "use_bpaf", bpaf(long))]
    pub output: Option<PathBuf>,

    #[cfg_attr(feature = "use_bpaf", bpaf(long("no_launch"), long("nolaunch"), switch))]
    pub no_launch: bool,

    #[cfg_attr(feature = "use_bpaf", bpaf(long("use_templates"), switch))]
    pub use_templates: bool,

    #[cfg_attr(feature = "use_bpaf", bpaf(long("dump_settings"), switch))]
    pub dump_settings: bool,

    #[cfg_attr(feature = "use_bpaf", bpaf(external(mount_arg)))]
    pub mounts: Vec<MountSpec>,
}
