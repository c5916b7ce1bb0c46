//! Command line for the `nblink` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use nblink::{
    BatchConfig, DEFAULT_GITHUB_BASE, DEFAULT_MAX_FILE_SIZE, DEFAULT_ROOT, InjectorConfig,
    LinkFormat, OutputMode,
};
use nblink_io::DiscoverOptions;

#[derive(Parser, Debug)]
#[command(name = "nblink")]
#[command(about = "Add an \"Open in Colab\" link as the second cell of every notebook under a directory.")]
pub(crate) struct Cli {
    /// Directory searched recursively for notebooks.
    #[arg(long, default_value = DEFAULT_ROOT)]
    pub(crate) root: PathBuf,

    /// Repository link base, e.g. `owner/repo/blob/master/` (must end with `/`).
    #[arg(long, default_value = DEFAULT_GITHUB_BASE)]
    pub(crate) github_base: String,

    /// Link markup to insert.
    #[arg(long, value_enum, default_value_t = FormatArg::Badge)]
    pub(crate) format: FormatArg,

    /// Notebook file extension (repeatable).
    #[arg(long = "ext", default_value = ".ipynb")]
    pub(crate) extensions: Vec<String>,

    /// Write results under this directory instead of overwriting sources.
    #[arg(long)]
    pub(crate) out_dir: Option<PathBuf>,

    /// Report what would change without writing.
    #[arg(long)]
    pub(crate) dry_run: bool,

    /// Skip notebooks larger than this many bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_FILE_SIZE)]
    pub(crate) max_file_size: u64,

    /// Also descend into hidden files and directories.
    #[arg(long)]
    pub(crate) include_hidden: bool,

    /// Extra directory name to skip (repeatable).
    #[arg(long = "skip-dir")]
    pub(crate) skip_dirs: Vec<String>,

    /// Debug logging (RUST_LOG takes precedence).
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FormatArg {
    /// Markdown image link.
    Badge,
    /// HTML anchor tag.
    Anchor,
}

impl From<FormatArg> for LinkFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Badge => Self::Badge,
            FormatArg::Anchor => Self::Anchor,
        }
    }
}

impl Cli {
    pub(crate) fn injector_config(&self) -> InjectorConfig {
        InjectorConfig {
            root: self.root.clone(),
            github_base: self.github_base.clone(),
            link_format: self.format.into(),
            max_file_size: self.max_file_size,
            dry_run: self.dry_run,
        }
    }

    pub(crate) fn batch_config(&self) -> BatchConfig {
        let mut discover = DiscoverOptions {
            extensions: self.extensions.clone(),
            // Oversized notebooks must reach the reader and fail there.
            max_file_size: None,
            skip_hidden: !self.include_hidden,
            ..Default::default()
        };
        discover.skip_dirs.extend(self.skip_dirs.iter().cloned());

        BatchConfig {
            discover,
            output: self
                .out_dir
                .clone()
                .map_or(OutputMode::InPlace, OutputMode::Mirror),
        }
    }
}
