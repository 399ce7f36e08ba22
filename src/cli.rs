use crate::model::file_descriptor::{load_manifest, FileDescriptor};
use crate::services::transport::UploadSource;
use crate::utils::version;
use crate::view::options::ProgressOverrides;
use clap::Parser;
use color_eyre::eyre;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Local files to upload, each one as a separate upload
    pub files: Vec<PathBuf>,

    /// JSON list of file descriptors to upload without local files
    #[arg(short, long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Send all files as a single upload
    #[arg(short, long)]
    pub together: bool,

    /// Settings file, defaults to config.toml in the config directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Width of the progress bar drawing
    #[arg(long)]
    pub width: Option<u32>,

    /// Height of the progress bar drawing
    #[arg(long)]
    pub height: Option<u32>,

    /// Print the view tree of every upload as JSON and exit
    #[arg(long)]
    pub dump_view: bool,
}

impl Cli {
    pub fn progress_overrides(&self) -> ProgressOverrides {
        ProgressOverrides {
            width: self.width,
            height: self.height,
        }
    }

    /// All files named on the command line, local files first
    pub fn upload_sources(&self) -> eyre::Result<Vec<UploadSource>> {
        let mut sources = self
            .files
            .iter()
            .map(|path| {
                FileDescriptor::from_path(path)
                    .map(|descriptor| UploadSource::new(descriptor, Some(path.clone())))
            })
            .collect::<eyre::Result<Vec<_>>>()?;
        if let Some(manifest) = &self.manifest {
            sources.extend(
                load_manifest(manifest)?
                    .into_iter()
                    .map(|descriptor| UploadSource::new(descriptor, None)),
            );
        }
        Ok(sources)
    }

    /// Sources grouped the way they are uploaded
    pub fn upload_groups(&self) -> eyre::Result<Vec<Vec<UploadSource>>> {
        let sources = self.upload_sources()?;
        if self.together {
            if sources.is_empty() {
                return Ok(Vec::new());
            }
            Ok(vec![sources])
        } else {
            Ok(sources.into_iter().map(|s| vec![s]).collect())
        }
    }
}
