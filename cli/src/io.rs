// ## 📂 File: `src/io.rs`
// Normalized input/output handles for the front ends.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use lz78_core::constants::DEFAULT_PROTECTION;
use tracing::{debug, warn};

/// Canonical input abstraction
#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn from_arg(path: Option<&Path>) -> Self {
        path.map_or(InputSource::Stdin, |p| InputSource::File(p.to_path_buf()))
    }
}

/// Canonical output abstraction
#[derive(Debug, Clone)]
pub enum OutputSink {
    Stdout,
    File(PathBuf),
}

impl OutputSink {
    pub fn from_arg(path: Option<&Path>) -> Self {
        path.map_or(OutputSink::Stdout, |p| OutputSink::File(p.to_path_buf()))
    }
}

/// Opened input plus the mode bits recorded in the container header.
pub struct OpenedInput {
    pub reader: Box<dyn Read>,
    pub protection: u16,
}

/// Normalize input source into a boxed reader
pub fn open_input(src: &InputSource) -> anyhow::Result<OpenedInput> {
    match src {
        InputSource::Stdin => Ok(OpenedInput {
            reader: Box::new(io::stdin().lock()),
            protection: stdin_protection(),
        }),
        InputSource::File(p) => {
            let file = File::open(p).with_context(|| format!("cannot open {}", p.display()))?;
            let protection = file_protection(&file);
            Ok(OpenedInput { reader: Box::new(file), protection })
        }
    }
}

/// Output handle that can receive the decoded permission bits.
pub enum Output {
    Stdout(io::StdoutLock<'static>),
    File(File),
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(s) => s.write(buf),
            Output::File(f) => f.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(s) => s.flush(),
            Output::File(f) => f.flush(),
        }
    }
}

/// Normalize output sink into a writer. New files are created owner read/write only.
pub fn open_output(sink: &OutputSink) -> anyhow::Result<Output> {
    match sink {
        OutputSink::Stdout => Ok(Output::Stdout(io::stdout().lock())),
        OutputSink::File(p) => {
            let mut options = OpenOptions::new();
            options.write(true).create(true).truncate(true);
            #[cfg(unix)]
            {
                use std::os::unix::fs::OpenOptionsExt;
                options.mode(0o600);
            }
            let file = options
                .open(p)
                .with_context(|| format!("cannot create {}", p.display()))?;
            Ok(Output::File(file))
        }
    }
}

impl Output {
    /// Apply decoded permission bits. Only regular files are touched, so a terminal or
    /// pipe on stdout keeps its mode. Failures are logged, never fatal.
    pub fn apply_permissions(&self, mode: u16) {
        let result = match self {
            Output::File(f) => set_mode(f, mode),
            Output::Stdout(_) => stdout_file().and_then(|f| set_mode(&f, mode)),
        };
        if let Err(e) = result {
            warn!(error = %e, mode = %format!("{mode:o}"), "could not apply permissions");
        }
    }
}

#[cfg(unix)]
fn set_mode(file: &File, mode: u16) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    if !file.metadata()?.is_file() {
        return Ok(());
    }
    file.set_permissions(std::fs::Permissions::from_mode(mode as u32))?;
    debug!(mode = %format!("{mode:o}"), "permissions applied");
    Ok(())
}

#[cfg(not(unix))]
fn set_mode(_file: &File, _mode: u16) -> io::Result<()> {
    Ok(())
}

#[cfg(unix)]
fn file_protection(file: &File) -> u16 {
    use std::os::unix::fs::MetadataExt;
    file.metadata()
        .map(|m| (m.mode() & 0xFFFF) as u16)
        .unwrap_or(DEFAULT_PROTECTION)
}

#[cfg(not(unix))]
fn file_protection(_file: &File) -> u16 {
    DEFAULT_PROTECTION
}

#[cfg(unix)]
fn stdin_protection() -> u16 {
    use std::os::fd::AsFd;
    io::stdin()
        .as_fd()
        .try_clone_to_owned()
        .map(File::from)
        .map(|f| file_protection(&f))
        .unwrap_or(DEFAULT_PROTECTION)
}

#[cfg(not(unix))]
fn stdin_protection() -> u16 {
    DEFAULT_PROTECTION
}

#[cfg(unix)]
fn stdout_file() -> io::Result<File> {
    use std::os::fd::AsFd;
    io::stdout().as_fd().try_clone_to_owned().map(File::from)
}

#[cfg(not(unix))]
fn stdout_file() -> io::Result<File> {
    Err(io::Error::new(io::ErrorKind::Unsupported, "stdout permissions are unix-only"))
}
