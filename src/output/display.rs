//! Optional interactive display of saved charts.

use crate::utils::config::ReportConfig;
use log::{debug, warn};
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Open `path` with the platform's default viewer
pub fn open_in_viewer(path: &Path) -> io::Result<()> {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]);
        cmd
    } else {
        Command::new("xdg-open")
    };

    let status = command
        .arg(path)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;

    if status.success() {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::Other,
            format!("viewer exited with {}", status),
        ))
    }
}

/// Show a saved chart when `interactive_display` is on.
/// Viewer failures are logged and never abort the run.
pub fn display_if_requested(path: &Path, config: &ReportConfig) {
    if !config.interactive_display {
        return;
    }

    debug!("Opening {} in viewer", path.display());

    if let Err(e) = open_in_viewer(path) {
        warn!("Could not display {}: {}", path.display(), e);
    }
}
