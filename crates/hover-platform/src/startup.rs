//! Launch at login.
//!
//! Linux gets an XDG autostart entry, macOS a user LaunchAgent, and Windows
//! a value under `HKCU\...\CurrentVersion\Run`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use hover_common::PlatformError;

#[cfg(debug_assertions)]
const ENTRY_NAME: &str = "Hover (Debug)";

#[cfg(not(debug_assertions))]
const ENTRY_NAME: &str = "Hover";

const RUN_KEY: &str = r"HKCU\SOFTWARE\Microsoft\Windows\CurrentVersion\Run";

pub trait LaunchAtLogin {
    /// Add or remove the login entry. Idempotent.
    fn set_enabled(&mut self, enabled: bool) -> Result<(), PlatformError>;

    fn is_enabled(&self) -> bool;
}

/// Where the login entry lives.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Location {
    File(PathBuf),
    Registry,
}

/// Login entry that starts `exe`.
#[derive(Debug, Clone)]
pub struct LoginItem {
    exe: PathBuf,
    location: Location,
}

impl LoginItem {
    /// Entry for the running executable in the platform's usual place.
    pub fn for_current_exe() -> Result<Self, PlatformError> {
        let exe = std::env::current_exe()
            .map_err(|e| PlatformError::PathError(format!("current executable: {e}")))?;
        let location = if cfg!(target_os = "windows") {
            Location::Registry
        } else {
            Location::File(default_entry_path()?)
        };
        Ok(Self { exe, location })
    }

    /// Entry written to an explicit file.
    pub fn at(entry: impl Into<PathBuf>, exe: impl Into<PathBuf>) -> Self {
        Self {
            exe: exe.into(),
            location: Location::File(entry.into()),
        }
    }

    fn write_file(&self, path: &Path) -> Result<(), PlatformError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| PlatformError::PathError(format!("{}: {e}", dir.display())))?;
        }
        fs::write(path, entry_contents(&self.exe))
            .map_err(|e| PlatformError::PathError(format!("{}: {e}", path.display())))
    }

    fn remove_file(path: &Path) -> Result<(), PlatformError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PlatformError::PathError(format!("{}: {e}", path.display()))),
        }
    }

    fn run_reg(args: &[&str]) -> Result<(), PlatformError> {
        let status = Command::new("reg")
            .args(args)
            .status()
            .map_err(|e| PlatformError::NotSupported(format!("reg: {e}")))?;
        if status.success() {
            Ok(())
        } else {
            Err(PlatformError::PathError(format!("reg {} failed: {status}", args[0])))
        }
    }
}

impl LaunchAtLogin for LoginItem {
    fn set_enabled(&mut self, enabled: bool) -> Result<(), PlatformError> {
        match (&self.location, enabled) {
            (Location::File(path), true) => self.write_file(path)?,
            (Location::File(path), false) => Self::remove_file(path)?,
            (Location::Registry, true) => {
                let exe = format!("\"{}\"", self.exe.display());
                Self::run_reg(&["add", RUN_KEY, "/v", ENTRY_NAME, "/t", "REG_SZ", "/d", &exe, "/f"])?
            }
            (Location::Registry, false) => {
                if self.is_enabled() {
                    Self::run_reg(&["delete", RUN_KEY, "/v", ENTRY_NAME, "/f"])?
                }
            }
        }
        tracing::info!(enabled, "launch at login updated");
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        match &self.location {
            Location::File(path) => path.is_file(),
            Location::Registry => Command::new("reg")
                .args(["query", RUN_KEY, "/v", ENTRY_NAME])
                .output()
                .map(|out| out.status.success())
                .unwrap_or(false),
        }
    }
}

/// Stand-in used when the executable path cannot be resolved.
#[derive(Debug, Default)]
pub struct NoLaunchAtLogin;

impl LaunchAtLogin for NoLaunchAtLogin {
    fn set_enabled(&mut self, _enabled: bool) -> Result<(), PlatformError> {
        Err(PlatformError::NotSupported("launch at login".into()))
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Create the platform login entry manager.
pub fn create_launch_at_login() -> Box<dyn LaunchAtLogin> {
    match LoginItem::for_current_exe() {
        Ok(item) => Box::new(item),
        Err(e) => {
            tracing::warn!("launch at login unavailable: {e}");
            Box::new(NoLaunchAtLogin)
        }
    }
}

fn default_entry_path() -> Result<PathBuf, PlatformError> {
    if cfg!(target_os = "macos") {
        let home = dirs::home_dir()
            .ok_or_else(|| PlatformError::PathError("no home directory".into()))?;
        Ok(home.join("Library/LaunchAgents/app.hover.plist"))
    } else {
        let config = dirs::config_dir()
            .ok_or_else(|| PlatformError::PathError("no config directory".into()))?;
        Ok(config.join("autostart").join("hover.desktop"))
    }
}

fn entry_contents(exe: &Path) -> String {
    let exe = exe.display();
    if cfg!(target_os = "macos") {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>Label</key>
    <string>app.hover</string>
    <key>ProgramArguments</key>
    <array>
        <string>{exe}</string>
    </array>
    <key>RunAtLoad</key>
    <true/>
</dict>
</plist>
"#
        )
    } else {
        format!(
            "[Desktop Entry]\nType=Application\nName={ENTRY_NAME}\nExec=\"{exe}\"\nX-GNOME-Autostart-enabled=true\n"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enable_writes_entry_for_exe() {
        let dir = tempfile::tempdir().unwrap();
        let entry = dir.path().join("autostart/hover.desktop");
        let mut item = LoginItem::at(&entry, "/opt/hover/hover");
        assert!(!item.is_enabled());

        item.set_enabled(true).unwrap();
        assert!(item.is_enabled());
        let contents = fs::read_to_string(&entry).unwrap();
        assert!(contents.contains("/opt/hover/hover"));
    }

    #[test]
    fn disable_removes_entry() {
        let dir = tempfile::tempdir().unwrap();
        let entry = dir.path().join("hover.desktop");
        let mut item = LoginItem::at(&entry, "/opt/hover/hover");
        item.set_enabled(true).unwrap();
        item.set_enabled(false).unwrap();
        assert!(!entry.exists());
        assert!(!item.is_enabled());
    }

    #[test]
    fn disable_without_entry_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let mut item = LoginItem::at(dir.path().join("hover.desktop"), "/opt/hover/hover");
        assert!(item.set_enabled(false).is_ok());
    }

    #[test]
    fn enabling_twice_keeps_one_entry() {
        let dir = tempfile::tempdir().unwrap();
        let entry = dir.path().join("hover.desktop");
        let mut item = LoginItem::at(&entry, "/opt/hover/hover");
        item.set_enabled(true).unwrap();
        item.set_enabled(true).unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn unsupported_reports_error() {
        let mut none = NoLaunchAtLogin;
        assert!(matches!(
            none.set_enabled(true),
            Err(PlatformError::NotSupported(_))
        ));
        assert!(!none.is_enabled());
    }
}
