//! Single instance enforcement over a loopback socket.
//!
//! The first instance listens on an ephemeral localhost port and records it
//! in a port file. Later instances find the port, forward their request,
//! and exit. A port file nobody answers on is stale and gets taken over.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{Ipv4Addr, SocketAddr, TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::time::Duration;

use hover_common::PlatformError;
use serde::{Deserialize, Serialize};

const CONNECT_TIMEOUT: Duration = Duration::from_millis(500);
const READ_TIMEOUT: Duration = Duration::from_millis(200);

/// What a second launch asks the running instance to do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceMessage {
    /// Files passed on the command line, to be pasted into a window.
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

/// Outcome of [`acquire`].
#[derive(Debug)]
pub enum InstanceRole {
    /// This process owns the session.
    Primary(InstanceServer),
    /// Another instance was running and received the message.
    Secondary,
}

/// Listener held by the primary instance.
#[derive(Debug)]
pub struct InstanceServer {
    listener: TcpListener,
    port_file: PathBuf,
    port: u16,
}

/// Become the primary instance, or hand `message` to the one running.
pub fn acquire(port_file: &Path, message: &InstanceMessage) -> Result<InstanceRole, PlatformError> {
    if let Some(port) = read_port(port_file) {
        match forward(port, message) {
            Ok(()) => {
                tracing::info!(port, "another instance is running, request forwarded");
                return Ok(InstanceRole::Secondary);
            }
            Err(e) => tracing::debug!(port, "stale instance port file: {e}"),
        }
    }
    InstanceServer::bind(port_file).map(InstanceRole::Primary)
}

/// Port file under the user's runtime or cache directory.
pub fn default_port_file() -> Result<PathBuf, PlatformError> {
    let base = dirs::runtime_dir()
        .or_else(dirs::cache_dir)
        .ok_or_else(|| PlatformError::PathError("no runtime directory".into()))?;
    Ok(base.join("hover").join("instance.port"))
}

impl InstanceServer {
    fn bind(port_file: &Path) -> Result<Self, PlatformError> {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
            .map_err(|e| PlatformError::WindowError(format!("instance listener: {e}")))?;
        listener
            .set_nonblocking(true)
            .map_err(|e| PlatformError::WindowError(format!("instance listener: {e}")))?;
        let port = listener
            .local_addr()
            .map_err(|e| PlatformError::WindowError(format!("instance listener: {e}")))?
            .port();

        if let Some(dir) = port_file.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| PlatformError::PathError(format!("{}: {e}", dir.display())))?;
        }
        fs::write(port_file, port.to_string())
            .map_err(|e| PlatformError::PathError(format!("{}: {e}", port_file.display())))?;
        tracing::debug!(port, "listening for other instances");

        Ok(Self {
            listener,
            port_file: port_file.to_path_buf(),
            port,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Messages from instances launched since the last call. Never blocks
    /// on the listener.
    pub fn poll(&self) -> Vec<InstanceMessage> {
        let mut messages = Vec::new();
        loop {
            match self.listener.accept() {
                Ok((stream, peer)) => match read_message(stream) {
                    Ok(message) => messages.push(message),
                    Err(e) => tracing::warn!(%peer, "bad instance message: {e}"),
                },
                Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => break,
                Err(e) => {
                    tracing::warn!("instance listener error: {e}");
                    break;
                }
            }
        }
        messages
    }
}

impl Drop for InstanceServer {
    fn drop(&mut self) {
        if read_port(&self.port_file) == Some(self.port) {
            let _ = fs::remove_file(&self.port_file);
        }
    }
}

fn read_port(port_file: &Path) -> Option<u16> {
    fs::read_to_string(port_file).ok()?.trim().parse().ok()
}

fn forward(port: u16, message: &InstanceMessage) -> std::io::Result<()> {
    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, port));
    let mut stream = TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT)?;
    let mut line = serde_json::to_string(message)?;
    line.push('\n');
    stream.write_all(line.as_bytes())?;
    stream.flush()
}

fn read_message(stream: TcpStream) -> std::io::Result<InstanceMessage> {
    stream.set_nonblocking(false)?;
    stream.set_read_timeout(Some(READ_TIMEOUT))?;
    let mut line = String::new();
    BufReader::new(stream).read_line(&mut line)?;
    Ok(serde_json::from_str(line.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primary(port_file: &Path) -> InstanceServer {
        match acquire(port_file, &InstanceMessage::default()).unwrap() {
            InstanceRole::Primary(server) => server,
            InstanceRole::Secondary => panic!("expected to be primary"),
        }
    }

    fn poll_until_message(server: &InstanceServer) -> Vec<InstanceMessage> {
        for _ in 0..50 {
            let messages = server.poll();
            if !messages.is_empty() {
                return messages;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        Vec::new()
    }

    #[test]
    fn first_instance_records_its_port() {
        let dir = tempfile::tempdir().unwrap();
        let port_file = dir.path().join("instance.port");
        let server = primary(&port_file);
        assert_eq!(read_port(&port_file), Some(server.port()));
        assert!(server.poll().is_empty());
    }

    #[test]
    fn second_instance_forwards_files() {
        let dir = tempfile::tempdir().unwrap();
        let port_file = dir.path().join("instance.port");
        let server = primary(&port_file);

        let message = InstanceMessage {
            files: vec![PathBuf::from("/tmp/notes.txt")],
        };
        let role = acquire(&port_file, &message).unwrap();
        assert!(matches!(role, InstanceRole::Secondary));
        assert_eq!(poll_until_message(&server), vec![message]);
    }

    #[test]
    fn stale_port_file_is_taken_over() {
        let dir = tempfile::tempdir().unwrap();
        let port_file = dir.path().join("instance.port");
        let dead_port = {
            let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
            listener.local_addr().unwrap().port()
        };
        fs::write(&port_file, dead_port.to_string()).unwrap();

        let server = primary(&port_file);
        assert_eq!(read_port(&port_file), Some(server.port()));
    }

    #[test]
    fn garbage_port_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let port_file = dir.path().join("instance.port");
        fs::write(&port_file, "not a port").unwrap();
        let server = primary(&port_file);
        assert_eq!(read_port(&port_file), Some(server.port()));
    }

    #[test]
    fn dropping_primary_removes_port_file() {
        let dir = tempfile::tempdir().unwrap();
        let port_file = dir.path().join("instance.port");
        drop(primary(&port_file));
        assert!(!port_file.exists());
    }

    #[test]
    fn message_without_files_parses() {
        let message: InstanceMessage = serde_json::from_str("{}").unwrap();
        assert!(message.files.is_empty());
    }
}
