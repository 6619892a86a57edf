//! Session token storage and lookup

use crate::error::CredentialError;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use zeroize::Zeroizing;

/// Opaque session token for the puzzle site (zeroized on drop)
#[derive(Clone)]
pub struct Session(Zeroizing<String>);

impl Session {
    /// Wrap a token, trimming surrounding whitespace
    ///
    /// Returns `None` for a blank token.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let raw = Zeroizing::new(token.into());
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(Zeroizing::new(trimmed.to_string())))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Session(<redacted>)")
    }
}

/// Supplies the session token used for fetching, if one is configured
pub trait CredentialProvider {
    fn session(&self) -> Option<&Session>;
}

impl CredentialProvider for Option<Session> {
    fn session(&self) -> Option<&Session> {
        self.as_ref()
    }
}

impl<P: CredentialProvider + ?Sized> CredentialProvider for &P {
    fn session(&self) -> Option<&Session> {
        (**self).session()
    }
}

/// Session token read once from a plaintext file
///
/// A missing or blank file means fetching is disabled.
#[derive(Debug)]
pub struct SessionFile {
    path: PathBuf,
    session: Option<Session>,
}

impl SessionFile {
    /// File name used when no other location is configured
    pub const DEFAULT_FILE_NAME: &'static str = "adventPuzzler.config";

    /// Read the session file at `path`
    ///
    /// # Errors
    ///
    /// Any I/O error other than the file not existing.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, CredentialError> {
        let path = path.into();
        let session = match fs::read_to_string(&path) {
            Ok(contents) => {
                let session = Session::new(contents);
                if session.is_none() {
                    warn!(path = %path.display(), "session file is empty; fetching disabled");
                } else {
                    debug!(path = %path.display(), "loaded session file");
                }
                session
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "no session file; fetching disabled");
                None
            }
            Err(source) => return Err(CredentialError::Io { path, source }),
        };
        Ok(Self { path, session })
    }

    /// Like [`SessionFile::load`], but an unreadable file disables fetching
    ///
    /// Read errors are logged instead of returned, so they only show up when
    /// a fetch actually needs the token.
    pub fn load_or_disabled(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::load(&path) {
            Ok(file) => file,
            Err(e) => {
                warn!(error = %e, "cannot read session file; fetching disabled");
                Self {
                    path,
                    session: None,
                }
            }
        }
    }

    /// Write `session` to `path`, replacing any previous token
    ///
    /// On Unix the file is restricted to the owner.
    pub fn store(path: impl AsRef<Path>, session: &Session) -> Result<(), CredentialError> {
        let path = path.as_ref();
        let io_err = |source| CredentialError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, session.expose()).map_err(io_err)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(io_err)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_configured(&self) -> bool {
        self.session.is_some()
    }
}

impl CredentialProvider for SessionFile {
    fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}
