use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};

/// Where an [`super::AuthStore`] keeps its serialized snapshot.
pub trait StatePersistence {
    fn load(&self) -> Result<Option<Vec<u8>>>;
    fn save(&self, bytes: &[u8]) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// JSON file on disk, replaced atomically on every save.
#[derive(Clone, Debug)]
pub struct FileStatePersistence {
    path: PathBuf,
}

impl FileStatePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatePersistence for FileStatePersistence {
    fn load(&self) -> Result<Option<Vec<u8>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes =
            fs::read(&self.path).with_context(|| format!("read {}", self.path.display()))?;
        Ok(Some(bytes))
    }

    fn save(&self, bytes: &[u8]) -> Result<()> {
        write_atomic(&self.path, bytes)
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| format!("remove {}", self.path.display())),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStatePersistence {
    bytes: Mutex<Option<Vec<u8>>>,
}

impl MemoryStatePersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Option<Vec<u8>> {
        self.bytes.lock().ok().and_then(|b| b.clone())
    }
}

impl StatePersistence for MemoryStatePersistence {
    fn load(&self) -> Result<Option<Vec<u8>>> {
        let guard = self.bytes.lock().map_err(|_| anyhow!("auth state lock poisoned"))?;
        Ok(guard.clone())
    }

    fn save(&self, bytes: &[u8]) -> Result<()> {
        let mut guard = self.bytes.lock().map_err(|_| anyhow!("auth state lock poisoned"))?;
        *guard = Some(bytes.to_vec());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self.bytes.lock().map_err(|_| anyhow!("auth state lock poisoned"))?;
        *guard = None;
        Ok(())
    }
}

impl<T: StatePersistence + ?Sized> StatePersistence for &T {
    fn load(&self) -> Result<Option<Vec<u8>>> {
        (**self).load()
    }

    fn save(&self, bytes: &[u8]) -> Result<()> {
        (**self).save(bytes)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/auth_store/persistence_tests.rs"]
mod tests;
