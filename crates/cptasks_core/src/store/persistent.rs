use crate::repo::slot_repo::{RepoError, SlotRepository};
use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while writing a value back to its slot.
#[derive(Debug)]
pub enum StoreError {
    Serialize(serde_json::Error),
    Repo(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(err) => write!(f, "failed to serialize slot value: {err}"),
            Self::Repo(err) => write!(f, "failed to write slot: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// In-memory value bound to the slot `key` of repository `R`.
///
/// The value is JSON text on disk.
pub struct PersistentStore<T, R> {
    repo: R,
    key: String,
    value: T,
}

impl<T, R> PersistentStore<T, R>
where
    T: Serialize + DeserializeOwned,
    R: SlotRepository,
{
    /// Binds `key`, loading its current content or `initial_value`.
    ///
    /// Absent slots, read errors and malformed content all yield
    /// `initial_value`.
    pub fn open(repo: R, key: impl Into<String>, initial_value: T) -> Self {
        let key = key.into();
        let value = match repo.read_slot(&key) {
            Ok(Some(text)) => match serde_json::from_str::<T>(&text) {
                Ok(value) => {
                    debug!("event=slot_read module=store status=ok key={key}");
                    value
                }
                Err(err) => {
                    warn!(
                        "event=slot_read module=store status=fallback key={key} reason=malformed line={} column={}",
                        err.line(),
                        err.column()
                    );
                    initial_value
                }
            },
            Ok(None) => {
                debug!("event=slot_read module=store status=fallback key={key} reason=absent");
                initial_value
            }
            Err(err) => {
                warn!(
                    "event=slot_read module=store status=fallback key={key} reason=read_error error={err}"
                );
                initial_value
            }
        };

        Self { repo, key, value }
    }

    /// Current in-memory value.
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replaces the value and writes it to the slot.
    ///
    /// Performs exactly one synchronous write. On error the previous value
    /// is kept.
    pub fn update(&mut self, new_value: T) -> StoreResult<()> {
        let text = serde_json::to_string(&new_value).map_err(StoreError::Serialize)?;
        if let Err(err) = self.repo.write_slot(&self.key, &text) {
            error!(
                "event=slot_write module=store status=error key={} error={err}",
                self.key
            );
            return Err(err.into());
        }
        debug!(
            "event=slot_write module=store status=ok key={} bytes={}",
            self.key,
            text.len()
        );
        self.value = new_value;
        Ok(())
    }

    /// Releases the bound repository.
    pub fn into_inner(self) -> (R, T) {
        (self.repo, self.value)
    }
}
