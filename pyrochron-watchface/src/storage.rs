//! Preference persistence
//!
//! Preferences are stored as a single blob: one version byte followed by
//! the postcard encoding of [`Preferences`]. Missing or unreadable blobs
//! fall back to defaults.

use core::future::Future;

use pyrochron_core::Preferences;

/// Blob layout version
pub const PREFERENCES_VERSION: u8 = 1;

/// Maximum serialized preferences size
pub const MAX_PREFERENCES_SIZE: usize = 16;

/// Errors from preference storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Nothing stored yet
    NotFound,
    /// Backend read or write failed
    Storage,
    /// Buffer too small for the data
    BufferTooSmall,
    /// Data corrupted or written by an incompatible version
    Corrupted,
}

impl From<postcard::Error> for StorageError {
    fn from(e: postcard::Error) -> Self {
        match e {
            postcard::Error::SerializeBufferFull => StorageError::BufferTooSmall,
            _ => StorageError::Corrupted,
        }
    }
}

/// Persistent storage for the preferences blob
///
/// Implemented by the platform (persist API, flash sector, file, ...).
pub trait PreferenceStore {
    /// Read the stored blob into `buffer`
    ///
    /// Returns the number of bytes read, or `StorageError::NotFound`.
    fn read(&mut self, buffer: &mut [u8]) -> impl Future<Output = Result<usize, StorageError>>;

    /// Replace the stored blob
    fn write(&mut self, data: &[u8]) -> impl Future<Output = Result<(), StorageError>>;
}

/// Encode preferences into `buffer`, returning the used prefix
pub fn encode<'a>(prefs: &Preferences, buffer: &'a mut [u8]) -> Result<&'a [u8], StorageError> {
    let (version, body) = buffer
        .split_first_mut()
        .ok_or(StorageError::BufferTooSmall)?;
    *version = PREFERENCES_VERSION;
    let used = postcard::to_slice(prefs, body)?.len();
    Ok(&buffer[..used + 1])
}

/// Decode a stored blob
pub fn decode(data: &[u8]) -> Result<Preferences, StorageError> {
    match data.split_first() {
        Some((&PREFERENCES_VERSION, body)) => Ok(postcard::from_bytes(body)?),
        Some(_) => Err(StorageError::Corrupted),
        None => Err(StorageError::NotFound),
    }
}

/// Load preferences, propagating storage errors
pub async fn try_load_preferences<S: PreferenceStore>(
    store: &mut S,
) -> Result<Preferences, StorageError> {
    let mut buffer = [0u8; MAX_PREFERENCES_SIZE];
    let len = store.read(&mut buffer).await?;
    let data = buffer.get(..len).ok_or(StorageError::BufferTooSmall)?;
    decode(data)
}

/// Load preferences, falling back to defaults on any error
pub async fn load_preferences<S: PreferenceStore>(store: &mut S) -> Preferences {
    match try_load_preferences(store).await {
        Ok(prefs) => {
            info!("Loaded preferences from storage");
            prefs
        }
        Err(StorageError::NotFound) => {
            info!("No stored preferences, using defaults");
            Preferences::default()
        }
        Err(e) => {
            warn!("Stored preferences unreadable ({:?}), using defaults", e);
            Preferences::default()
        }
    }
}

/// Persist preferences
pub async fn save_preferences<S: PreferenceStore>(
    store: &mut S,
    prefs: &Preferences,
) -> Result<(), StorageError> {
    let mut buffer = [0u8; MAX_PREFERENCES_SIZE];
    let data = encode(prefs, &mut buffer)?;
    store.write(data).await?;
    debug!("Saved preferences ({} bytes)", data.len());
    Ok(())
}
