//! Lock-protected handles for serving a backend from several threads.
//!
//! A backend is meant to be driven from a single dispatch thread. If the IPC
//! layer dispatches concurrently, wrap the backend in one of these handles:
//! every call holds the lock for its whole duration, so two `set_enabled`
//! calls cannot interleave their write and their state update.
//!
//! # Example (Sync)
//!
//! ```no_run
//! use tapwake::{Config, Gestures, SharedGestures};
//!
//! let shared = SharedGestures::new(Gestures::select(&Config::default()));
//! let worker = shared.clone();
//! std::thread::spawn(move || worker.set_enabled(true).unwrap());
//! println!("enabled: {}", shared.enabled().unwrap());
//! ```
//!
//! # Example (Async with Tokio)
//!
//! ```ignore
//! use tapwake::{AsyncSharedGestures, Config, Gestures};
//!
//! #[tokio::main]
//! async fn main() {
//!     let shared = AsyncSharedGestures::new(Gestures::select(&Config::default()));
//!     shared.set_enabled(true).await;
//!     println!("enabled: {}", shared.enabled().await);
//! }
//! ```

use crate::error::{Error, Result};
use crate::gestures::{BackendKind, GestureControl, Gestures};
use crate::property::PropertyValue;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable, thread-safe handle to a backend.
#[derive(Debug, Clone)]
pub struct SharedGestures {
    inner: Arc<Mutex<Gestures>>,
}

impl SharedGestures {
    /// Take ownership of `gestures`.
    pub fn new(gestures: Gestures) -> Self {
        Self {
            inner: Arc::new(Mutex::new(gestures)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Gestures>> {
        self.inner
            .lock()
            .map_err(|_| Error::ThreadError("gesture backend mutex poisoned".into()))
    }

    /// Which backend is wrapped.
    pub fn kind(&self) -> Result<BackendKind> {
        Ok(self.lock()?.kind())
    }

    /// See [`GestureControl::supported`].
    pub fn supported(&self) -> Result<bool> {
        Ok(self.lock()?.supported())
    }

    /// See [`GestureControl::enabled`].
    pub fn enabled(&self) -> Result<bool> {
        Ok(self.lock()?.enabled())
    }

    /// See [`GestureControl::set_enabled`]. Only fails if the lock is poisoned.
    pub fn set_enabled(&self, value: bool) -> Result<()> {
        self.lock()?.set_enabled(value);
        Ok(())
    }

    /// See [`GestureControl::try_set_enabled`].
    pub fn try_set_enabled(&self, value: bool) -> Result<()> {
        self.lock()?.try_set_enabled(value)
    }

    /// See [`GestureControl::control_node`].
    pub fn control_node(&self) -> Result<Option<PathBuf>> {
        Ok(self.lock()?.control_node().map(|p| p.to_path_buf()))
    }

    /// See [`GestureControl::property`].
    pub fn property(&self, name: &str) -> Result<PropertyValue> {
        self.lock()?.property(name)
    }

    /// See [`GestureControl::set_property`].
    pub fn set_property(&self, name: &str, value: PropertyValue) -> Result<()> {
        self.lock()?.set_property(name, value)
    }
}

#[cfg(feature = "tokio")]
pub use async_shared::AsyncSharedGestures;

#[cfg(feature = "tokio")]
mod async_shared {
    use super::*;
    use tokio::sync::Mutex;

    /// Cloneable handle for async dispatchers, backed by a tokio mutex.
    ///
    /// Control node writes are short synchronous file writes and run while
    /// the lock is held.
    #[derive(Debug, Clone)]
    pub struct AsyncSharedGestures {
        inner: Arc<Mutex<Gestures>>,
    }

    impl AsyncSharedGestures {
        /// Take ownership of `gestures`.
        pub fn new(gestures: Gestures) -> Self {
            Self {
                inner: Arc::new(Mutex::new(gestures)),
            }
        }

        /// Which backend is wrapped.
        pub async fn kind(&self) -> BackendKind {
            self.inner.lock().await.kind()
        }

        /// See [`GestureControl::supported`].
        pub async fn supported(&self) -> bool {
            self.inner.lock().await.supported()
        }

        /// See [`GestureControl::enabled`].
        pub async fn enabled(&self) -> bool {
            self.inner.lock().await.enabled()
        }

        /// See [`GestureControl::set_enabled`].
        pub async fn set_enabled(&self, value: bool) {
            self.inner.lock().await.set_enabled(value);
        }

        /// See [`GestureControl::try_set_enabled`].
        pub async fn try_set_enabled(&self, value: bool) -> Result<()> {
            self.inner.lock().await.try_set_enabled(value)
        }

        /// See [`GestureControl::control_node`].
        pub async fn control_node(&self) -> Option<PathBuf> {
            self.inner.lock().await.control_node().map(|p| p.to_path_buf())
        }

        /// See [`GestureControl::property`].
        pub async fn property(&self, name: &str) -> Result<PropertyValue> {
            self.inner.lock().await.property(name)
        }

        /// See [`GestureControl::set_property`].
        pub async fn set_property(&self, name: &str, value: PropertyValue) -> Result<()> {
            self.inner.lock().await.set_property(name, value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gestures::GenericGestures;
    use crate::property::TOUCHPANEL_DT2W_NODE;
    use std::fs;
    use std::thread;

    #[test]
    fn test_shared_reads_and_writes() {
        let shared = SharedGestures::new(GenericGestures::new().into());
        assert_eq!(shared.kind().unwrap(), BackendKind::Generic);
        assert!(!shared.supported().unwrap());

        shared.set_enabled(true).unwrap();
        assert!(shared.enabled().unwrap());
        assert_eq!(shared.control_node().unwrap(), None);
    }

    #[test]
    fn test_shared_across_threads() {
        let dir = tempfile::tempdir().unwrap();
        let node = dir.path().join("node");
        fs::write(&node, "").unwrap();

        let shared = SharedGestures::new(GenericGestures::new().into());
        shared
            .set_property(TOUCHPANEL_DT2W_NODE, node.clone().into())
            .unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || shared.set_enabled(i % 2 == 0).unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Whatever write landed last is what memory reports.
        let expected = if shared.enabled().unwrap() { "1" } else { "0" };
        assert_eq!(fs::read_to_string(&node).unwrap(), expected);
    }

    #[test]
    fn test_shared_try_set_enabled_error() {
        let dir = tempfile::tempdir().unwrap();
        let shared = SharedGestures::new(
            GenericGestures::with_node(Some(dir.path().join("missing"))).into(),
        );

        assert!(shared.try_set_enabled(true).unwrap_err().is_write_failure());
        assert!(!shared.enabled().unwrap());
    }

    #[cfg(feature = "tokio")]
    #[tokio::test]
    async fn test_async_shared() {
        let shared = AsyncSharedGestures::new(GenericGestures::new().into());
        assert_eq!(shared.kind().await, BackendKind::Generic);
        assert!(!shared.supported().await);

        shared
            .set_property(TOUCHPANEL_DT2W_NODE, PathBuf::from("/tmp/node").into())
            .await
            .unwrap();
        assert!(shared.supported().await);
        assert_eq!(shared.control_node().await, Some(PathBuf::from("/tmp/node")));
    }
}
