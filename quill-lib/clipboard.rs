//! Clipboard abstraction for `quill-lib`.
//!
//! The editor only talks to a [`ClipboardProvider`]. Hosts either implement
//! the trait for their platform clipboard or wrap a pair of callbacks in an
//! [`FnClipboard`].

use std::borrow::Cow;

use parking_lot::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
  #[error("no clipboard is installed")]
  Unavailable,
  #[error("clipboard provider does not support reading")]
  ReadingNotSupported,
  #[error("clipboard error: {0}")]
  Platform(String),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

pub trait ClipboardProvider: Send + Sync {
  fn name(&self) -> Cow<'_, str>;
  fn get_contents(&self) -> Result<String>;
  fn set_contents(&self, content: &str) -> Result<()>;
}

/// Accepts writes and discards them.
#[derive(Debug, Default)]
pub struct NoClipboard;

impl ClipboardProvider for NoClipboard {
  fn name(&self) -> Cow<'_, str> {
    "none".into()
  }

  fn get_contents(&self) -> Result<String> {
    Err(ClipboardError::ReadingNotSupported)
  }

  fn set_contents(&self, _content: &str) -> Result<()> {
    Ok(())
  }
}

/// Process-local clipboard, shared by every editor holding the same instance.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
  contents: Mutex<String>,
}

impl MemoryClipboard {
  pub fn new() -> Self {
    Self::default()
  }
}

impl ClipboardProvider for MemoryClipboard {
  fn name(&self) -> Cow<'_, str> {
    "memory".into()
  }

  fn get_contents(&self) -> Result<String> {
    Ok(self.contents.lock().clone())
  }

  fn set_contents(&self, content: &str) -> Result<()> {
    let mut contents = self.contents.lock();
    contents.clear();
    contents.push_str(content);
    Ok(())
  }
}

type SetFn = Box<dyn Fn(&str) -> bool + Send + Sync>;
type GetFn = Box<dyn Fn() -> Option<String> + Send + Sync>;

/// Clipboard backed by two host callbacks. State the host needs travels in
/// the closures' captures.
pub struct FnClipboard {
  set: SetFn,
  get: GetFn,
}

impl FnClipboard {
  /// `set` returns whether the host accepted the text, `get` returns `None`
  /// when nothing could be read.
  pub fn new(
    set: impl Fn(&str) -> bool + Send + Sync + 'static,
    get: impl Fn() -> Option<String> + Send + Sync + 'static,
  ) -> Self {
    Self {
      set: Box::new(set),
      get: Box::new(get),
    }
  }
}

impl std::fmt::Debug for FnClipboard {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("FnClipboard").finish_non_exhaustive()
  }
}

impl ClipboardProvider for FnClipboard {
  fn name(&self) -> Cow<'_, str> {
    "callback".into()
  }

  fn get_contents(&self) -> Result<String> {
    (self.get)().ok_or_else(|| ClipboardError::Platform("host returned no contents".into()))
  }

  fn set_contents(&self, content: &str) -> Result<()> {
    if (self.set)(content) {
      Ok(())
    } else {
      Err(ClipboardError::Platform("host rejected the contents".into()))
    }
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;

  #[test]
  fn memory_clipboard_round_trips() {
    let clipboard = MemoryClipboard::new();
    assert_eq!(clipboard.get_contents().unwrap(), "");
    clipboard.set_contents("héllo").unwrap();
    assert_eq!(clipboard.get_contents().unwrap(), "héllo");
  }

  #[test]
  fn no_clipboard_cannot_read() {
    assert!(NoClipboard.set_contents("x").is_ok());
    assert!(matches!(
      NoClipboard.get_contents(),
      Err(ClipboardError::ReadingNotSupported)
    ));
  }

  #[test]
  fn callbacks_report_failure() {
    let store = Arc::new(Mutex::new(None::<String>));
    let writer = Arc::clone(&store);
    let reader = Arc::clone(&store);
    let clipboard = FnClipboard::new(
      move |text| {
        if text.is_empty() {
          return false;
        }
        *writer.lock() = Some(text.to_owned());
        true
      },
      move || reader.lock().clone(),
    );

    assert!(matches!(
      clipboard.get_contents(),
      Err(ClipboardError::Platform(_))
    ));
    assert!(clipboard.set_contents("").is_err());
    clipboard.set_contents("abc").unwrap();
    assert_eq!(clipboard.get_contents().unwrap(), "abc");
  }
}
