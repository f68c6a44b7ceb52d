//! Opening converted URLs.

use std::io;

/// Opens a URL for the user. Command handlers take this instead of calling the OS directly.
pub trait Browser {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// The system default browser, via the `open` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        open::that(url)
    }
}

/// Records opened URLs; optionally fails every call.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingBrowser {
    pub opened: std::cell::RefCell<Vec<String>>,
    pub fail: bool,
}

#[cfg(test)]
impl Browser for RecordingBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no browser"));
        }
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}
