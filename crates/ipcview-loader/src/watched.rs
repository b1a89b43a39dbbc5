use std::cell::Cell;
use std::io::{self, Read};
use std::rc::Rc;

/// Passes reads through, counts the bytes handed out and keeps the first error
/// raised by the inner reader.
///
/// The IPC decoder folds every failure into its own error type, and a short
/// read surfaces there as `UnexpectedEof`. Only errors seen here come from the
/// source itself.
pub(crate) struct WatchedReader<R> {
    inner: R,
    consumed: Rc<Cell<u64>>,
    failure: Option<io::Error>,
}

impl<R: Read> WatchedReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self {
            inner,
            consumed: Rc::new(Cell::new(0)),
            failure: None,
        }
    }

    /// Shared byte counter, readable while the decoder borrows the reader.
    pub(crate) fn consumed(&self) -> Rc<Cell<u64>> {
        self.consumed.clone()
    }

    pub(crate) fn take_failure(&mut self) -> Option<io::Error> {
        self.failure.take()
    }
}

impl<R: Read> Read for WatchedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.inner.read(buf) {
            Ok(n) => {
                self.consumed.set(self.consumed.get() + n as u64);
                Ok(n)
            }
            Err(e) if e.kind() != io::ErrorKind::Interrupted => {
                let forwarded = io::Error::new(e.kind(), e.to_string());
                if self.failure.is_none() {
                    self.failure = Some(e);
                }
                Err(forwarded)
            }
            Err(e) => Err(e),
        }
    }
}
