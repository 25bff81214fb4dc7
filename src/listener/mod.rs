use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Instant;

use crate::options::TransportOptions;
use crate::Result;


/// Observes every request a [`RequestClient`](crate::RequestClient) fires.
///
/// Both hooks run synchronously on the caller's stack, in registration order. An `Err` from
/// either hook aborts the request and is returned to the caller. `request_end` is not called
/// if the process dies while the request is in flight.
pub trait Listener {
    fn request_start(&self, id: u32, url: &str, options: &TransportOptions) -> Result<()>;

    fn request_end(&self, id: u32) -> Result<()>;
}

impl<L: Listener + ?Sized> Listener for Rc<L> {
    fn request_start(&self, id: u32, url: &str, options: &TransportOptions) -> Result<()> {
        (**self).request_start(id, url, options)
    }

    fn request_end(&self, id: u32) -> Result<()> {
        (**self).request_end(id)
    }
}

/// Writes request starts and ends to the `log` facade.
#[derive(Default)]
pub struct LogListener {
    started: RefCell<HashMap<u32, Instant>>,
}

impl LogListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_flight(&self) -> usize {
        self.started.borrow().len()
    }
}

impl Listener for LogListener {
    fn request_start(&self, id: u32, url: &str, options: &TransportOptions) -> Result<()> {
        log::info!("[{}] {} {}", id, options.http.method, url);
        for line in &options.http.header {
            log::debug!("[{}] {}", id, line);
        }
        self.started.borrow_mut().insert(id, Instant::now());
        Ok(())
    }

    fn request_end(&self, id: u32) -> Result<()> {
        match self.started.borrow_mut().remove(&id) {
            Some(started) => log::info!("[{}] finished in {:?}", id, started.elapsed()),
            None => log::info!("[{}] finished", id),
        }
        Ok(())
    }
}
