use http_facade::{Listener, Result, TransportOptions};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use tempfile::{NamedTempFile, TempPath};

pub fn create_file(contents: &str) -> TempPath {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", contents).unwrap();
    file.into_temp_path()
}

#[derive(Debug, Clone, PartialEq)]
pub enum Seen {
    Start(u32, String, serde_json::Value),
    End(u32),
}

#[derive(Default)]
pub struct RecordingListener(pub RefCell<Vec<Seen>>);

impl RecordingListener {
    pub fn shared() -> Rc<RecordingListener> {
        Rc::new(RecordingListener::default())
    }
}

impl Listener for RecordingListener {
    fn request_start(&self, id: u32, url: &str, options: &TransportOptions) -> Result<()> {
        let options = serde_json::to_value(options)?;
        self.0
            .borrow_mut()
            .push(Seen::Start(id, url.to_string(), options));
        Ok(())
    }

    fn request_end(&self, id: u32) -> Result<()> {
        self.0.borrow_mut().push(Seen::End(id));
        Ok(())
    }
}
