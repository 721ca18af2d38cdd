use anyhow::{bail, Result};

use crate::usecases::contracts::{BackendRequest, RequestDispatcher};

/// Dispatcher that records requests instead of running them.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    pub requests: Vec<BackendRequest>,
    fail: bool,
}

impl RecordingDispatcher {
    pub fn failing() -> Self {
        Self {
            requests: Vec::new(),
            fail: true,
        }
    }
}

impl RequestDispatcher for RecordingDispatcher {
    fn dispatch(&mut self, request: BackendRequest) -> Result<()> {
        if self.fail {
            bail!("request worker is gone");
        }

        self.requests.push(request);
        Ok(())
    }
}
