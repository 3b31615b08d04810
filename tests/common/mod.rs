use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use linerun::errors::{LaunchError, LaunchResult};
use linerun::exec::LaunchBackend;

/// A fake launcher that:
/// - records every flushed batch (lines rendered as strings)
/// - optionally fails every launch, to exercise error containment.
pub struct FakeLauncher {
    batches: Arc<Mutex<Vec<Vec<String>>>>,
    fail_all: bool,
}

impl FakeLauncher {
    pub fn new() -> Self {
        Self {
            batches: Arc::new(Mutex::new(Vec::new())),
            fail_all: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            batches: Arc::new(Mutex::new(Vec::new())),
            fail_all: true,
        }
    }

    pub fn batches(&self) -> Vec<Vec<String>> {
        self.batches.lock().unwrap().clone()
    }
}

impl LaunchBackend for FakeLauncher {
    fn launch(
        &mut self,
        lines: Vec<Vec<u8>>,
    ) -> Pin<Box<dyn Future<Output = LaunchResult<()>> + Send + '_>> {
        let batches = Arc::clone(&self.batches);
        let fail_all = self.fail_all;

        Box::pin(async move {
            let batch: Vec<String> = lines
                .iter()
                .map(|l| String::from_utf8_lossy(l).into_owned())
                .collect();

            batches.lock().unwrap().push(batch);

            if fail_all {
                Err(LaunchError::Spawn {
                    command: "fake".to_string(),
                    args: Vec::new(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "fake launcher failure",
                    ),
                })
            } else {
                Ok(())
            }
        })
    }
}
