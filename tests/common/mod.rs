//! Shared test helpers

#![allow(dead_code)]

use ssacli_exporter::error::{ExporterError, Result};
use ssacli_exporter::ssacli::CommandRunner;
use std::collections::HashMap;
use std::sync::Mutex;

pub const CTRL_ALL_SHOW: &str = "
Smart Array P440ar in Slot 0 (Embedded)   (sn: PDNLH0BRH8X1CV)
Smart Array P840 in Slot 3                (sn: PDNNF0ARH6P03X)
";

pub const SLOT_0_LD_SHOW: &str = "
Smart Array P440ar in Slot 0 (Embedded)

   Array A

      logicaldrive 1 (279.4 GB, RAID 1, OK)

   Array B

      logicaldrive 2 (1.5 TB, RAID 0, Failed)
";

pub const SLOT_3_LD_SHOW: &str = "
Smart Array P840 in Slot 3

   Array A

      logicaldrive 1 (3.6 TB, RAID 1+0, OK)
";

/// Answers ssacli invocations from a table keyed by the joined argument list.
/// Unknown invocations fail as if the binary exited non-zero.
#[derive(Default)]
pub struct ScriptedRunner {
    responses: Mutex<HashMap<String, String>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, args: &str, output: &str) -> Self {
        self.set(args, output);
        self
    }

    pub fn set(&self, args: &str, output: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(args.to_string(), output.to_string());
    }

    pub fn unset(&self, args: &str) {
        self.responses.lock().unwrap().remove(args);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Runner for a host with controllers in slots 0 and 3
    pub fn two_controllers() -> Self {
        Self::new()
            .with("ctrl all show", CTRL_ALL_SHOW)
            .with("ctrl slot=0 ld all show", SLOT_0_LD_SHOW)
            .with("ctrl slot=3 ld all show", SLOT_3_LD_SHOW)
    }
}

impl CommandRunner for ScriptedRunner {
    async fn run(&self, args: &[String]) -> Result<String> {
        let key = args.join(" ");
        self.calls.lock().unwrap().push(key.clone());

        let response = self.responses.lock().unwrap().get(&key).cloned();
        response.ok_or_else(|| ExporterError::CommandLaunch {
            command: format!("ssacli {key}"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no scripted output"),
        })
    }
}
