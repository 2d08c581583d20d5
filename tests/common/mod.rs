#![allow(dead_code)]

use std::path::Path;

use tscrelay::exec::InvocationRequest;

pub use tscrelay_test_utils::{init_tracing, with_timeout};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// `/bin/sh -c <script>` run in `cwd`.
pub fn sh(script: &str, cwd: &Path) -> InvocationRequest {
    InvocationRequest::new("/bin/sh", cwd).arg("-c").arg(script)
}

/// The scenario from the tsc output docs: info, error, info.
pub const TSC_SAMPLE: &str = "Compiling...\nfoo.ts(3,1): error TS1005: x\nDone\n";
