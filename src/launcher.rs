use crate::error::WrapperError;
use std::process::{Child, Command, ExitStatus};

/// Starts the capture tool and waits for it.
pub trait Launcher {
    /// Runs `program` with `args` and inherited standard streams, blocking
    /// until it exits.
    /// Returns: Ok(Some(code)) on normal exit, Ok(None) when a signal ended
    /// the process, or a `Launch` error if it could not be started.
    fn launch(&self, program: &str, args: &[String]) -> Result<Option<i32>, WrapperError>;
}

/// Launcher that spawns real processes.
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, program: &str, args: &[String]) -> Result<Option<i32>, WrapperError> {
        let launch_error = |source: std::io::Error| WrapperError::Launch {
            program: program.to_string(),
            source,
        };

        // stdin/stdout/stderr 全部继承，抓包工具的输出直接交给用户。
        let child = Command::new(program).args(args).spawn().map_err(launch_error)?;
        let status = ChildGuard::new(child).wait().map_err(launch_error)?;
        Ok(status.code())
    }
}

/// Owns a spawned child until it has been reaped. Dropping an unreaped
/// child kills it first so no capture keeps running behind the wrapper.
struct ChildGuard {
    child: Child,
    reaped: bool,
}

impl ChildGuard {
    fn new(child: Child) -> Self {
        Self {
            child,
            reaped: false,
        }
    }

    fn wait(mut self) -> std::io::Result<ExitStatus> {
        let status = self.child.wait()?;
        self.reaped = true;
        Ok(status)
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if self.reaped {
            return;
        }
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Default, Clone)]
    /// Records the last launch request.
    pub struct LaunchRecord {
        pub program: String,
        pub args: Vec<String>,
    }

    /// Test launcher that returns a fixed outcome and records calls.
    #[derive(Debug, Default)]
    pub struct FakeLauncher {
        pub exit_code: Option<i32>,
        pub fail: bool,
        pub calls: Mutex<Vec<LaunchRecord>>,
    }

    impl FakeLauncher {
        pub fn exiting_with(code: i32) -> Self {
            Self {
                exit_code: Some(code),
                ..Self::default()
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn calls(&self) -> Vec<LaunchRecord> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Launcher for FakeLauncher {
        fn launch(&self, program: &str, args: &[String]) -> Result<Option<i32>, WrapperError> {
            self.calls.lock().unwrap().push(LaunchRecord {
                program: program.to_string(),
                args: args.to_vec(),
            });
            if self.fail {
                return Err(WrapperError::Launch {
                    program: program.to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
                });
            }
            Ok(self.exit_code)
        }
    }
}
