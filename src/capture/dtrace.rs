//! Bounded-duration profiler capture.
//!
//! Spawns DTrace (or any command printing the same line format), lets it
//! sample for the capture window, then sends SIGINT so it prints its
//! aggregation and exits. The profiler is expected to keep running for the
//! whole window; exiting early means it failed.

use crate::utils::config::{CAPTURE_POLL_INTERVAL, DTRACE_SCRIPT};
use crate::utils::error::CaptureError;
use log::{debug, info, warn};
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// What to run and for how long
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Profiler executable
    pub program: PathBuf,

    /// Arguments passed to the profiler
    pub args: Vec<String>,

    /// Capture window before the profiler is interrupted
    pub duration: Duration,
}

impl CaptureConfig {
    /// Run `program -n <kernel sampling script>` for `duration`
    pub fn dtrace(program: impl Into<PathBuf>, duration: Duration) -> Self {
        Self {
            program: program.into(),
            args: vec!["-n".to_string(), DTRACE_SCRIPT.to_string()],
            duration,
        }
    }
}

/// Run the profiler for the configured window and return its standard output
///
/// **Public** - main entry point for capturing
///
/// Standard error of the profiler is passed through to ours.
///
/// # Errors
/// * `CaptureError::StartFailed` - the program could not be spawned
/// * `CaptureError::ExitedEarly` - the program exited before the window elapsed
/// * `CaptureError::RunFailed` - the program exited unsuccessfully after SIGINT
/// * `CaptureError::Interrupt` - SIGINT could not be delivered
/// * `CaptureError::Io` - waiting on the program or reading its output failed
pub fn run_capture(config: &CaptureConfig) -> Result<String, CaptureError> {
    debug!("Spawning profiler: {}", config.program.display());

    let mut child = Command::new(&config.program)
        .args(&config.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| CaptureError::StartFailed {
            program: config.program.clone(),
            source,
        })?;

    info!("Running trace for {:?}...", config.duration);

    let Some(mut stdout) = child.stdout.take() else {
        abandon(&mut child);
        return Err(io::Error::other("profiler stdout was not captured").into());
    };

    // Drain stdout concurrently so a chatty profiler never blocks on a full pipe.
    // The thread ends once the child's end of the pipe closes.
    let reader = thread::spawn(move || -> io::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        stdout.read_to_end(&mut buffer)?;
        Ok(buffer)
    });

    let status = match supervise(&mut child, config.duration) {
        Ok(status) => status,
        Err(err) => {
            abandon(&mut child);
            return Err(err);
        }
    };

    let output = reader
        .join()
        .map_err(|_| io::Error::other("profiler output reader panicked"))??;

    if !status.success() {
        return Err(CaptureError::RunFailed(status));
    }

    debug!("Captured {} bytes of profiler output", output.len());

    Ok(String::from_utf8_lossy(&output).into_owned())
}

/// Wait out the capture window, then SIGINT the profiler and wait for it to exit
fn supervise(child: &mut Child, window: Duration) -> Result<ExitStatus, CaptureError> {
    let deadline = Instant::now() + window;
    loop {
        if let Some(status) = child.try_wait()? {
            warn!("Profiler exited before the capture window elapsed ({})", status);
            return Err(CaptureError::ExitedEarly { status, window });
        }

        let now = Instant::now();
        if now >= deadline {
            break;
        }
        thread::sleep(CAPTURE_POLL_INTERVAL.min(deadline - now));
    }

    debug!("Capture window elapsed, interrupting profiler (pid {})", child.id());
    kill(Pid::from_raw(child.id() as i32), Signal::SIGINT)?;

    Ok(child.wait()?)
}

/// Kill and reap a profiler we are giving up on. Errors are ignored: the
/// child may already have exited and been reaped.
fn abandon(child: &mut Child) {
    debug!("Stopping profiler (pid {})", child.id());
    let _ = child.kill();
    let _ = child.wait();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtrace_config() {
        let config = CaptureConfig::dtrace("/usr/sbin/dtrace", Duration::from_secs(5));
        assert_eq!(config.args.len(), 2);
        assert_eq!(config.args[0], "-n");
        assert!(config.args[1].contains("profile-1001hz"));
        assert!(config.args[1].contains("printa(\"%a %@d\\n\", @pc);"));
    }

    #[test]
    fn test_abandon_reaps_running_child() {
        let mut child = Command::new("/bin/sh")
            .args(["-c", "sleep 10"])
            .spawn()
            .unwrap();

        abandon(&mut child);

        assert!(child.try_wait().unwrap().is_some());
    }

    #[test]
    fn test_abandon_after_exit_is_harmless() {
        let mut child = Command::new("/bin/sh").args(["-c", "exit 0"]).spawn().unwrap();
        child.wait().unwrap();

        abandon(&mut child);

        assert!(child.try_wait().unwrap().is_some());
    }

    #[test]
    fn test_missing_program_fails_to_start() {
        let config = CaptureConfig::dtrace("/nonexistent/dtrace", Duration::from_millis(10));
        let err = run_capture(&config).unwrap_err();
        assert!(matches!(err, CaptureError::StartFailed { .. }));
    }
}
