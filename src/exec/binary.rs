// src/exec/binary.rs

//! Direct execution of `binary`-format commands.
//!
//! The child's stdout and stderr are captured through two independent pipes
//! (never merged at the OS level, which can corrupt line boundaries). Each
//! pipe gets its own line-oriented reader task; both feed one fan-in channel
//! consumed by a single writer that owns the log session. The writer counts
//! end-of-stream tokens against the number of streams, so it only finishes
//! once every captured line has reached the log.
//!
//! Within one stream, line order is preserved exactly as produced. Across
//! the two streams, interleaving in the log is best-effort.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::errors::{Result, SdCmdError};
use crate::exec::executor::Executor;
use crate::exec::log_session::LogSession;

const OUTPUT_START_MARKER: &str = "mmmmmm START COMMAND OUTPUT mmmmmm";
const OUTPUT_FINISH_MARKER: &str = "mmmmmm FINISH COMMAND OUTPUT mmmmmm";

/// Number of independent output streams captured per process.
const STREAM_COUNT: usize = 2;

/// One event from a stream reader.
enum StreamEvent {
    Line(String),
    Eof,
}

/// Executor for `binary`-format commands: runs the resolved executable
/// directly, forwarding the trailing arguments, and multiplexes its output
/// into the log session.
pub struct BinaryCommand {
    path: PathBuf,
    args: Vec<String>,
    session: LogSession,
}

impl BinaryCommand {
    pub fn new(path: PathBuf, args: Vec<String>, session: LogSession) -> Self {
        Self {
            path,
            args,
            session,
        }
    }

    async fn run_inner(&mut self) -> Result<()> {
        info!(
            path = %self.path.display(),
            args = ?self.args,
            "starting command process"
        );
        let started = Instant::now();

        let mut child = Command::new(&self.path)
            .args(&self.args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| SdCmdError::CommandStart {
                path: self.path.clone(),
                source,
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or(SdCmdError::PipeSetup { stream: "stdout" })?;
        let stderr = child
            .stderr
            .take()
            .ok_or(SdCmdError::PipeSetup { stream: "stderr" })?;

        self.session.debug(OUTPUT_START_MARKER).await?;

        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<StreamEvent>();
        let stdout_reader = spawn_stream_reader(stdout, event_tx.clone());
        let stderr_reader = spawn_stream_reader(stderr, event_tx);

        // Single writer: exclusively owns the session until both readers
        // have reported end-of-stream.
        let session = &mut self.session;
        let writer = async move {
            let mut remaining = STREAM_COUNT;
            while remaining > 0 {
                match event_rx.recv().await {
                    Some(StreamEvent::Line(line)) => {
                        if let Err(err) = session.debug(&line).await {
                            warn!(error = %err, "failed to write captured line to command log");
                        }
                    }
                    Some(StreamEvent::Eof) => remaining -= 1,
                    None => break,
                }
            }
        };

        // Wait for the process AND for every captured line to reach the
        // log, whichever finishes last. The child closing its pipes on exit
        // is what drives the readers to EOF.
        let (wait_res, ()) = tokio::join!(child.wait(), writer);
        let status = wait_res?;

        // The readers have already queued their EOF tokens by the time the
        // writer finishes, so these joins return promptly.
        let _ = stdout_reader.await;
        let _ = stderr_reader.await;

        self.session.debug(OUTPUT_FINISH_MARKER).await?;
        self.session.debug(&timing_summary(started.elapsed())).await?;

        let code = exit_code_of(&status);
        info!(
            exit_code = code,
            success = status.success(),
            "command process exited"
        );

        if status.success() {
            Ok(())
        } else {
            Err(SdCmdError::CommandFailed { code })
        }
    }
}

impl Executor for BinaryCommand {
    fn run(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(self.run_inner())
    }
}

/// Read one stream line-by-line, forwarding each line to the fan-in channel
/// and a single EOF token once the stream closes. Read errors end the stream
/// the same way EOF does.
fn spawn_stream_reader<R>(stream: R, tx: UnboundedSender<StreamEvent>) -> JoinHandle<()>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = BufReader::new(stream).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if tx.send(StreamEvent::Line(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(StreamEvent::Eof);
    })
}

/// Exit code to report for a terminated child.
#[cfg(unix)]
fn exit_code_of(status: &ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    // Signal-terminated children have no exit code; report the conventional
    // 128 + signal instead.
    status
        .code()
        .unwrap_or_else(|| 128 + status.signal().unwrap_or(0))
}

#[cfg(not(unix))]
fn exit_code_of(status: &ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

/// One-line timing summary for the terminated child.
#[cfg(unix)]
fn timing_summary(_elapsed: Duration) -> String {
    use nix::sys::resource::{UsageWho, getrusage};
    match getrusage(UsageWho::RUSAGE_CHILDREN) {
        Ok(usage) => format!(
            "System Time: {:?}, User Time: {:?}",
            timeval_duration(usage.system_time()),
            timeval_duration(usage.user_time()),
        ),
        Err(err) => format!("System Time: unavailable ({err}), User Time: unavailable"),
    }
}

#[cfg(not(unix))]
fn timing_summary(elapsed: Duration) -> String {
    format!("Elapsed Time: {elapsed:?}")
}

#[cfg(unix)]
fn timeval_duration(tv: nix::sys::time::TimeVal) -> Duration {
    Duration::new(tv.tv_sec().max(0) as u64, (tv.tv_usec().max(0) as u32) * 1000)
}
