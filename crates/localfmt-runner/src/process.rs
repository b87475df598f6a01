//! Running a formatter process over stdio.
//!
//! The document is written to the formatter's stdin from a helper thread while stdout and
//! stderr are drained by two more threads, so a formatter that fills one pipe before reading
//! the other cannot deadlock. stderr lines are forwarded to the log as they arrive.

use crate::error::FormatError;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;
use std::process::{
    Child, ChildStderr, ChildStdin, ChildStdout, Command as ProcessCommand, ExitStatus, Stdio,
};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Log target used for everything a formatter writes to stderr.
pub const FORMATTER_OUTPUT_TARGET: &str = "localfmt::formatter";

const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Run `command` with `input` on stdin and return its stdout.
///
/// `command[0]` is the program, the rest are its arguments. Fails if the process cannot be
/// started, exits unsuccessfully, or writes non-UTF-8 output.
///
/// A `timeout` bounds the whole run, from spawning until the process exits; past it the
/// process is killed. Only the direct child is killed: a grandchild that inherited the
/// output pipes keeps running, and the helper thread reading them stays blocked until it
/// exits.
pub fn run_formatter(
    command: &[String],
    cwd: Option<&Path>,
    input: &str,
    timeout: Option<Duration>,
) -> Result<String, FormatError> {
    let (program, args) = command.split_first().ok_or(FormatError::EmptyCommand)?;

    log::info!(
        "Starting formatter: {}",
        serde_json::to_string(command).unwrap_or_else(|_| format!("{:?}", command))
    );

    let mut cmd = ProcessCommand::new(program);
    cmd.args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }

    let mut child = cmd.spawn().map_err(|source| FormatError::Spawn {
        program: program.clone(),
        source,
    })?;

    let stdin = child
        .stdin
        .take()
        .ok_or_else(|| io::Error::other("Failed to open formatter stdin"))?;
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| io::Error::other("Failed to open formatter stdout"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| io::Error::other("Failed to open formatter stderr"))?;

    let writer = {
        let input = input.to_owned();
        thread::spawn(move || write_input(stdin, input))
    };
    let stderr_reader = thread::spawn(move || forward_stderr(stderr));

    let (tx, rx) = mpsc::channel::<io::Result<Vec<u8>>>();
    thread::spawn(move || {
        let _ = tx.send(read_output(stdout));
    });

    let deadline = timeout.map(|timeout| Instant::now() + timeout);
    let received = match timeout {
        Some(timeout) => rx.recv_timeout(timeout).map_err(|err| match err {
            mpsc::RecvTimeoutError::Timeout => FormatError::Timeout(timeout),
            mpsc::RecvTimeoutError::Disconnected => {
                FormatError::Io(io::Error::other("formatter stdout reader stopped"))
            }
        }),
        None => rx
            .recv()
            .map_err(|_| FormatError::Io(io::Error::other("formatter stdout reader stopped"))),
    };

    let output = match received {
        Ok(output) => output,
        Err(err) => {
            log::warn!("{}; killing formatter", err);
            let _ = child.kill();
            let _ = child.wait();
            return Err(err);
        }
    };

    let status = match (deadline, timeout) {
        (Some(deadline), Some(timeout)) => wait_until(&mut child, deadline, timeout)?,
        _ => child.wait()?,
    };
    let _ = writer.join();
    let stderr = stderr_reader.join().unwrap_or_default();
    let output = output?;

    if !status.success() {
        log::error!("formatter exited with {}", status);
        return Err(FormatError::Failed {
            code: status.code(),
            stderr,
        });
    }

    Ok(String::from_utf8(output)?)
}

/// Wait for a child that already closed its stdout, killing it once `deadline` passes.
fn wait_until(
    child: &mut Child,
    deadline: Instant,
    timeout: Duration,
) -> Result<ExitStatus, FormatError> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        let now = Instant::now();
        if now >= deadline {
            log::warn!("formatter kept running after closing stdout; killing formatter");
            let _ = child.kill();
            let _ = child.wait();
            return Err(FormatError::Timeout(timeout));
        }
        thread::sleep(WAIT_POLL_INTERVAL.min(deadline - now));
    }
}

fn write_input(mut stdin: ChildStdin, input: String) {
    match stdin.write_all(input.as_bytes()) {
        Ok(()) => {}
        // The formatter may legitimately exit without reading everything; its exit status
        // decides whether the run failed.
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("formatter closed stdin early");
        }
        Err(err) => log::warn!("failed writing to formatter stdin: {}", err),
    }
}

fn read_output(mut stdout: ChildStdout) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    stdout.read_to_end(&mut buf)?;
    Ok(buf)
}

fn forward_stderr(stderr: ChildStderr) -> String {
    let mut reader = BufReader::new(stderr);
    let mut collected = String::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line) {
            Ok(0) => break,
            Ok(_) => {
                let text = String::from_utf8_lossy(&line);
                let trimmed = text.trim_end_matches(['\r', '\n']);
                log::info!(target: FORMATTER_OUTPUT_TARGET, "{}", trimmed);
                collected.push_str(&text);
            }
            Err(err) => {
                log::warn!("failed reading formatter stderr: {}", err);
                break;
            }
        }
    }

    collected
}
