use log::debug;
use std::io::{Read, Write};
use std::process::{Command, Output, Stdio};
use std::thread;

use super::locator::Backend;
use crate::error::BackendError;
use crate::model::{Mode, Selection};

/// Move one payload between the standard streams and `backend`.
///
/// Returns the number of payload bytes transferred.
pub fn run<R: Read, W: Write>(
    mode: Mode,
    selection: Selection,
    backend: &Backend,
    input: &mut R,
    output: &mut W,
) -> Result<usize, BackendError> {
    // win32yank/win32yoink have a single store; selection is not forwarded.
    debug!("Selection '{}' maps to the shared Windows clipboard", selection);

    match mode {
        Mode::Copy => copy(backend, input),
        Mode::Paste => paste(backend, output),
    }
}

/// Read `input` to end-of-stream and hand it to the backend's `-i` mode.
pub fn copy<R: Read>(backend: &Backend, input: &mut R) -> Result<usize, BackendError> {
    let mut payload = Vec::new();
    input.read_to_end(&mut payload).map_err(BackendError::Stdin)?;
    debug!("Read {} bytes from standard input", payload.len());

    let mut child = Command::new(&backend.path)
        .arg(Mode::Copy.backend_flag())
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| BackendError::Launch {
            path: backend.path.clone(),
            source,
        })?;

    // Feed stdin from a second thread so stderr is drained while we write.
    let stdin = child.stdin.take();
    let bytes = &payload;
    let (written, result) = thread::scope(|scope| {
        let writer = scope.spawn(move || match stdin {
            Some(mut stdin) => stdin.write_all(bytes),
            None => Ok(()),
        });
        let result = child.wait_with_output();
        let written = writer
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
        (written, result)
    });

    let result = result.map_err(|source| BackendError::Read {
        backend: backend.name.clone(),
        source,
    })?;
    // A backend that quits early breaks the pipe; its own status explains why.
    check_status(backend, &result)?;
    written.map_err(|source| BackendError::Write {
        backend: backend.name.clone(),
        source,
    })?;

    debug!("Copied {} bytes via {}", payload.len(), backend.name);
    Ok(payload.len())
}

/// Run the backend's `-o` mode and write its output verbatim to `output`.
pub fn paste<W: Write>(backend: &Backend, output: &mut W) -> Result<usize, BackendError> {
    let result = Command::new(&backend.path)
        .arg(Mode::Paste.backend_flag())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| BackendError::Launch {
            path: backend.path.clone(),
            source,
        })?;
    check_status(backend, &result)?;

    output.write_all(&result.stdout).map_err(BackendError::Stdout)?;
    output.flush().map_err(BackendError::Stdout)?;

    debug!("Pasted {} bytes via {}", result.stdout.len(), backend.name);
    Ok(result.stdout.len())
}

fn check_status(backend: &Backend, result: &Output) -> Result<(), BackendError> {
    if result.status.success() {
        return Ok(());
    }
    Err(BackendError::Failed {
        backend: backend.name.clone(),
        status: result.status,
        stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
    })
}
