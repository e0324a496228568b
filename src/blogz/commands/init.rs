use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnapshotBackend;

/// Create an empty snapshot unless one already exists.
pub fn run<B: SnapshotBackend>(backend: &B) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if backend.exists() {
        result.add_message(CmdMessage::warning(format!(
            "Article store already initialized at {}; left untouched",
            backend.location()
        )));
        return Ok(result);
    }

    backend.save(&[])?;
    result.add_message(CmdMessage::success(format!(
        "Initialized article store at {}",
        backend.location()
    )));
    Ok(result)
}
