use crate::collection::{Collection, SaveOutcome};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use std::path::Path;

/// Saves an open collection, to `path` or to its bound file.
///
/// An unbound collection without a path is reported as a warning so the caller
/// can ask for a location; nothing is written.
pub fn run(collection: &mut Collection, path: Option<&Path>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match collection.save(path)? {
        SaveOutcome::Saved(target) => result.add_message(CmdMessage::success(format!(
            "Saved {} to {}",
            collection.name(),
            target.display()
        ))),
        SaveOutcome::Unsaved => result.add_message(CmdMessage::warning(format!(
            "{} has no file yet; choose a path to save it",
            collection.name()
        ))),
    }
    Ok(result)
}
