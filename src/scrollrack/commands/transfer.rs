use crate::collection::{Collection, RowFilter};
use crate::commands::{cards, CmdMessage, CmdResult};
use crate::error::{Result, ScrollError};
use crate::store::CollectionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMode {
    Copy,
    Move,
}

/// Copies or moves the rows of `source` matching `filter` to the end of
/// `target`, creating `target` if it does not exist yet.
pub fn run<S: CollectionStore>(
    store: &mut S,
    source: &str,
    target: &str,
    filter: &RowFilter,
    mode: TransferMode,
) -> Result<CmdResult> {
    if store.resolve(source) == store.resolve(target) {
        return Err(ScrollError::Api(format!(
            "Source and target are both {}",
            source
        )));
    }

    let mut from = store.load(source)?;
    let mut result = CmdResult::default();
    if from.select_where(filter) == 0 {
        result.add_message(CmdMessage::warning(format!(
            "No rows in {} match {}={}",
            from.name(),
            filter.column,
            filter.needle
        )));
        return Ok(result);
    }

    let mut to = if store.exists(target) {
        store.load(target)?
    } else {
        Collection::named(target)
    };

    let count = from.selected_count();
    match mode {
        TransferMode::Copy => to.add_cards(&from.copy_selected()),
        TransferMode::Move => from.move_selected(&mut to),
    }
    to.clear_selection();

    // Target before source
    store.save(&mut to)?;
    if mode == TransferMode::Move {
        store.save(&mut from)?;
    }

    let verb = match mode {
        TransferMode::Copy => "Copied",
        TransferMode::Move => "Moved",
    };
    result.add_message(CmdMessage::success(format!(
        "{} {} from {} to {}",
        verb,
        cards(count),
        from.name(),
        to.name()
    )));
    Ok(result.with_collection(to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{self, names};
    use crate::commands::MessageLevel;
    use crate::store::fs::FileStore;

    fn commons() -> RowFilter {
        "rarity=C".parse().unwrap()
    }

    #[test]
    fn copy_leaves_source_alone() {
        let mut store = fixtures::store();
        run(&mut store, "Binder", "Commons", &commons(), TransferMode::Copy).unwrap();
        assert_eq!(names(&store.load("Commons").unwrap()), vec!["Shock", "Duress"]);
        assert_eq!(store.load("Binder").unwrap().row_count(), 4);
    }

    #[test]
    fn move_removes_from_source() {
        let mut store = fixtures::store();
        let result = run(&mut store, "Binder", "Trade", &commons(), TransferMode::Move).unwrap();
        assert_eq!(result.messages[0].content, "Moved 2 cards from Binder to Trade");
        assert_eq!(names(&store.load("Binder").unwrap()), vec!["Thragtusk", "Abrade"]);
        assert_eq!(store.load("Trade").unwrap().row_count(), 2);
    }

    #[test]
    fn move_appends_to_existing_target() {
        let mut store = fixtures::store();
        run(&mut store, "Binder", "Trade", &commons(), TransferMode::Copy).unwrap();
        let rares: RowFilter = "rarity=r".parse().unwrap();
        run(&mut store, "Binder", "Trade", &rares, TransferMode::Move).unwrap();
        assert_eq!(
            names(&store.load("Trade").unwrap()),
            vec!["Shock", "Duress", "Thragtusk"]
        );
    }

    #[test]
    fn refuses_a_path_to_the_source_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.save(&mut fixtures::store().load("Binder").unwrap()).unwrap();
        let same_file = dir.path().join("Binder.csv");

        let err = run(
            &mut store,
            "Binder",
            same_file.to_str().unwrap(),
            &commons(),
            TransferMode::Move,
        );
        assert!(matches!(err, Err(ScrollError::Api(_))));
        assert_eq!(store.load("Binder").unwrap().row_count(), 4);
    }

    #[test]
    fn no_match_is_a_warning() {
        let mut store = fixtures::store();
        let none: RowFilter = "name=Lotus".parse().unwrap();
        let result = run(&mut store, "Binder", "Trade", &none, TransferMode::Move).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(!store.exists("Trade"));
    }
}
