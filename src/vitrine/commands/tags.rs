use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CatalogStore;

/// Lists the filter surface: every distinct tag with its item count.
pub fn run<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let catalog = store.load()?;
    Ok(CmdResult::default().with_tags(catalog.tag_counts()))
}
