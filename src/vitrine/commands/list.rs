use crate::commands::{CmdMessage, CmdResult, FilterSettings, Showcase};
use crate::error::Result;
use crate::store::CatalogStore;

/// Renders one page of the catalog: filtered by `filter`, expanded to every
/// match when `show_all` is set.
pub fn run<S: CatalogStore>(
    store: &S,
    settings: &FilterSettings,
    filter: &str,
    show_all: bool,
) -> Result<CmdResult> {
    let catalog = store.load()?;
    let mut showcase = Showcase::new(catalog, settings);

    showcase.filter.set_filter(filter);
    if show_all {
        showcase.filter.expand();
    }
    showcase.filter.reveal_all();

    let mut result = showcase.snapshot();
    if result.listed_items.is_empty() && !showcase.filter.items().is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No {}s tagged \"{}\".",
            showcase.filter.noun().to_lowercase(),
            filter
        )));
    }
    Ok(result)
}
