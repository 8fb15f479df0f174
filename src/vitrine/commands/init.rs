use crate::commands::{CmdMessage, CmdResult, VitrinePaths};
use crate::config::VitrineConfig;
use crate::error::Result;
use crate::model::Scope;

/// Creates the scope directory with a default config. An existing config is
/// left as it is.
pub fn run(paths: &VitrinePaths, scope: Scope) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    let mut result = CmdResult::default();

    if dir.join("config.json").exists() {
        result.add_message(CmdMessage::info(format!(
            "Already initialized at {}",
            dir.display()
        )));
        return Ok(result);
    }

    let config = VitrineConfig::default();
    config.save(&dir)?;
    result.add_message(CmdMessage::success(format!(
        "Initialized vitrine at {}",
        dir.display()
    )));
    Ok(result.with_config(config))
}
