//! Language commands.

use anyhow::{bail, Result};
use aura_commerce::locale::Language;

use super::{LangArgs, LangCommand};
use crate::context::Context;

/// Run the lang command.
pub async fn run(args: LangArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let mut languages = ctx.language_store(&store);

    match args.command.unwrap_or(LangCommand::Show) {
        LangCommand::Show => {
            let current = languages.language();
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "language": current }));
                return Ok(());
            }
            ctx.output.header("Language");
            for language in Language::ALL {
                let marker = if language == current { "*" } else { " " };
                ctx.output.list_item(&format!(
                    "{} {} ({})",
                    marker,
                    language.native_name(),
                    language.code()
                ));
            }
        }
        LangCommand::Set { language } => {
            if !languages.set(language) {
                bail!("Failed to save language, keeping {}", languages.language());
            }
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "language": language }));
            } else {
                ctx.output
                    .success(&format!("Language set to {}", language.native_name()));
            }
        }
    }

    Ok(())
}
