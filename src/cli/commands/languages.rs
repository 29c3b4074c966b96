//! Language listing command.

use console::style;

use crate::config::Settings;
use crate::languages::LanguageList;

/// Print every supported language code with its English name.
pub async fn cmd_languages(settings: &Settings) -> anyhow::Result<()> {
    let languages = LanguageList::load_or_builtin(settings.languages_file.as_deref()).await?;

    for language in languages.iter() {
        let marker = if language.code == settings.default_language {
            style("*").green().to_string()
        } else {
            " ".to_string()
        };
        println!("{} {:<4} {}", marker, language.code, language.english);
    }

    eprintln!("{} languages", languages.len());
    Ok(())
}
