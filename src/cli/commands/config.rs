use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *edit_config {
            let env_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .ok();
            let used = open_in_editor(&path, &editor_candidates(editor.as_deref(), env_editor))?;
            success(format!("Configuration file edited with '{used}'"));

            // surface mistakes made in the editor right away
            if let Err(e) = Config::load_from(&path) {
                warning(format!("The edited configuration does not load: {e}"));
            }
        }
    }

    Ok(())
}

/// Editors to try, in order: `--editor`, `$EDITOR`/`$VISUAL`, platform default.
fn editor_candidates(requested: Option<&str>, env_editor: Option<String>) -> Vec<String> {
    let platform = if cfg!(target_os = "windows") {
        "notepad"
    } else {
        "nano"
    };

    let mut out: Vec<String> = Vec::new();
    for e in [requested.map(str::to_string), env_editor, Some(platform.to_string())]
        .into_iter()
        .flatten()
    {
        let e = e.trim().to_string();
        if !e.is_empty() && !out.contains(&e) {
            out.push(e);
        }
    }
    out
}

/// Run the first editor that exits successfully; its name is returned.
fn open_in_editor(path: &Path, candidates: &[String]) -> AppResult<String> {
    for editor in candidates {
        match Command::new(editor).arg(path).status() {
            Ok(s) if s.success() => return Ok(editor.clone()),
            Ok(s) => warning(format!("Editor '{editor}' exited with {s}")),
            Err(e) => warning(format!("Editor '{editor}' not available: {e}")),
        }
    }

    Err(AppError::Config(format!(
        "could not edit {} (tried: {})",
        path.display(),
        candidates.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_editor_comes_first_without_duplicates() {
        let c = editor_candidates(Some("vim"), Some("vim".into()));
        assert_eq!(c[0], "vim");
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn falls_back_to_platform_default() {
        let c = editor_candidates(None, None);
        assert_eq!(c.len(), 1);
        assert!(c[0] == "nano" || c[0] == "notepad");
    }

    #[test]
    fn missing_editors_are_a_config_error() {
        let err = open_in_editor(
            Path::new("/nonexistent/rmoodlog.conf"),
            &["rmoodlog-no-such-editor".to_string()],
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
