use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Check that an output file may be created or overwritten.
///
/// - missing file: Ok
/// - existing file with `force`: Ok
/// - existing file without `force`: ask on stdin
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    confirm_overwrite(io::stdin().lock())
}

fn confirm_overwrite<R: BufRead>(mut input: R) -> AppResult<()> {
    let mut answer = String::new();
    input.read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Existing file will be overwritten.");
            Ok(())
        }
        _ => Err(AppError::Export(
            "cancelled: existing file not overwritten".to_string(),
        )),
    }
}

/// Create the parent directory of an output path if needed.
pub(crate) fn ensure_parent(path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_overwrites() {
        assert!(confirm_overwrite("y\n".as_bytes()).is_ok());
        assert!(confirm_overwrite("YES\n".as_bytes()).is_ok());
    }

    #[test]
    fn anything_else_cancels() {
        assert!(matches!(
            confirm_overwrite("\n".as_bytes()),
            Err(AppError::Export(_))
        ));
        assert!(confirm_overwrite("nope\n".as_bytes()).is_err());
    }

    #[test]
    fn missing_file_is_writable() {
        let p = std::env::temp_dir().join("rmoodlog_never_created.csv");
        assert!(ensure_writable(&p, false).is_ok());
    }
}
