//! Save command implementation
//!
//! Writes the CSV downloads of the last loaded page into a directory.

use std::path::PathBuf;

use crate::commands::{CommandContext, Execute};
use crate::error::{CliError, Result};
use crate::export;
use crate::types::Outcome;

pub struct SaveCommand {
    /// Target directory; falls back to the configured download dir
    pub dir: Option<PathBuf>,
}

impl SaveCommand {
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }
}

impl Execute for SaveCommand {
    fn execute(&self, ctx: &mut CommandContext) -> Result<Outcome> {
        let report = ctx.session.last_report().ok_or_else(|| {
            CliError::InvalidArguments("no page loaded yet".to_string())
        })?;

        let files = export::downloads(report)?;
        if files.is_empty() {
            return Ok(Outcome::Saved { files: Vec::new() });
        }

        let dir = self
            .dir
            .clone()
            .unwrap_or_else(|| ctx.config.download_dir.clone());
        let written = export::save_downloads(&dir, &files)?;
        Ok(Outcome::Saved { files: written })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::*;
    use std::fs;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("minibrowser-save-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn save_writes_table_csv() {
        let mut ctx = context();
        ctx.load_current().unwrap();
        let dir = temp_dir();

        let Outcome::Saved { files } = SaveCommand::new(Some(dir.clone()))
            .execute(&mut ctx)
            .unwrap()
        else {
            panic!("expected saved outcome");
        };
        assert_eq!(files, vec![dir.join("table_1.csv")]);
        assert_eq!(fs::read_to_string(&files[0]).unwrap(), "k,v\na,1\n");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn save_uses_configured_dir() {
        let mut ctx = context();
        let dir = temp_dir();
        ctx.config.download_dir = dir.clone();
        ctx.session.options.images = true;
        ctx.load_current().unwrap();

        SaveCommand::new(None).execute(&mut ctx).unwrap();
        assert!(dir.join("table_1.csv").exists());
        assert!(dir.join("images.csv").exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn save_with_nothing_to_write_creates_no_dir() {
        let mut ctx = context();
        ctx.session.options.tables = false;
        ctx.load_current().unwrap();
        let dir = temp_dir();

        let outcome = SaveCommand::new(Some(dir.clone())).execute(&mut ctx).unwrap();
        assert!(matches!(outcome, Outcome::Saved { ref files } if files.is_empty()));
        assert!(!dir.exists());
    }

    #[test]
    fn save_before_load_is_rejected() {
        let mut ctx = context();
        let err = SaveCommand::new(None).execute(&mut ctx).unwrap_err();
        assert!(matches!(err, CliError::InvalidArguments(_)));
    }
}
