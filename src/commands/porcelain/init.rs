use crate::areas::repository::Repository;
use crate::artifacts::errors::StoreError;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    /// Create the store skeleton: `objects/`, `refs/heads/`, and HEAD
    ///
    /// Fails with [`StoreError::AlreadyInitialized`] when the skeleton
    /// pre-exists; callers needing idempotent setup use
    /// [`Repository::init_if_absent`].
    pub fn init(&mut self) -> anyhow::Result<()> {
        if self.refs().git_path().exists() {
            return Err(StoreError::AlreadyInitialized {
                path: self.path().to_path_buf(),
            }
            .into());
        }

        self.create_skeleton()
    }

    /// Like [`Repository::init`], but a no-op when already initialized
    ///
    /// Returns whether a new store was created.
    pub fn init_if_absent(&mut self) -> anyhow::Result<bool> {
        if self.refs().git_path().exists() {
            return Ok(false);
        }

        self.create_skeleton()?;
        Ok(true)
    }

    fn create_skeleton(&mut self) -> anyhow::Result<()> {
        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .git/objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .git/refs/heads directory")?;

        self.refs()
            .set_head(crate::areas::refs::DEFAULT_BRANCH)
            .context("Failed to create initial HEAD reference")?;

        writeln!(
            self.writer(),
            "Initialized empty repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::areas::repository::Repository;
    use crate::artifacts::errors::StoreError;

    #[test]
    fn init_if_absent_is_idempotent_while_init_is_not() -> anyhow::Result<()> {
        let dir = assert_fs::TempDir::new()?;
        let mut repository =
            Repository::new(&dir.path().to_string_lossy(), Box::new(std::io::sink()))?;

        assert!(repository.init_if_absent()?);
        assert!(!repository.init_if_absent()?);

        let error = repository.init().unwrap_err();
        assert!(matches!(
            error.downcast_ref::<StoreError>(),
            Some(StoreError::AlreadyInitialized { .. })
        ));
        Ok(())
    }
}
