//! User namespace lifecycle
//!
//! A namespace is one directory holding a user's three stores. Creating it
//! writes all three empty stores; removing it deletes the directory.

use std::fs;
use std::path::Component;
use std::path::Path;

use tracing::info;

use crate::config::paths::WalletsPaths;
use crate::error::WalletsError;

use super::file_io::write_records_atomic;

/// Reject names that are not a single plain path component
pub fn validate_user_name(user: &str) -> Result<(), WalletsError> {
    let mut components = Path::new(user).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name == user => Ok(()),
        _ => Err(WalletsError::Validation(format!(
            "Invalid user name: '{}'",
            user
        ))),
    }
}

/// Check whether a user's namespace exists
pub fn namespace_exists(paths: &WalletsPaths, user: &str) -> bool {
    paths.user_dir(user).is_dir()
}

/// Create a user's namespace with three empty stores
pub fn create_namespace(paths: &WalletsPaths, user: &str) -> Result<(), WalletsError> {
    validate_user_name(user)?;
    if namespace_exists(paths, user) {
        return Err(WalletsError::UserAlreadyExists(user.to_string()));
    }

    paths.ensure_directories()?;
    let dir = paths.user_dir(user);
    fs::create_dir(&dir)
        .map_err(|e| WalletsError::Io(format!("Failed to create {}: {}", dir.display(), e)))?;

    for file in [
        paths.accounts_file(user),
        paths.wallets_file(user),
        paths.funding_file(user),
    ] {
        if let Err(e) = write_records_atomic(&file, &[]) {
            let _ = fs::remove_dir_all(&dir);
            return Err(e);
        }
    }

    info!(user, "created user namespace");
    Ok(())
}

/// Delete a user's namespace and everything in it
pub fn remove_namespace(paths: &WalletsPaths, user: &str) -> Result<(), WalletsError> {
    validate_user_name(user)?;
    if !namespace_exists(paths, user) {
        return Err(WalletsError::UserNotFound(user.to_string()));
    }

    let dir = paths.user_dir(user);
    fs::remove_dir_all(&dir)
        .map_err(|e| WalletsError::Io(format!("Failed to remove {}: {}", dir.display(), e)))?;

    info!(user, "removed user namespace");
    Ok(())
}
