//! Response texts. Clients match on these, so they are part of the API.

use fstore_store::StoreError;
use fstore_types::FileName;

pub const FILES_UPLOADED: &str = "Files uploaded successfully";
pub const INTERNAL_ERROR: &str = "Internal server error";

pub fn removed(name: &FileName) -> String {
    format!("File {name} removed successfully.")
}

pub fn remove_not_found(name: &FileName) -> String {
    format!("File {name} not found.")
}

pub fn updated(name: &FileName) -> String {
    format!("File {name} updated successfully.")
}

pub fn update_not_found(name: &FileName) -> String {
    format!("File {name} does not exist.")
}

/// Text for a store outcome that is not an I/O fault.
pub fn rejection(err: &StoreError) -> String {
    match err {
        StoreError::NameExists(name) => format!("File {name} already exists."),
        StoreError::DuplicateContent { name, .. } => {
            format!("File with the same content as {name} already exists.")
        }
        StoreError::NotFound(name) => remove_not_found(name),
        StoreError::InvalidName(name) => format!("Invalid file name: {name}"),
        StoreError::Io(_) => INTERNAL_ERROR.to_string(),
    }
}
