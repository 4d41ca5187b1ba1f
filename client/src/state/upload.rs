//! CSV upload selection.
//!
//! Holds at most one picked file plus an in-flight flag. Every attempt ends
//! with the selection cleared, whether the server accepted the file or not.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::net::api::ApiError;
use crate::net::types::{CsvFile, UploadResponse};
use crate::state::toast::Toast;

/// Why an upload could not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadBlocked {
    NoFile,
    InFlight,
}

impl UploadBlocked {
    /// Toast for the user, if this case warrants one.
    #[must_use]
    pub fn toast(self) -> Option<Toast> {
        match self {
            Self::NoFile => Some(Toast::destructive("No file selected", "Please select a CSV file to upload.")),
            Self::InFlight => None,
        }
    }
}

/// Result of a finished upload attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadOutcome {
    pub toast: Toast,
    /// The listing should re-fetch its current page.
    pub refresh: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadSelection {
    file: Option<CsvFile>,
    uploading: bool,
}

impl UploadSelection {
    #[must_use]
    pub fn file(&self) -> Option<&CsvFile> {
        self.file.as_ref()
    }

    #[must_use]
    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Whether the upload button is enabled.
    #[must_use]
    pub fn can_upload(&self) -> bool {
        self.file.is_some() && !self.uploading
    }

    /// Replace the pending file. Ignored while an upload is in flight.
    pub fn select(&mut self, file: CsvFile) {
        if !self.uploading {
            self.file = Some(file);
        }
    }

    /// Mark the upload as started and hand out the file to send.
    ///
    /// # Errors
    ///
    /// Fails when nothing is selected or an upload is already running.
    pub fn begin(&mut self) -> Result<CsvFile, UploadBlocked> {
        if self.uploading {
            return Err(UploadBlocked::InFlight);
        }
        let file = self.file.clone().ok_or(UploadBlocked::NoFile)?;
        self.uploading = true;
        Ok(file)
    }

    /// Finish the attempt: clear the selection and describe what to show.
    pub fn finish(&mut self, result: Result<UploadResponse, ApiError>) -> UploadOutcome {
        self.file = None;
        self.uploading = false;
        match result {
            Ok(resp) => UploadOutcome {
                toast: Toast::success(
                    "Upload Successful",
                    format!("{} products have been uploaded and processed.", resp.inserted_count),
                ),
                refresh: true,
            },
            Err(e) => {
                log::error!("upload error: {e}");
                UploadOutcome {
                    toast: Toast::destructive("Upload Failed", "There was an error uploading your CSV file."),
                    refresh: false,
                }
            }
        }
    }
}
