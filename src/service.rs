// Service layer: the operations behind each command, composed from the
// raw API client and the models.

use crate::api::ApiClient;
use crate::mime::{detect_mime_type, encode_mime_type};
use crate::models::{DeleteAllEvent, DeleteAllMode, DeleteOutcome, File, UploadResult, User};
use anyhow::{anyhow, Context, Result};
use std::path::Path;

pub struct DoggoService {
    api: ApiClient,
}

impl DoggoService {
    pub fn new(api: ApiClient) -> Self {
        DoggoService { api }
    }

    /// Fetch the account behind the token.
    ///
    /// Unlike the other calls, a body that does not decode is not an
    /// error: it yields an empty `User`.
    pub fn fetch_user(&self) -> Result<User> {
        let res = self.api.get(self.api.endpoint("me")?)?;
        match serde_json::from_slice(&res.body) {
            Ok(user) => Ok(user),
            Err(e) => {
                tracing::debug!(status = %res.status, "Ignoring undecodable user body: {}", e);
                Ok(User::default())
            }
        }
    }

    /// List all files, in the order the server returns them.
    pub fn list_files(&self) -> Result<Vec<File>> {
        let res = self.api.get(self.api.endpoint("files")?)?;
        let files: Vec<File> = serde_json::from_slice(&res.body)
            .with_context(|| format!("Parsing file list ({})", res.status))?;
        tracing::debug!(count = files.len(), "Listed files");
        Ok(files)
    }

    /// Upload the file at `path`, streaming its content as the request
    /// body. The MIME type is sniffed from the content.
    pub fn upload_file(&self, path: &Path) -> Result<UploadResult> {
        let original_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| anyhow!("`{}` does not name a file", path.display()))?;

        let mime_type = detect_mime_type(path)?;
        let encoded = encode_mime_type(&mime_type);
        tracing::debug!(%mime_type, %original_name, "Uploading");

        // The MIME type is already escaped, so only the name goes through
        // the query encoder.
        let mut url = self.api.endpoint("upload")?;
        url.set_query(Some(&format!("mimeType={}", encoded)));
        url.query_pairs_mut().append_pair("originalName", &original_name);

        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        let res = self.api.post_octet_stream(url, file)?;

        serde_json::from_slice(&res.body)
            .with_context(|| format!("Parsing upload response ({})", res.status))
    }

    /// Delete the first file (in listing order) whose original name is
    /// exactly `original_name`. Finding nothing is not an error.
    pub fn delete_file(&self, original_name: &str) -> Result<DeleteOutcome> {
        let files = self.list_files()?;
        match files.into_iter().find(|f| f.original_name == original_name) {
            Some(file) => {
                self.delete_short_name(&file.short_name)?;
                Ok(DeleteOutcome::Deleted {
                    short_name: file.short_name,
                })
            }
            None => Ok(DeleteOutcome::NotFound),
        }
    }

    /// Delete every file, reporting progress through `on_event`. Stops at
    /// the first error, leaving the remaining files in place. Returns the
    /// number of files deleted.
    pub fn delete_all<F>(&self, mode: DeleteAllMode, mut on_event: F) -> Result<usize>
    where
        F: FnMut(DeleteAllEvent<'_>) -> Result<()>,
    {
        let files = self.list_files()?;
        let mut deleted = 0;

        for file in &files {
            on_event(DeleteAllEvent::Started(file))?;
            let outcome = match mode {
                DeleteAllMode::Relist => self.delete_file(&file.original_name)?,
                DeleteAllMode::Snapshot => {
                    self.delete_short_name(&file.short_name)?;
                    DeleteOutcome::Deleted {
                        short_name: file.short_name.clone(),
                    }
                }
            };
            if matches!(outcome, DeleteOutcome::Deleted { .. }) {
                deleted += 1;
            }
            on_event(DeleteAllEvent::Finished(file, &outcome))?;
        }

        Ok(deleted)
    }

    fn delete_short_name(&self, short_name: &str) -> Result<()> {
        let url = self.api.endpoint_with_segment("file", short_name)?;
        let res = self.api.delete(url)?;
        tracing::info!(%short_name, status = %res.status, "Deleted file");
        Ok(())
    }
}
