// Records exchanged with the doggo.ninja API. They live for a single
// command invocation and are never persisted.

use serde::{Deserialize, Serialize};

/// Account information returned by `GET me`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(rename = "admin")]
    pub is_admin: bool,
    #[serde(rename = "usage")]
    pub usage_bytes: i64,
    // The API has shipped this key misspelled with three r's
    #[serde(rename = "preferredDomain", alias = "preferrredDomain")]
    pub preferred_domain: String,
}

/// One entry of `GET files`. `short_name` identifies the file on the
/// server; `original_name` is what the user uploaded it as and is not
/// guaranteed to be unique.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct File {
    pub url: String,
    pub short_name: String,
    pub original_name: String,
    pub mime_type: String,
    #[serde(rename = "size")]
    pub size_bytes: i64,
}

/// Response of `POST upload`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    pub url: String,
    #[serde(rename = "size")]
    pub size_bytes: u64,
}

/// What happened to a delete-by-name request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { short_name: String },
    NotFound,
}

/// How `delete --all` walks the file list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteAllMode {
    /// Delete each file by its original name, re-listing before every
    /// deletion (one extra `GET files` per file).
    #[default]
    Relist,
    /// List once and delete every entry by its short name.
    Snapshot,
}

/// Progress reported while deleting everything.
#[derive(Debug)]
pub enum DeleteAllEvent<'a> {
    Started(&'a File),
    Finished(&'a File, &'a DeleteOutcome),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_decodes_wire_names() {
        let user: User = serde_json::from_value(json!({
            "id": "u1",
            "name": "rex",
            "admin": true,
            "usage": 1500000,
            "preferrredDomain": "doggo.ninja"
        }))
        .unwrap();

        assert_eq!(user.name, "rex");
        assert!(user.is_admin);
        assert_eq!(user.usage_bytes, 1_500_000);
        assert_eq!(user.preferred_domain, "doggo.ninja");
    }

    #[test]
    fn user_accepts_correct_spelling_and_missing_keys() {
        let user: User = serde_json::from_value(json!({
            "name": "rex",
            "preferredDomain": "pat.doggo.ninja"
        }))
        .unwrap();

        assert_eq!(user.preferred_domain, "pat.doggo.ninja");
        assert!(!user.is_admin);
        assert_eq!(user.usage_bytes, 0);
    }

    #[test]
    fn file_list_decodes_in_order() {
        let files: Vec<File> = serde_json::from_value(json!([
            {"url": "https://pat.doggo.ninja/a", "shortName": "a", "originalName": "one.txt", "mimeType": "text/plain", "size": 3},
            {"url": "https://pat.doggo.ninja/b", "shortName": "b", "originalName": "two.png", "mimeType": "image/png", "size": 1024}
        ]))
        .unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].short_name, "a");
        assert_eq!(files[1].original_name, "two.png");
        assert_eq!(files[1].size_bytes, 1024);
    }

    #[test]
    fn file_with_wrong_type_is_rejected() {
        let res: Result<Vec<File>, _> = serde_json::from_value(json!([{"size": "big"}]));
        assert!(res.is_err());
    }

    #[test]
    fn upload_result_requires_both_keys() {
        let ok: UploadResult =
            serde_json::from_value(json!({"url": "https://pat.doggo.ninja/x", "size": 12})).unwrap();
        assert_eq!(ok.size_bytes, 12);

        let missing: Result<UploadResult, _> = serde_json::from_value(json!({"url": "x"}));
        assert!(missing.is_err());
    }
}
