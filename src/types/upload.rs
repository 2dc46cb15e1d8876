use serde::{Deserialize, Serialize};

/// Response of `POST /uploadfile/`: the filename as the client sent it.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct UploadedFile {
    pub filename: String,
}
