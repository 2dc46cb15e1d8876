use axum::{
    Json,
    extract::{Multipart, State},
};

use crate::ShopError;
use crate::router::ShopState;
use crate::types::UploadedFile;

const FILE_FIELD: &str = "file";

/// POST /uploadfile/ -> writes the `file` part verbatim into the upload directory.
///
/// When the form repeats `file`, the last part wins.
pub async fn upload_file(
    State(state): State<ShopState>,
    mut multipart: Multipart,
) -> Result<Json<UploadedFile>, ShopError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().map(str::to_owned);
        let contents = field.bytes().await?;
        upload = Some((filename, contents));
    }

    let (filename, contents) = upload.ok_or(ShopError::MissingUpload)?;
    let filename = filename.ok_or(ShopError::MissingFilename)?;
    state.uploads.save(&filename, &contents).await?;
    Ok(Json(UploadedFile { filename }))
}
