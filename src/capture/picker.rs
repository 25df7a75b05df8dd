/// Getting capture bytes off disk
///
/// Both entry points only read; the result still has to go through
/// the validator before it becomes the selected file.

use rfd::AsyncFileDialog;
use std::path::PathBuf;

use super::validator;

/// A file read from disk, not yet validated
#[derive(Debug, Clone)]
pub struct PickedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Show the native file picker and read the chosen capture.
/// Returns `None` if the user cancelled the dialog.
pub async fn pick_capture() -> Option<PickedFile> {
    // The filter only narrows what the dialog shows; the validator decides
    let handle = AsyncFileDialog::new()
        .set_title("Select IQ Capture")
        .add_filter("IQ capture", validator::dialog_extensions().as_slice())
        .add_filter("All files", &["*"])
        .pick_file()
        .await?;

    let name = handle.file_name();
    let bytes = handle.read().await;

    tracing::debug!("📂 Picked {} ({} bytes)", name, bytes.len());

    Some(PickedFile { name, bytes })
}

/// Read a capture from a path given on the command line
pub async fn read_capture(path: PathBuf) -> Result<PickedFile, String> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| format!("Not a file path: {}", path.display()))?;

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    Ok(PickedFile { name, bytes })
}
