//! Admin upload of a game content-cache document.
//!
//! The uploaded JSON is parsed, season-filtered, remapped and merged into
//! the catalog tables in a single request. Per-record failures are logged
//! and skipped; only a document that cannot be read at all fails the request.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use paddock_core::content_cache::{ContentCache, SeasonFilter};
use paddock_core::content_import::{
    import_content_cache, ContentImportReport, ImportOptions, ImportSummary,
};
use paddock_db::PgCatalogStore;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Multipart field carrying the JSON document.
const FIELD_FILE: &str = "file";
/// Optional comma-separated list of seasons to import.
const FIELD_SEASON_FILTER: &str = "season_filter";
/// Optional flag; only the string `"true"` enables overwriting changed rows.
const FIELD_ALLOW_MODIFICATIONS: &str = "allow_modifications";

/// Body of a successful upload.
#[derive(Debug, Serialize)]
pub struct ContentCacheImportResponse {
    pub message: &'static str,
    pub results: ContentImportReport,
    pub summary: ImportSummary,
}

/// Fields collected from the upload form.
#[derive(Debug, Default)]
struct UploadForm {
    file: Option<Vec<u8>>,
    season_filter: Option<String>,
    allow_modifications: Option<String>,
}

/// POST /api/v1/admin/content-cache
///
/// Multipart fields: `file` (required, JSON), `season_filter` (optional,
/// e.g. `"5,6"`), `allow_modifications` (optional, `"true"` to overwrite).
pub async fn upload_content_cache(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<ContentCacheImportResponse>)> {
    let form = read_upload_form(multipart).await?;

    let bytes = form
        .file
        .ok_or_else(|| AppError::BadRequest("No file uploaded".into()))?;

    let options = ImportOptions {
        season_filter: match form.season_filter.as_deref() {
            Some(raw) => SeasonFilter::parse(raw)?,
            None => SeasonFilter::default(),
        },
        allow_modifications: form
            .allow_modifications
            .as_deref()
            .is_some_and(parse_flag),
    };

    let cache = ContentCache::from_slice(&bytes)?;

    tracing::info!(
        user_id = %admin.user_id,
        bytes = bytes.len(),
        shape = %cache.shape,
        "Content-cache upload received"
    );

    let store = PgCatalogStore::new(state.pool.clone());
    let results = import_content_cache(&store, cache, &options).await;
    let summary = results.summary(&options);

    tracing::info!(
        user_id = %admin.user_id,
        new = summary.total_new,
        modified = summary.total_modified,
        unchanged = summary.total_unchanged,
        applied = summary.modifications_applied,
        "Content-cache import finished"
    );

    Ok((
        StatusCode::CREATED,
        Json(ContentCacheImportResponse {
            message: "Content cache imported successfully",
            results,
            summary,
        }),
    ))
}

/// Drain the multipart stream into an [`UploadForm`].
///
/// Unknown fields are ignored. A `file` part that is not JSON is rejected
/// before its body is read.
async fn read_upload_form(mut multipart: Multipart) -> AppResult<UploadForm> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(FIELD_FILE) => {
                if !is_json_upload(field.file_name(), field.content_type()) {
                    return Err(AppError::BadRequest(
                        "Uploaded file must be a JSON document".into(),
                    ));
                }
                form.file = Some(field.bytes().await?.to_vec());
            }
            Some(FIELD_SEASON_FILTER) => form.season_filter = Some(field.text().await?),
            Some(FIELD_ALLOW_MODIFICATIONS) => {
                form.allow_modifications = Some(field.text().await?)
            }
            _ => {}
        }
    }

    Ok(form)
}

/// A part counts as JSON by `.json` extension or `application/json` type.
fn is_json_upload(file_name: Option<&str>, content_type: Option<&str>) -> bool {
    let by_name = file_name.is_some_and(|n| n.to_ascii_lowercase().ends_with(".json"));
    let by_type = content_type.is_some_and(|t| t.starts_with("application/json"));
    by_name || by_type
}

fn parse_flag(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("true")
}
