//! HTTP request handlers for the roster engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::RosterError;
use crate::sheet;

use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/convert", post(convert_handler))
        .route("/download/:name", get(download_handler))
        .with_state(state)
}

/// Handler for POST /convert.
///
/// Accepts a multipart-uploaded roster workbook, converts it, stages a copy
/// under the processed directory and returns the converted workbook as an
/// attachment.
async fn convert_handler(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing roster upload");

    let upload = match read_upload(&mut multipart).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            warn!(correlation_id = %correlation_id, "Upload missing 'file' field");
            return (StatusCode::BAD_REQUEST, Json(ApiError::missing_file())).into_response();
        }
        Err(message) => {
            warn!(
                correlation_id = %correlation_id,
                error = %message,
                "Malformed multipart upload"
            );
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiError::malformed_upload(message)),
            )
                .into_response();
        }
    };

    let started = Instant::now();
    match sheet::convert_roster(&upload, state.nicknames()) {
        Ok(output) => {
            let file_name = format!("{}.xlsx", Uuid::new_v4());
            let staged_path = state.processed_dir().join(&file_name);
            if let Err(error) = tokio::fs::write(&staged_path, &output).await {
                warn!(
                    correlation_id = %correlation_id,
                    error = %error,
                    "Failed to stage converted roster"
                );
                let staging: ApiErrorResponse = RosterError::Staging {
                    message: error.to_string(),
                }
                .into();
                return staging.into_response();
            }

            info!(
                correlation_id = %correlation_id,
                file_name = %file_name,
                input_bytes = upload.len(),
                output_bytes = output.len(),
                duration_us = started.elapsed().as_micros(),
                "Roster converted successfully"
            );
            attachment_response(&file_name, output)
        }
        Err(error) => {
            warn!(
                correlation_id = %correlation_id,
                error = %error,
                "Conversion failed"
            );
            let response: ApiErrorResponse = error.into();
            response.into_response()
        }
    }
}

/// Handler for GET /download/{name}.
///
/// Re-serves a previously staged converted workbook.
async fn download_handler(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    if name.contains('/') || name.contains('\\') || name.contains("..") {
        warn!(name = %name, "Rejected download with suspicious file name");
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiError::invalid_file_name(&name)),
        )
            .into_response();
    }

    match tokio::fs::read(state.processed_dir().join(&name)).await {
        Ok(bytes) => attachment_response(&name, bytes),
        Err(_) => (StatusCode::NOT_FOUND, Json(ApiError::file_not_found(&name))).into_response(),
    }
}

/// Reads the uploaded workbook bytes from the "file" multipart field.
async fn read_upload(multipart: &mut Multipart) -> Result<Option<Vec<u8>>, String> {
    while let Some(field) = multipart.next_field().await.map_err(|e| e.to_string())? {
        if field.name() == Some("file") {
            let bytes = field.bytes().await.map_err(|e| e.to_string())?;
            return Ok(Some(bytes.to_vec()));
        }
    }
    Ok(None)
}

fn attachment_response(file_name: &str, bytes: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={file_name}"),
            ),
        ],
        bytes,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NicknameTable;
    use axum::body::Body;
    use axum::http::Request;
    use rust_xlsxwriter::Workbook;
    use tempfile::TempDir;
    use tower::ServiceExt;

    const BOUNDARY: &str = "roster-test-boundary";

    fn create_test_state() -> (AppState, TempDir) {
        let nicknames = NicknameTable::from_entries([
            ("Cheung Ka Wui".to_string(), "Wui".to_string()),
            ("Chan Tai Man".to_string(), "Ming".to_string()),
        ]);
        let dir = TempDir::new().unwrap();
        let state = AppState::new(nicknames, dir.path().to_path_buf());
        (state, dir)
    }

    fn build_source_workbook() -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(crate::sheet::SOURCE_SHEET).unwrap();
        sheet.write_string(0, 0, "roster").unwrap();
        sheet.write_string(8, 2, "1 Mon").unwrap();
        sheet.write_string(8, 3, "2 Tue").unwrap();
        sheet.write_string(9, 0, "Chan Tai Man").unwrap();
        sheet.write_string(9, 1, "Sales Associate").unwrap();
        sheet.write_string(9, 2, "A 08:30-18:00").unwrap();
        sheet.write_string(9, 3, "OFF").unwrap();
        sheet.write_string(10, 0, "summary").unwrap();
        sheet.write_string(11, 0, "summary").unwrap();
        workbook.save_to_buffer().unwrap()
    }

    fn multipart_request(field_name: &str, file_bytes: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; \
                 name=\"{field_name}\"; filename=\"roster.xlsx\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(file_bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/convert")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_convert_returns_attachment() {
        let (state, _dir) = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(multipart_request("file", &build_source_workbook()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(disposition.starts_with("attachment; filename="));
        assert!(disposition.ends_with(".xlsx"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(!body.is_empty());
    }

    #[tokio::test]
    async fn test_convert_stages_a_copy_for_download() {
        let (state, _dir) = create_test_state();
        let router = create_router(state);

        let response = router
            .clone()
            .oneshot(multipart_request("file", &build_source_workbook()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let file_name = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .strip_prefix("attachment; filename=")
            .unwrap()
            .to_string();

        let download = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/download/{file_name}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(download.status(), StatusCode::OK);
        let body = axum::body::to_bytes(download.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(!body.is_empty());
    }

    #[tokio::test]
    async fn test_convert_without_file_field_returns_400() {
        let (state, _dir) = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(multipart_request("other", b"whatever"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MISSING_FILE");
    }

    #[tokio::test]
    async fn test_convert_with_non_workbook_returns_400() {
        let (state, _dir) = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(multipart_request("file", b"not a workbook"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "SPREADSHEET_READ");
    }

    #[tokio::test]
    async fn test_download_rejects_traversal_names() {
        let (state, _dir) = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/download/a..b.xlsx")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_FILE_NAME");
    }

    #[tokio::test]
    async fn test_download_missing_file_returns_404() {
        let (state, _dir) = create_test_state();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/download/missing.xlsx")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
