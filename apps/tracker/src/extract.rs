use axum::extract::{FromRequestParts, Path};

use crate::errors::AppError;

/// `Path` extractor whose rejection (e.g. a non-numeric job id) is rendered
/// as the usual `{"error": ...}` body instead of axum's plain-text reply.
#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
