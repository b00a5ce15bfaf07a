//! Drop-in replacements for axum's `Path` and `Query` whose rejections go
//! through the error classifier instead of axum's plain-text responses.

use axum::extract::FromRequestParts;
use campus_core::AppError;

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Query<T>(pub T);
