/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse` so handlers can return it with
 * `?`. Clients only ever see the status code: the body is empty and the
 * error itself is logged here, at the edge.
 */

use axum::{
    body::Body,
    response::{IntoResponse, Response},
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("request failed with {}: {}", status, self);
        } else {
            tracing::warn!("request rejected with {}: {}", status, self);
        }

        let mut response = Response::new(Body::empty());
        *response.status_mut() = status;
        response
    }
}
