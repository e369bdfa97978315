use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::wishlist::errors::WishlistError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for WishlistError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            WishlistError::IdEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "wishlist.id_empty",
            ),
            WishlistError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "wishlist.name_empty",
            ),
            WishlistError::PriceNegative => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "wishlist.price_negative",
            ),
            WishlistError::CartUnavailable => (
                StatusCode::BAD_GATEWAY,
                "BadGateway",
                "wishlist.cart_unavailable",
            ),
            WishlistError::CartRejected => {
                (StatusCode::CONFLICT, "Conflict", "wishlist.cart_rejected")
            }
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
