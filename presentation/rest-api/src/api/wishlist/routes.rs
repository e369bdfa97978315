use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::shared::value_objects::ProductId;
use business::domain::wishlist::use_cases::add::{AddToWishlistParams, AddToWishlistUseCase};
use business::domain::wishlist::use_cases::clear::ClearWishlistUseCase;
use business::domain::wishlist::use_cases::get_all::GetWishlistUseCase;
use business::domain::wishlist::use_cases::get_count::GetItemCountUseCase;
use business::domain::wishlist::use_cases::is_in_wishlist::{
    IsInWishlistParams, IsInWishlistUseCase,
};
use business::domain::wishlist::use_cases::move_to_cart::{MoveToCartParams, MoveToCartUseCase};
use business::domain::wishlist::use_cases::remove::{
    RemoveFromWishlistParams, RemoveFromWishlistUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::wishlist::dto::{
    AddToWishlistRequest, CountResponse, MembershipResponse, MutationResponse,
    WishlistItemResponse, WishlistResponse,
};

pub struct WishlistApi {
    add_use_case: Arc<dyn AddToWishlistUseCase>,
    remove_use_case: Arc<dyn RemoveFromWishlistUseCase>,
    move_to_cart_use_case: Arc<dyn MoveToCartUseCase>,
    clear_use_case: Arc<dyn ClearWishlistUseCase>,
    is_in_wishlist_use_case: Arc<dyn IsInWishlistUseCase>,
    get_count_use_case: Arc<dyn GetItemCountUseCase>,
    get_all_use_case: Arc<dyn GetWishlistUseCase>,
}

impl WishlistApi {
    pub fn new(
        add_use_case: Arc<dyn AddToWishlistUseCase>,
        remove_use_case: Arc<dyn RemoveFromWishlistUseCase>,
        move_to_cart_use_case: Arc<dyn MoveToCartUseCase>,
        clear_use_case: Arc<dyn ClearWishlistUseCase>,
        is_in_wishlist_use_case: Arc<dyn IsInWishlistUseCase>,
        get_count_use_case: Arc<dyn GetItemCountUseCase>,
        get_all_use_case: Arc<dyn GetWishlistUseCase>,
    ) -> Self {
        Self {
            add_use_case,
            remove_use_case,
            move_to_cart_use_case,
            clear_use_case,
            is_in_wishlist_use_case,
            get_count_use_case,
            get_all_use_case,
        }
    }
}

/// Wishlist API
///
/// Items a shopper saved for later, kept in insertion order.
#[OpenApi]
impl WishlistApi {
    /// List wishlist items
    #[oai(path = "/wishlist/items", method = "get", tag = "ApiTags::Wishlist")]
    async fn get_all(&self) -> Json<WishlistResponse> {
        let items: Vec<WishlistItemResponse> = self
            .get_all_use_case
            .execute()
            .await
            .into_iter()
            .map(|i| i.into())
            .collect();
        let count = items.len() as u64;
        Json(WishlistResponse { items, count })
    }

    /// Add an item
    ///
    /// Adding an id that is already saved changes nothing and reports `affected: 0`.
    #[oai(path = "/wishlist/items", method = "post", tag = "ApiTags::Wishlist")]
    async fn add(&self, body: Json<AddToWishlistRequest>) -> AddToWishlistResponse {
        let item = match body.0.into_new_item() {
            Ok(item) => item,
            Err(err) => return AddToWishlistResponse::BadRequest(Json(err)),
        };

        match self
            .add_use_case
            .execute(AddToWishlistParams { item })
            .await
        {
            Ok(outcome) => AddToWishlistResponse::Ok(Json(outcome.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                AddToWishlistResponse::BadRequest(json)
            }
        }
    }

    /// Clear the wishlist
    #[oai(path = "/wishlist/items", method = "delete", tag = "ApiTags::Wishlist")]
    async fn clear(&self) -> Json<MutationResponse> {
        Json(self.clear_use_case.execute().await.into())
    }

    /// Check whether a product is saved
    #[oai(path = "/wishlist/items/:id", method = "get", tag = "ApiTags::Wishlist")]
    async fn is_in_wishlist(&self, id: Path<String>) -> Json<MembershipResponse> {
        let in_wishlist = self
            .is_in_wishlist_use_case
            .execute(IsInWishlistParams {
                id: ProductId::new(id.0.clone()),
            })
            .await;
        Json(MembershipResponse {
            id: id.0,
            in_wishlist,
        })
    }

    /// Remove an item
    ///
    /// Removing an id that is not saved is a no-op.
    #[oai(path = "/wishlist/items/:id", method = "delete", tag = "ApiTags::Wishlist")]
    async fn remove(&self, id: Path<String>) -> Json<MutationResponse> {
        let outcome = self
            .remove_use_case
            .execute(RemoveFromWishlistParams {
                id: ProductId::new(id.0),
            })
            .await;
        Json(outcome.into())
    }

    /// Move an item to the cart
    ///
    /// The item leaves the wishlist only once the cart accepted it.
    #[oai(
        path = "/wishlist/items/:id/move-to-cart",
        method = "post",
        tag = "ApiTags::Wishlist"
    )]
    async fn move_to_cart(&self, id: Path<String>) -> MoveToCartResponse {
        match self
            .move_to_cart_use_case
            .execute(MoveToCartParams {
                id: ProductId::new(id.0),
            })
            .await
        {
            Ok(outcome) => MoveToCartResponse::Ok(Json(outcome.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    409 => MoveToCartResponse::Conflict(json),
                    _ => MoveToCartResponse::BadGateway(json),
                }
            }
        }
    }

    /// Count saved items
    #[oai(path = "/wishlist/count", method = "get", tag = "ApiTags::Wishlist")]
    async fn count(&self) -> Json<CountResponse> {
        let count = self.get_count_use_case.execute().await as u64;
        Json(CountResponse { count })
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddToWishlistResponse {
    #[oai(status = 200)]
    Ok(Json<MutationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum MoveToCartResponse {
    #[oai(status = 200)]
    Ok(Json<MutationResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
