//! Checkout request assembly

use shared::client::{CheckoutItem, CheckoutRequest};
use uuid::Uuid;

use crate::cart::CartStore;
use crate::error::{ServiceError, ServiceResult};

/// Turn the current cart into a checkout submission
///
/// Line prices are the snapshot prices frozen at add time. Every call draws
/// a fresh uuid `request_id`, so retrying a failed submission builds a new
/// request while a backend-side duplicate of one request stays deduplicated.
pub fn build_checkout(
    order_id: &str,
    user_id: &str,
    cart: &CartStore,
) -> ServiceResult<CheckoutRequest> {
    let items: Vec<CheckoutItem> = cart
        .snapshot()
        .into_iter()
        .map(|line| CheckoutItem {
            product_id: line.product.id,
            name: line.product.name,
            unit_price: line.product.special_price,
            quantity: line.quantity,
        })
        .collect();

    if items.is_empty() {
        return Err(ServiceError::Validation("Cart is empty".to_string()));
    }

    Ok(CheckoutRequest {
        request_id: Uuid::new_v4().to_string(),
        order_id: order_id.to_string(),
        user_id: user_id.to_string(),
        items,
    })
}
