//! REST bindings for the service traits
//!
//! Path and parameter layout of the storefront backend; one impl block per
//! trait from `shopfront-core`.

use async_trait::async_trait;
use shared::client::CheckoutRequest;
use shared::models::{
    Brand, Category, OrderInfo, OverrideCreate, OverrideUpdate, Product, ProductImage,
    ProductOverride,
};
use shared::response::Page;
use shopfront_core::api::{CatalogApi, CheckoutApi, ImageApi, OverrideApi};
use shopfront_core::catalog::CatalogQuery;
use shopfront_core::error::ServiceResult;

use crate::HttpClient;

fn product_params(tenant_id: &str, query: &CatalogQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("userId", tenant_id.to_string()),
        ("page", query.page.to_string()),
        ("size", query.page_size.to_string()),
        ("sortBy", query.sort_by.as_str().to_string()),
        ("sortDir", query.sort_direction.as_str().to_string()),
    ];
    if let Some(category) = &query.category {
        params.push(("categoryId", category.clone()));
    }
    if let Some(brand) = &query.brand {
        params.push(("brandId", brand.clone()));
    }
    params
}

#[async_trait]
impl CatalogApi for HttpClient {
    async fn list_products(
        &self,
        tenant_id: &str,
        query: &CatalogQuery,
    ) -> ServiceResult<Page<Product>> {
        self.get_query("api/products", &product_params(tenant_id, query))
            .await
    }

    async fn list_products_for_order(&self, order_id: &str) -> ServiceResult<Vec<Product>> {
        self.get(&format!("api/orders/{order_id}/products")).await
    }

    async fn list_categories(&self, tenant_id: &str) -> ServiceResult<Vec<Category>> {
        self.get_query("api/categories", &[("userId", tenant_id.to_string())])
            .await
    }

    async fn list_brands(&self, tenant_id: &str) -> ServiceResult<Vec<Brand>> {
        self.get_query("api/brands", &[("userId", tenant_id.to_string())])
            .await
    }

    async fn get_order(&self, order_id: &str) -> ServiceResult<OrderInfo> {
        self.get(&format!("api/orders/{order_id}")).await
    }
}

#[async_trait]
impl ImageApi for HttpClient {
    async fn list_images(
        &self,
        tenant_id: &str,
        product_id: &str,
    ) -> ServiceResult<Vec<ProductImage>> {
        self.get_query(
            &format!("api/products/{product_id}/images"),
            &[("userId", tenant_id.to_string())],
        )
        .await
    }
}

#[async_trait]
impl OverrideApi for HttpClient {
    async fn list(
        &self,
        customer_id: &str,
        page: u32,
        size: u32,
    ) -> ServiceResult<Page<ProductOverride>> {
        self.get_query(
            "api/price-overrides",
            &[
                ("customerId", customer_id.to_string()),
                ("page", page.to_string()),
                ("size", size.to_string()),
            ],
        )
        .await
    }

    async fn create(&self, payload: &OverrideCreate) -> ServiceResult<ProductOverride> {
        self.post("api/price-overrides", payload).await
    }

    async fn update(&self, id: &str, payload: &OverrideUpdate) -> ServiceResult<ProductOverride> {
        self.put(&format!("api/price-overrides/{id}"), payload).await
    }

    async fn delete(&self, id: &str) -> ServiceResult<()> {
        HttpClient::delete(self, &format!("api/price-overrides/{id}")).await
    }
}

#[async_trait]
impl CheckoutApi for HttpClient {
    async fn place_order(&self, request: &CheckoutRequest) -> ServiceResult<()> {
        self.post_no_content("api/checkout", request).await
    }
}

#[cfg(test)]
mod tests {
    use shopfront_core::catalog::SortField;

    use super::*;

    #[test]
    fn product_params_cover_the_full_query() {
        let mut query = CatalogQuery::new(20);
        query.set_sort(SortField::SpecialPrice);
        query.set_category(Some("c-espresso".to_string()));
        query.set_page(2);

        let params = product_params("t-1", &query);
        assert_eq!(
            params,
            vec![
                ("userId", "t-1".to_string()),
                ("page", "2".to_string()),
                ("size", "20".to_string()),
                ("sortBy", "specialPrice".to_string()),
                ("sortDir", "asc".to_string()),
                ("categoryId", "c-espresso".to_string()),
            ]
        );
    }

    #[test]
    fn unset_filters_are_omitted() {
        let query = CatalogQuery::new(10);
        let params = product_params("t-1", &query);
        assert!(params.iter().all(|(key, _)| *key != "categoryId"));
        assert!(params.iter().all(|(key, _)| *key != "brandId"));
        assert!(params.contains(&("sortBy", "name".to_string())));
    }
}
