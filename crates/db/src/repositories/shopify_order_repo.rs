//! Repository for the `shopify_orders` table (read-only).
//!
//! An order whose `customeremail` is `NULL` is reported as not found.
//! A `NULL` email can never match a customer, so such an order would
//! only inflate the update count with a write that changes nothing.

use sqlx::PgConnection;

pub struct ShopifyOrderRepo;

impl ShopifyOrderRepo {
    /// Email of the customer who placed `order_number`.
    ///
    /// Returns `None` when no such order exists or its email is `NULL`.
    pub async fn find_customer_email(
        conn: &mut PgConnection,
        order_number: &str,
    ) -> Result<Option<String>, sqlx::Error> {
        let email = sqlx::query_scalar::<_, Option<String>>(
            "SELECT customeremail FROM shopify_orders WHERE ordernumber = $1",
        )
        .bind(order_number)
        .fetch_optional(conn)
        .await?;
        Ok(email.flatten())
    }
}
