//! Repository for the owner assignment on the `customers` table.

use sqlx::PgConnection;

use crate::models::customer::CustomerAssignment;

const COLUMNS: &str = "email, assignedto";

/// Reads and writes `customers.assignedto` keyed by email.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Set the owner of the customer with `email`.
    ///
    /// Returns the number of rows matched. No existence check is made; a
    /// missing customer yields `0`.
    pub async fn set_assigned_to(
        conn: &mut PgConnection,
        email: &str,
        owner: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE customers SET assignedto = $1 WHERE email = $2")
            .bind(owner)
            .bind(email)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn find_by_email(
        conn: &mut PgConnection,
        email: &str,
    ) -> Result<Option<CustomerAssignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE email = $1");
        sqlx::query_as::<_, CustomerAssignment>(&query)
            .bind(email)
            .fetch_optional(conn)
            .await
    }
}
