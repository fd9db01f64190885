use sqlx::FromRow;

/// The assignment-relevant slice of a `customers` row.
#[derive(Debug, Clone, FromRow)]
pub struct CustomerAssignment {
    pub email: String,
    /// Owner label; `NULL` until someone is assigned.
    #[sqlx(rename = "assignedto")]
    pub assigned_to: Option<String>,
}
