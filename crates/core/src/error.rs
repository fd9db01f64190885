/// Boxed error raised by a store implementation (lookup or write).
pub type StoreError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Failed to read order CSV")]
    Csv(#[from] csv::Error),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Order CSV is missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("Store operation failed")]
    Store(#[source] StoreError),
}

impl CoreError {
    /// Wrap an error surfaced by a store implementation.
    pub fn store<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Store(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_missing_column() {
        let err = CoreError::MissingColumn("Ordernumber");
        assert_eq!(
            err.to_string(),
            "Order CSV is missing required column: Ordernumber"
        );
    }

    #[test]
    fn store_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "connection reset");
        let err = CoreError::store(io);
        assert_eq!(err.to_string(), "Store operation failed");
        let source = std::error::Error::source(&err).expect("source");
        assert_eq!(source.to_string(), "connection reset");
    }

    #[test]
    fn csv_message_is_not_repeated_in_chain() {
        let csv_err = csv::ReaderBuilder::new()
            .from_reader("a,b\n1,2,3\n".as_bytes())
            .records()
            .find_map(Result::err)
            .expect("csv error");
        let detail = csv_err.to_string();

        let err = CoreError::from(csv_err);

        assert_eq!(err.to_string(), "Failed to read order CSV");
        let chain: Vec<String> = std::iter::successors(
            Some(&err as &(dyn std::error::Error + 'static)),
            |e| e.source(),
        )
        .map(ToString::to_string)
        .collect();
        assert_eq!(chain.iter().filter(|m| m.contains(&detail)).count(), 1);
    }
}
