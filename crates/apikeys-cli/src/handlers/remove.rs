//! Remove command handler.

use std::io::Write;

use anyhow::Result;
use apikeys_core::{RemoveCall, ResourceId};
use tracing::info;

/// Delete a key by id.
pub async fn execute<C, W>(client: &C, id: i64, out: &mut W) -> Result<()>
where
    C: RemoveCall,
    W: Write,
{
    client.remove(ResourceId::from(id)).await?;
    info!(id, "API key deleted");

    writeln!(out, "Deleted API key {id}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{MockKeys, output};
    use apikeys_core::ApiKeyError;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_remove() {
        let mut client = MockKeys::new();
        client
            .expect_remove()
            .with(eq(ResourceId::Numeric(42)))
            .times(1)
            .returning(|_| Ok(()));

        let mut buf = Vec::new();
        execute(&client, 42, &mut buf).await.unwrap();
        assert_eq!(output(buf), "Deleted API key 42\n");
    }

    #[tokio::test]
    async fn test_remove_failure() {
        let mut client = MockKeys::new();
        client
            .expect_remove()
            .returning(|_| Err(ApiKeyError::DeleteFailed));

        let mut buf = Vec::new();
        let err = execute(&client, 42, &mut buf).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to delete API key");
        assert!(buf.is_empty());
    }
}
