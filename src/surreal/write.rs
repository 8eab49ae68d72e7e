use anyhow::{Context, Result};
use surrealdb::sql::Thing;

use super::Client;

/// Upsert a single record with parameterized bindings.
pub async fn upsert_record<C>(surreal: &Client, id: &Thing, content: C) -> Result<()>
where
    C: serde::Serialize + 'static,
{
    // Parameterized query with proper variable binding to prevent injection
    let query = "UPSERT $record_id CONTENT $content";

    let mut q = surreal.query(query);
    q = q.bind(("record_id", id.clone()));
    q = q.bind(("content", content));

    let mut response = q
        .await
        .with_context(|| format!("UPSERT failed for record {id}"))?;

    let result: Vec<Thing> = response
        .take("id")
        .with_context(|| format!("UPSERT returned an unreadable response for record {id}"))?;

    if result.is_empty() {
        tracing::warn!("Failed to create record: {id}");
    } else {
        tracing::trace!("Successfully upserted record: {id}");
    }

    Ok(())
}

/// Merge fields into an existing record, leaving the rest of the document
/// untouched.
pub async fn merge_record<C>(surreal: &Client, id: &Thing, content: C) -> Result<()>
where
    C: serde::Serialize + 'static,
{
    let query = "UPDATE $record_id MERGE $content";

    let mut q = surreal.query(query);
    q = q.bind(("record_id", id.clone()));
    q = q.bind(("content", content));

    let mut response = q
        .await
        .with_context(|| format!("UPDATE MERGE failed for record {id}"))?;

    let result: Vec<Thing> = response
        .take("id")
        .with_context(|| format!("UPDATE MERGE returned an unreadable response for record {id}"))?;

    if result.is_empty() {
        tracing::warn!("No record updated for: {id}");
    } else {
        tracing::trace!("Successfully merged record: {id}");
    }

    Ok(())
}

/// Accumulates record writes and commits them in bounded chunks.
///
/// `push` flushes once the buffer reaches `batch_size`, and `finish` flushes
/// whatever remains, so every accepted write is committed exactly once by
/// the time `finish` returns. In dry-run mode nothing is written; the writer
/// only counts what would have been.
pub struct BatchWriter<'a, C> {
    surreal: &'a Client,
    batch_size: usize,
    dry_run: bool,
    pending: Vec<(Thing, C)>,
    written: usize,
}

impl<'a, C> BatchWriter<'a, C>
where
    C: serde::Serialize + 'static,
{
    pub fn new(surreal: &'a Client, batch_size: usize, dry_run: bool) -> Self {
        Self {
            surreal,
            batch_size: batch_size.max(1),
            dry_run,
            pending: Vec::new(),
            written: 0,
        }
    }

    pub async fn push(&mut self, id: Thing, content: C) -> Result<()> {
        self.pending.push((id, content));
        if self.pending.len() >= self.batch_size {
            self.flush().await?;
        }
        Ok(())
    }

    async fn flush(&mut self) -> Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }

        if self.dry_run {
            tracing::debug!(
                "Dry run: would upsert batch of {} records",
                self.pending.len()
            );
            self.written += self.pending.len();
            self.pending.clear();
            return Ok(());
        }

        tracing::debug!("Committing batch of {} records", self.pending.len());
        for (id, content) in self.pending.drain(..) {
            upsert_record(self.surreal, &id, content).await?;
            self.written += 1;
        }
        Ok(())
    }

    /// Flush remaining writes and return the total number committed.
    pub async fn finish(mut self) -> Result<usize> {
        self.flush().await?;
        Ok(self.written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surrealdb::sql::Id;

    async fn mem_client() -> Client {
        let surreal = surrealdb::engine::any::connect("mem://").await.unwrap();
        surreal.use_ns("test").use_db("test").await.unwrap();
        surreal
    }

    #[derive(serde::Serialize)]
    struct Doc {
        name: String,
    }

    #[tokio::test]
    async fn upsert_then_merge() {
        let surreal = mem_client().await;
        let id = Thing::from(("products", Id::String("abc".to_string())));

        upsert_record(
            &surreal,
            &id,
            Doc {
                name: "tour ball".to_string(),
            },
        )
        .await
        .unwrap();

        #[derive(serde::Serialize)]
        struct Patch {
            brand: String,
        }
        merge_record(
            &surreal,
            &id,
            Patch {
                brand: "ace".to_string(),
            },
        )
        .await
        .unwrap();

        let mut response = surreal
            .query("SELECT name, brand FROM products")
            .await
            .unwrap();
        let names: Vec<String> = response.take("name").unwrap();
        let brands: Vec<String> = response.take("brand").unwrap();
        assert_eq!(names, vec!["tour ball".to_string()]);
        assert_eq!(brands, vec!["ace".to_string()]);
    }

    #[tokio::test]
    async fn batch_writer_flushes_threshold_and_remainder() {
        let surreal = mem_client().await;
        let mut writer = BatchWriter::new(&surreal, 2, false);

        for i in 0..5 {
            let id = Thing::from(("products", Id::String(format!("p{i}"))));
            writer
                .push(
                    id,
                    Doc {
                        name: format!("product {i}"),
                    },
                )
                .await
                .unwrap();
        }

        let written = writer.finish().await.unwrap();
        assert_eq!(written, 5);

        let mut response = surreal.query("SELECT id FROM products").await.unwrap();
        let ids: Vec<Thing> = response.take("id").unwrap();
        assert_eq!(ids.len(), 5);
    }

    #[tokio::test]
    async fn batch_writer_dry_run_writes_nothing() {
        let surreal = mem_client().await;
        let mut writer = BatchWriter::new(&surreal, 2, true);

        for i in 0..3 {
            let id = Thing::from(("products", Id::String(format!("p{i}"))));
            writer
                .push(
                    id,
                    Doc {
                        name: format!("product {i}"),
                    },
                )
                .await
                .unwrap();
        }

        let written = writer.finish().await.unwrap();
        assert_eq!(written, 3);

        let mut response = surreal.query("SELECT id FROM products").await.unwrap();
        let ids: Vec<Thing> = response.take("id").unwrap();
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn batch_size_zero_is_clamped() {
        let surreal = mem_client().await;
        let mut writer = BatchWriter::new(&surreal, 0, true);
        let id = Thing::from(("products", Id::String("only".to_string())));
        writer
            .push(
                id,
                Doc {
                    name: "one".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(writer.finish().await.unwrap(), 1);
    }
}
