use std::path::{Path, PathBuf};
use std::sync::Arc;

use felicity_ingest::{IngestError, RecordReader};
use felicity_model::{mean_score, top_by_score, top_region};
use tracing::{error, info};

use crate::store::DatasetStore;

/// Streams the source CSV into the store, then flips readiness.
///
/// Rows are pushed as they are parsed, so data requests racing the load see
/// a partially populated dataset rather than blocking on it. A missing or
/// unreadable file leaves the store as-is and not ready; the process keeps
/// serving.
pub async fn load_dataset(store: Arc<DatasetStore>, path: PathBuf) {
    let task = tokio::task::spawn_blocking({
        let store = Arc::clone(&store);
        let path = path.clone();
        move || stream_rows(&store, &path)
    });

    match task.await {
        Ok(Ok(rows)) => {
            store.mark_ready();
            log_summary(&store, rows).await;
        }
        Ok(Err(e)) => {
            error!(path = %path.display(), "dataset load failed: {e}");
        }
        Err(e) => {
            error!(path = %path.display(), "dataset loader task failed: {e}");
        }
    }
}

fn stream_rows(store: &DatasetStore, path: &Path) -> Result<usize, IngestError> {
    let reader = RecordReader::open(path)?;
    let mut rows = 0_usize;
    for record in reader {
        store.blocking_push(record?);
        rows += 1;
    }
    Ok(rows)
}

async fn log_summary(store: &DatasetStore, rows: usize) {
    let records = store.snapshot().await;
    let mean = mean_score(&records).map(|m| format!("{m:.2}"));
    let region = top_region(&records);
    let country = top_by_score(&records, 1)
        .first()
        .and_then(|record| record.country().map(str::to_string));
    info!(
        records = rows,
        mean_score = mean.as_deref().unwrap_or("-"),
        top_region = region.as_deref().unwrap_or("-"),
        top_country = country.as_deref().unwrap_or("-"),
        "dataset loaded"
    );
}
