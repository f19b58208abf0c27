use std::{marker::PhantomData, path::PathBuf};
use tokio::fs;

use crate::errors::ServiceError;

/// JSON file holding a whole serialized value.
///
/// The in-memory backend keeps its tree in RAM and rewrites the file after
/// each committed mutation. Writes go to a sibling `.tmp` file first and are
/// renamed into place so a crash never leaves a half-written snapshot.
#[derive(Clone, Debug)]
pub struct JsonSnapshot<T> {
    file_path: PathBuf,
    _value: PhantomData<fn() -> T>,
}

impl<T> JsonSnapshot<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    /// Prepare a snapshot at `path`, creating its parent directory if needed.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let file_path = path.into();
        common::env::ensure_parent_dir(&file_path.to_string_lossy())
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        Ok(Self { file_path, _value: PhantomData })
    }

    pub fn path(&self) -> &std::path::Path { &self.file_path }

    /// Read the stored value; `None` when the file does not exist yet.
    pub async fn load(&self) -> Result<Option<T>, ServiceError> {
        match fs::read(&self.file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|e| ServiceError::Internal(format!("corrupt snapshot {}: {e}", self.file_path.display()))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ServiceError::Internal(e.to_string())),
        }
    }

    /// Persist `value`, replacing the previous snapshot.
    pub async fn save(&self, value: &T) -> Result<(), ServiceError> {
        let data = serde_json::to_vec(value).map_err(|e| ServiceError::Internal(e.to_string()))?;
        let tmp = self.file_path.with_extension("tmp");
        fs::write(&tmp, data).await.map_err(|e| ServiceError::Internal(e.to_string()))?;
        fs::rename(&tmp, &self.file_path).await.map_err(|e| ServiceError::Internal(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn json_snapshot_round_trips_and_reports_missing() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_snapshot_{}", uuid::Uuid::new_v4())).join("state.json");
        let store = JsonSnapshot::<BTreeMap<String, String>>::new(&tmp).await?;

        // nothing written yet
        assert!(store.load().await?.is_none());

        let mut m = BTreeMap::new();
        m.insert("a".to_string(), "1".to_string());
        store.save(&m).await?;

        let reloaded = JsonSnapshot::<BTreeMap<String, String>>::new(&tmp).await?;
        let loaded = reloaded.load().await?.unwrap_or_default();
        assert_eq!(loaded.get("a").map(String::as_str), Some("1"));

        if let Some(dir) = tmp.parent() {
            let _ = tokio::fs::remove_dir_all(dir).await;
        }
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_snapshot_is_internal_error() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("json_snapshot_bad_{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&tmp, b"{not json").await?;
        let store = JsonSnapshot::<BTreeMap<String, String>>::new(&tmp).await?;
        assert!(matches!(store.load().await, Err(ServiceError::Internal(_))));
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
