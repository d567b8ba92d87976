use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;

/// Files under a base directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(path);
        let data = fs::read(full_path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        // 先寫暫存檔再改名，讀取端不會看到寫到一半的內容
        let mut tmp_name = full_path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, data).await?;
        fs::rename(&tmp_path, &full_path).await?;
        Ok(())
    }
}

/// In-process storage; clones share the same files.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
        let files = self.files.lock().await;
        files.get(path).cloned()
    }

    pub async fn file_names(&self) -> Vec<String> {
        let files = self.files.lock().await;
        let mut names: Vec<String> = files.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Storage for MemoryStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let files = self.files.lock().await;
        files.get(path).cloned().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path),
            )
            .into()
        })
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let mut files = self.files.lock().await;
        files.insert(path.to_string(), data.to_vec());
        Ok(())
    }
}
