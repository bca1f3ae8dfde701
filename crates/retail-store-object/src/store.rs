//! [`ObjectBlobStore`], the `object_store` implementation of [`BlobStore`].

use std::{path::Path as FsPath, sync::Arc};

use object_store::{
  Attribute, Attributes, ObjectStore, PutOptions, PutPayload,
  aws::AmazonS3Builder, gcp::GoogleCloudStorageBuilder, local::LocalFileSystem,
  memory::InMemory, path::Path,
};
use retail_core::store::BlobStore;

use crate::{Error, Result};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A bucket (or bucket prefix) holding the generated CSV objects.
///
/// Cloning is cheap: the inner store is reference-counted.
#[derive(Clone)]
pub struct ObjectBlobStore {
  inner:        Arc<dyn ObjectStore>,
  /// Key prefix inside the bucket; empty for the bucket root.
  prefix:       String,
  /// Whether to tag uploads with `Content-Type: text/csv`. The local
  /// filesystem backend rejects attributes.
  content_type: bool,
}

impl ObjectBlobStore {
  /// Wrap an existing store. Uploads carry no content-type attribute.
  pub fn new(inner: Arc<dyn ObjectStore>) -> Self {
    Self { inner, prefix: String::new(), content_type: false }
  }

  /// A fresh, empty in-memory bucket. Useful for testing.
  pub fn in_memory() -> Self {
    Self { inner: Arc::new(InMemory::new()), prefix: String::new(), content_type: true }
  }

  /// Build a store from a URL.
  ///
  /// | URL                       | Backend                                  |
  /// |---------------------------|------------------------------------------|
  /// | `memory://`               | in-process [`InMemory`]                  |
  /// | `gs://bucket[/prefix]`    | Google Cloud Storage, credentials from env |
  /// | `s3://bucket[/prefix]`    | S3, credentials from env                 |
  /// | `file:///dir` or `/dir`   | local directory, created if missing      |
  pub fn from_url(url: &str) -> Result<Self> {
    if url == "memory://" {
      return Ok(Self::in_memory());
    }

    if let Some(rest) = url.strip_prefix("gs://") {
      let (bucket, prefix) = split_bucket(url, rest)?;
      let store = GoogleCloudStorageBuilder::from_env()
        .with_bucket_name(bucket)
        .build()?;
      return Ok(Self { inner: Arc::new(store), prefix, content_type: true });
    }

    if let Some(rest) = url.strip_prefix("s3://") {
      let (bucket, prefix) = split_bucket(url, rest)?;
      let store = AmazonS3Builder::from_env().with_bucket_name(bucket).build()?;
      return Ok(Self { inner: Arc::new(store), prefix, content_type: true });
    }

    if url.contains("://") && !url.starts_with("file://") {
      return Err(Error::UnsupportedUrl(url.to_owned()));
    }

    let dir = FsPath::new(url.strip_prefix("file://").unwrap_or(url));
    std::fs::create_dir_all(dir)?;
    let store = LocalFileSystem::new_with_prefix(dir)?;
    Ok(Self::new(Arc::new(store)))
  }

  fn path(&self, key: &str) -> Path {
    if self.prefix.is_empty() {
      Path::from(key)
    } else {
      Path::from(format!("{}/{key}", self.prefix))
    }
  }
}

/// Split `bucket/some/prefix` into the bucket name and a trimmed prefix.
fn split_bucket<'a>(url: &str, rest: &'a str) -> Result<(&'a str, String)> {
  let (bucket, prefix) = rest.split_once('/').unwrap_or((rest, ""));
  if bucket.is_empty() {
    return Err(Error::UnsupportedUrl(url.to_owned()));
  }
  Ok((bucket, prefix.trim_matches('/').to_owned()))
}

// ─── BlobStore impl ──────────────────────────────────────────────────────────

impl BlobStore for ObjectBlobStore {
  type Error = Error;

  async fn exists(&self, key: &str) -> Result<bool> {
    match self.inner.head(&self.path(key)).await {
      Ok(_) => Ok(true),
      Err(object_store::Error::NotFound { .. }) => Ok(false),
      Err(e) => Err(e.into()),
    }
  }

  async fn get(&self, key: &str) -> Result<Option<String>> {
    let result = match self.inner.get(&self.path(key)).await {
      Ok(result) => result,
      Err(object_store::Error::NotFound { .. }) => return Ok(None),
      Err(e) => return Err(e.into()),
    };
    let bytes = result.bytes().await?;
    String::from_utf8(bytes.to_vec())
      .map(Some)
      .map_err(|_| Error::NotUtf8 { key: key.to_owned() })
  }

  async fn put_csv(&self, key: &str, body: String) -> Result<()> {
    let mut attributes = Attributes::new();
    if self.content_type {
      attributes.insert(Attribute::ContentType, "text/csv".into());
    }
    let options = PutOptions { attributes, ..PutOptions::default() };
    let size = body.len();

    self
      .inner
      .put_opts(&self.path(key), PutPayload::from(body), options)
      .await?;
    tracing::debug!(key, size, "object written");
    Ok(())
  }
}
