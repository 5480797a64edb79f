//! Static page and asset serving from the public directory.

use std::path::{Path, PathBuf};

use actix_files::{Files, NamedFile};
use actix_web::{get, web};

/// Location of the public asset directory.
#[derive(Debug, Clone)]
pub struct PublicDir(PathBuf);

impl PublicDir {
    /// Wrap the directory path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Directory root.
    pub fn path(&self) -> &Path {
        &self.0
    }

    fn index(&self) -> PathBuf {
        self.0.join("index.html")
    }
}

/// Serve the order page (`index.html`).
#[get("/order")]
pub async fn order_page(public: web::Data<PublicDir>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(public.index()).await?)
}

/// Catch-all static file service. Register it after every other route.
pub fn static_files(public: &PublicDir) -> Files {
    Files::new("/", public.path()).index_file("index.html")
}
