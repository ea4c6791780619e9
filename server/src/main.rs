//! Static file server for the built documentation site.
//!
//! Reads the address and site root from the cargo-leptos settings in the
//! workspace manifest (overridable through `LEPTOS_*` environment variables)
//! and serves `index.html` for every path without a file, so client-side
//! routes resolve. Refuses to start when `techdocs.toml` (or the file named
//! by `TECHDOCS_CONFIG`) is invalid, since the bundle embeds the same file.

use std::{
    error::Error,
    path::{Path, PathBuf},
};

use axum::Router;
use leptos::config::get_configuration;
use techdocs_core::Config;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
};

/// Default location of the switcher config, relative to the workspace root.
const SWITCHER_CONFIG: &str = "techdocs.toml";

/// Load the switcher config the bundle was built from.
fn load_switcher_config(path: &Path) -> techdocs_core::Result<Config> {
    let config = Config::load(path)?;
    log::info!(
        "switcher config {}: {} languages, {} databases, blocks prefixed '{}'",
        path.display(),
        config.languages.len(),
        config.databases.len(),
        config.switcher.prefix
    );
    Ok(config)
}

/// Build the router serving `site_root`.
fn site_router(site_root: PathBuf) -> Router {
    let index = site_root.join("index.html");
    let files = ServeDir::new(&site_root).fallback(ServeFile::new(index));

    Router::new()
        .fallback_service(files)
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    simple_logger::init_with_level(log::Level::Info)?;

    let config_path = std::env::var("TECHDOCS_CONFIG").unwrap_or_else(|_| SWITCHER_CONFIG.into());
    load_switcher_config(Path::new(&config_path))?;

    let conf = get_configuration(None)?;
    let options = conf.leptos_options;
    let addr = options.site_addr;
    let site_root = PathBuf::from(options.site_root.as_ref());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("serving {} on http://{addr}", site_root.display());
    axum::serve(listener, site_router(site_root)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    use super::*;

    fn site_with_index() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("index.html"), "<html>docs</html>").expect("write index");
        std::fs::create_dir(dir.path().join("pkg")).expect("create pkg");
        std::fs::write(dir.path().join("pkg/techdocs.css"), ".show{}").expect("write css");
        dir
    }

    #[test]
    fn test_workspace_switcher_config_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join(SWITCHER_CONFIG);
        let config = load_switcher_config(&path).expect("workspace config is valid");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_switcher_config_is_rejected() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(SWITCHER_CONFIG);
        std::fs::write(&path, "[switcher]\nvisible_class = \"\"\n").expect("write config");

        assert!(load_switcher_config(&path).is_err());
        assert!(load_switcher_config(&dir.path().join("missing.toml")).is_err());
    }

    #[tokio::test]
    async fn test_serves_static_file() {
        let dir = site_with_index();
        let response = site_router(dir.path().to_path_buf())
            .oneshot(Request::get("/pkg/techdocs.css").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_client_route_falls_back_to_index() {
        let dir = site_with_index();
        let response = site_router(dir.path().to_path_buf())
            .oneshot(
                Request::get("/guides/installation")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
