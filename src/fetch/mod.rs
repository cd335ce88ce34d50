//! Source fetching
//!
//! This module provides a trait-based architecture for turning a source id into
//! a stream of CSV bytes. The core abstraction is the [`SourceFetcher`] trait; the
//! orchestrator only depends on it, so other transports can be plugged in.
//!
//! - [`HttpFetcher`]: GET over HTTP(S) with an `Accept: text/csv` header and a bounded timeout
//! - [`FileFetcher`]: reads `file://` URLs and plain paths from the local filesystem
//! - [`RoutingFetcher`]: picks one of the above by URL scheme
//!
//! ## Usage
//!
//! ```no_run
//! use crowdstats::config::FetchConfig;
//! use crowdstats::fetch::{RoutingFetcher, SourceFetcher};
//! use tokio::io::AsyncReadExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = RoutingFetcher::new(&FetchConfig::default())?;
//!     let mut stream = fetcher.fetch("https://example.com/people.csv").await?;
//!     let mut head = [0u8; 64];
//!     let n = stream.read(&mut head).await?;
//!     println!("first bytes: {:?}", &head[..n]);
//!     Ok(())
//! }
//! ```

mod file;
mod http;
mod routing;
mod traits;

pub use file::FileFetcher;
pub use http::HttpFetcher;
pub use routing::RoutingFetcher;
pub use traits::{SourceFetcher, SourceStream};
