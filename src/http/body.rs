// Request body reading

use http_body_util::{BodyExt, Limited};
use hyper::body::{Body, Bytes};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Collect a request body, failing once it grows past `limit` bytes
pub async fn read_body<B>(body: B, limit: usize) -> Result<Bytes, BoxError>
where
    B: Body,
    B::Error: Into<BoxError>,
{
    Ok(Limited::new(body, limit).collect().await?.to_bytes())
}
