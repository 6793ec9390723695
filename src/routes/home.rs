//! Root banner handler.

use crate::config::ROOT_BANNER;

/// Returns the fixed banner as `text/plain`.
pub async fn index() -> &'static str {
    ROOT_BANNER
}
