//! Signed download-URL validation.
//!
//! A source download URL is a time-limited capability minted by the core
//! service. This guard runs before any network fetch so an unsigned or
//! malformed URL never reaches the wire.

use url::Url;

use printworks_core::error::AppError;
use printworks_core::result::AppResult;

/// Path suffix every signed download URL must carry.
const DOWNLOAD_PATH_SUFFIX: &str = "/assets/download";

/// Query parameters every signed download URL must carry.
const REQUIRED_PARAMS: [&str; 3] = ["key", "exp", "sig"];

/// Verify that `url` is a well-formed signed download capability.
///
/// Rejects URLs that do not parse, whose path does not end in the
/// download endpoint suffix, or that are missing any of the `key`,
/// `exp`, `sig` parameters.
pub fn validate_signed_download_url(url: &str) -> AppResult<()> {
    let parsed = Url::parse(url)
        .map_err(|_| AppError::validation(format!("Invalid source_download_url: {url}")))?;

    if !parsed.path().ends_with(DOWNLOAD_PATH_SUFFIX) {
        return Err(AppError::validation(format!(
            "Unsigned source_download_url (unexpected path): {url}"
        )));
    }

    let missing: Vec<&str> = REQUIRED_PARAMS
        .iter()
        .filter(|param| {
            !parsed
                .query_pairs()
                .any(|(name, value)| name == **param && !value.is_empty())
        })
        .copied()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "Unsigned source_download_url (missing {}): {url}",
            missing.join("/")
        )))
    }
}
