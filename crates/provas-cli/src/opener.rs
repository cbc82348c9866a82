use provas_client::ClientError;
use provas_client::viewer::LinkOpener;

/// Opens links in the system browser.
pub struct BrowserOpener;

impl LinkOpener for BrowserOpener {
    fn open(&self, url: &str) -> Result<(), ClientError> {
        tracing::debug!(url, "opening exam in browser");
        open::that(url).map_err(|error| ClientError::Open {
            url: url.to_string(),
            reason: error.to_string(),
        })
    }
}

/// Leaves the link for the caller to print.
pub struct PrintOnlyOpener;

impl LinkOpener for PrintOnlyOpener {
    fn open(&self, url: &str) -> Result<(), ClientError> {
        tracing::debug!(url, "print-only: not launching a browser");
        Ok(())
    }
}
