use crate::{
    model::{CaptureDescriptor, CaptureQuery, CaptureSearchResponse},
    Client, Error,
};

/// Capture discovery endpoints of the Analysis Service.
pub struct CapturesEndpoints<'a> {
    client: &'a Client,
}

impl<'a> CapturesEndpoints<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Searches for captures over a region within a time window below a cloud ceiling.
    ///
    /// Safe to repeat with overlapping windows; the same capture may be returned again.
    ///
    /// # Returns
    /// - `Ok(Vec<CaptureDescriptor>)` - Matching captures, possibly empty
    /// - `Err(Error)` - Transport failure, timeout, error status or undecodable body
    pub async fn search(&self, query: &CaptureQuery) -> Result<Vec<CaptureDescriptor>, Error> {
        if query.end < query.start {
            return Err(Error::InvalidResponse(format!(
                "capture window ends ({}) before it starts ({})",
                query.end, query.start
            )));
        }

        let response: CaptureSearchResponse =
            self.client.post_json("v1/captures/search", query).await?;

        Ok(response.captures)
    }
}
