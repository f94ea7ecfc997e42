//! Session warm-up for NSE endpoints.
//!
//! The quote API rejects requests that arrive without the cookies the public
//! site sets, so the first API call fetches the homepage into the client's
//! cookie jar before anything else goes out.

use crate::core::error::PeError;

impl super::NseClient {
    pub(crate) async fn ensure_session(&self) -> Result<(), PeError> {
        // Fast path: check the flag with a read lock.
        if *self.warmed.read().await {
            return Ok(());
        }

        // Slow path: acquire the dedicated warm-up lock so only one task proceeds.
        let _guard = self.warmup_lock.lock().await;

        // Double-check: another task might have warmed up while this one was waiting.
        if *self.warmed.read().await {
            return Ok(());
        }

        let resp = self.http.get(self.warmup_url.clone()).send().await?;
        let status = resp.status().as_u16();
        if status >= 400 {
            return Err(PeError::Status {
                status,
                url: self.warmup_url.to_string(),
            });
        }

        *self.warmed.write().await = true;
        Ok(())
    }
}
