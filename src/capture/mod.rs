//! Pending page capture.
//!
//! A capture is written once per user-initiated page visit and consumed by
//! the next check. `take` removes it atomically, so two checks can never
//! analyze the same capture, and a capture that sits unconsumed past its TTL
//! is discarded.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::CAPTURE_TTL_SECS;

/// Markup captured from a real browser visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPage {
    /// Full page markup as rendered
    pub html: String,
    /// Page the markup was captured from
    pub url: String,
    /// Capture time
    pub captured_at: DateTime<Utc>,
}

impl CapturedPage {
    /// Creates a capture stamped with the current time.
    pub fn new(html: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            url: url.into(),
            captured_at: Utc::now(),
        }
    }
}

/// Single-slot, single-consumer holder for the most recent capture.
#[derive(Debug)]
pub struct CaptureCache {
    slot: Mutex<Option<CapturedPage>>,
    ttl: Duration,
}

impl Default for CaptureCache {
    fn default() -> Self {
        Self::new(Duration::seconds(CAPTURE_TTL_SECS))
    }
}

impl CaptureCache {
    /// Creates an empty cache whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: Mutex::new(None),
            ttl,
        }
    }

    /// Stores a capture, replacing any capture still pending.
    pub fn store(&self, page: CapturedPage) {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        if slot.is_some() {
            debug!("Replacing pending capture with one from {}", page.url);
        }
        *slot = Some(page);
    }

    /// Removes and returns the pending capture if it has not expired.
    pub fn take(&self) -> Option<CapturedPage> {
        self.take_at(Utc::now())
    }

    /// Same as [`CaptureCache::take`], evaluated at `now`.
    pub fn take_at(&self, now: DateTime<Utc>) -> Option<CapturedPage> {
        let page = self
            .slot
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()?;

        if now - page.captured_at > self.ttl {
            debug!(
                "Discarding capture of {} taken at {} (expired)",
                page.url, page.captured_at
            );
            return None;
        }
        Some(page)
    }

    /// Whether a capture is waiting to be consumed (expired or not).
    pub fn is_pending(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }
}
