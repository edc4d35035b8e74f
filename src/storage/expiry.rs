//! Freshness checks for previously issued signed URLs

use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone, Utc};
use url::Url;

pub const AMZ_DATE_PARAM: &str = "X-Amz-Date";
pub const AMZ_EXPIRES_PARAM: &str = "X-Amz-Expires";

/// Compact ISO-8601 basic format used by `X-Amz-Date`
pub const AMZ_DATE_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Issue time and validity window carried by a signed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedUrlMetadata {
    pub issued_at: DateTime<Utc>,
    pub expires_in_secs: i64,
}

impl SignedUrlMetadata {
    /// `None` when the sum falls outside the representable time range.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let window = TimeDelta::try_seconds(self.expires_in_secs)?;
        self.issued_at.checked_add_signed(window)
    }
}

/// Read `X-Amz-Date` and `X-Amz-Expires` from a signed URL.
///
/// Returns `None` if the input is not a URL, either parameter is missing,
/// or either value does not parse.
pub fn signed_url_metadata(url: &str) -> Option<SignedUrlMetadata> {
    let parsed = Url::parse(url).ok()?;

    let mut date = None;
    let mut expires = None;
    for (name, value) in parsed.query_pairs() {
        match name.as_ref() {
            AMZ_DATE_PARAM if date.is_none() => date = Some(value.into_owned()),
            AMZ_EXPIRES_PARAM if expires.is_none() => expires = Some(value.into_owned()),
            _ => {}
        }
    }

    let issued_at = NaiveDateTime::parse_from_str(&date?, AMZ_DATE_FORMAT).ok()?;
    let expires_in_secs = expires?.parse::<i64>().ok()?;

    Some(SignedUrlMetadata {
        issued_at: Utc.from_utc_datetime(&issued_at),
        expires_in_secs,
    })
}

/// Whether `url` is at or within `threshold_secs` of its expiry.
///
/// Missing or malformed expiry metadata always reports `true`.
pub fn needs_refresh(url: &str, threshold_secs: i64) -> bool {
    needs_refresh_at(url, threshold_secs, Utc::now())
}

pub fn needs_refresh_at(url: &str, threshold_secs: i64, now: DateTime<Utc>) -> bool {
    let Some(metadata) = signed_url_metadata(url) else {
        log::debug!("No usable expiry metadata in URL, treating as stale");
        return true;
    };

    let refresh_at = metadata.expires_at().and_then(|expires_at| {
        expires_at.checked_sub_signed(TimeDelta::try_seconds(threshold_secs)?)
    });

    match refresh_at {
        Some(refresh_at) => now >= refresh_at,
        None => {
            log::debug!("Expiry window of signed URL is out of range, treating as stale");
            true
        }
    }
}
