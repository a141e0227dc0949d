//! HTTP GET transport.
//!
//! One blocking GET per asset through libcurl's Easy interface (via the
//! `curl` crate). The body is streamed chunk by chunk into a caller-supplied
//! sink so memory use stays bounded regardless of asset size.

mod classify;

pub use classify::classify_curl_error;

use crate::error::TransportError;
use std::io::Write;
use std::time::Duration;

/// Issues GET requests and streams the response body into `sink`.
///
/// Returns the final HTTP status code. The body is written whatever the
/// status; deciding whether to keep it is up to the caller.
pub trait Transport {
    fn get(&self, url: &str, sink: &mut dyn Write) -> Result<u32, TransportError>;
}

/// Smallest timeout handed to libcurl. Zero would disable both the connect
/// limit and the stall check.
pub const MIN_TIMEOUT: Duration = Duration::from_secs(1);

/// libcurl-backed transport with a per-request timeout.
#[derive(Debug, Clone, Copy)]
pub struct CurlTransport {
    timeout: Duration,
}

impl CurlTransport {
    /// `timeout` bounds connection setup and any stall in the body stream.
    /// Values below [`MIN_TIMEOUT`] are raised to it.
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout: timeout.max(MIN_TIMEOUT),
        }
    }
}

impl Transport for CurlTransport {
    fn get(&self, url: &str, sink: &mut dyn Write) -> Result<u32, TransportError> {
        let mut sink_error: Option<std::io::Error> = None;

        let mut easy = curl::easy::Easy::new();
        configure(&mut easy, url, self.timeout).map_err(|e| classify_curl_error(&e))?;

        let performed = {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| match sink.write_all(data) {
                    Ok(()) => Ok(data.len()),
                    Err(e) => {
                        sink_error = Some(e);
                        Ok(0) // abort transfer
                    }
                })
                .map_err(|e| classify_curl_error(&e))?;
            transfer.perform()
        };

        if let Some(e) = sink_error {
            return Err(TransportError::Sink(e));
        }
        performed.map_err(|e| classify_curl_error(&e))?;

        easy.response_code().map_err(|e| classify_curl_error(&e))
    }
}

fn configure(easy: &mut curl::easy::Easy, url: &str, timeout: Duration) -> Result<(), curl::Error> {
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(timeout)?;
    // Less than one byte per second for `timeout` counts as a stalled read.
    easy.low_speed_limit(1)?;
    easy.low_speed_time(timeout)?;
    Ok(())
}
