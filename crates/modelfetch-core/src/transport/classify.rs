//! Map curl errors onto transport error kinds.

use crate::error::TransportError;

/// Classify a curl error as timeout, connection failure, or other.
pub fn classify_curl_error(e: &curl::Error) -> TransportError {
    let msg = e.to_string();
    if e.is_operation_timedout() {
        return TransportError::Timeout(msg);
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
        || e.is_ssl_connect_error()
    {
        return TransportError::Connection(msg);
    }
    TransportError::Other(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    // libcurl error codes (CURLcode).
    const CURLE_COULDNT_RESOLVE_HOST: u32 = 6;
    const CURLE_COULDNT_CONNECT: u32 = 7;
    const CURLE_OPERATION_TIMEDOUT: u32 = 28;
    const CURLE_URL_MALFORMAT: u32 = 3;

    #[test]
    fn timeout_classified() {
        let e = curl::Error::new(CURLE_OPERATION_TIMEDOUT as _);
        assert!(matches!(classify_curl_error(&e), TransportError::Timeout(_)));
    }

    #[test]
    fn connection_errors_classified() {
        for code in [CURLE_COULDNT_CONNECT, CURLE_COULDNT_RESOLVE_HOST] {
            let e = curl::Error::new(code as _);
            assert!(matches!(classify_curl_error(&e), TransportError::Connection(_)));
        }
    }

    #[test]
    fn malformed_url_is_other() {
        let e = curl::Error::new(CURLE_URL_MALFORMAT as _);
        assert!(matches!(classify_curl_error(&e), TransportError::Other(_)));
    }
}
