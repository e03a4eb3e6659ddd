use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Checks a webhook delivery against its `X-WORKS-Signature` header value.
///
/// Recomputes HMAC-SHA256 over the raw body bytes keyed with the bot secret
/// and compares the digest to the base64-decoded header value in constant
/// time. Returns `false` on an absent header, an empty body, a header that
/// is not valid base64, or a digest mismatch. The raw bytes must be exactly
/// what the platform sent; re-serialized JSON does not verify.
pub fn verify_signature(
    raw_body: &[u8],
    header_signature: Option<&str>,
    bot_secret: &[u8],
) -> bool {
    let Some(signature) = header_signature else {
        return false;
    };
    if raw_body.is_empty() {
        return false;
    }
    let Ok(provided) = STANDARD.decode(signature) else {
        return false;
    };

    let mut mac = HmacSha256::new_from_slice(bot_secret).expect("HMAC accepts any key length");
    mac.update(raw_body);
    let computed = mac.finalize().into_bytes();

    bool::from(computed.as_slice().ct_eq(&provided))
}

#[cfg(test)]
mod test {
    use super::*;

    /// Computes the signature the way the platform does.
    fn sign(body: &[u8], secret: &[u8]) -> String {
        let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts any key length");
        mac.update(body);
        STANDARD.encode(mac.finalize().into_bytes())
    }

    #[test]
    fn test_valid_signature_verifies() {
        let body = br#"{"type":"message","content":{"type":"text","text":"hello"}}"#;
        let secret = b"bot-secret-1";
        let signature = sign(body, secret);
        assert!(verify_signature(body, Some(&signature), secret));
    }

    #[test]
    fn test_mutated_body_fails() {
        let body = br#"{"type":"message","content":{"type":"text","text":"hello"}}"#;
        let secret = b"bot-secret-1";
        let signature = sign(body, secret);

        let mut mutated = body.to_vec();
        mutated[10] ^= 0x01;
        assert!(!verify_signature(&mutated, Some(&signature), secret));
    }

    #[test]
    fn test_mutated_signature_fails() {
        let body = br#"{"type":"message"}"#;
        let secret = b"bot-secret-1";
        let signature = sign(body, secret);

        // Swap the first base64 character for a different one so the value
        // still decodes but the digest no longer matches
        let mut chars: Vec<char> = signature.chars().collect();
        chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
        let mutated: String = chars.into_iter().collect();
        assert_ne!(signature, mutated);
        assert!(!verify_signature(body, Some(&mutated), secret));
    }

    #[test]
    fn test_wrong_secret_fails() {
        let body = br#"{"type":"message"}"#;
        let signature = sign(body, b"bot-secret-1");
        assert!(!verify_signature(body, Some(&signature), b"bot-secret-2"));
    }

    #[test]
    fn test_absent_header_fails() {
        let body = br#"{"type":"message"}"#;
        assert!(!verify_signature(body, None, b"bot-secret-1"));
    }

    #[test]
    fn test_empty_body_fails() {
        let secret = b"bot-secret-1";
        let signature = sign(b"", secret);
        assert!(!verify_signature(b"", Some(&signature), secret));
    }

    #[test]
    fn test_undecodable_header_fails() {
        let body = br#"{"type":"message"}"#;
        assert!(!verify_signature(body, Some("not base64 !!"), b"bot-secret-1"));
    }

    #[test]
    fn test_truncated_signature_fails() {
        let body = br#"{"type":"message"}"#;
        let secret = b"bot-secret-1";
        let signature = sign(body, secret);
        // Chop to a 24-char prefix, still valid base64 of a shorter digest
        assert!(!verify_signature(body, Some(&signature[..24]), secret));
    }

    #[test]
    fn test_empty_secret_still_computes() {
        let body = br#"{"type":"message"}"#;
        let signature = sign(body, b"");
        assert!(verify_signature(body, Some(&signature), b""));
    }
}
