//! Input fingerprints for priced deliveries
//!
//! A fingerprint identifies the raw input a quote was priced from, so a
//! consumer holding a stored [`PricedDelivery`](crate::PricedDelivery) can
//! tell whether it still matches a delivery request.

use crate::delivery::Delivery;
use crate::error::Result;
use sha2::{Digest, Sha256};

/// Compute `sha256:<16 hex chars>` over the canonical JSON of the input
pub fn fingerprint(delivery: &Delivery) -> Result<String> {
    let canonical = serde_json::to_vec(delivery)?;
    Ok(hash_bytes(&canonical))
}

fn hash_bytes(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let result = hasher.finalize();
    format!("sha256:{}", &hex::encode(result)[..16])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parcel::Parcel;
    use rust_decimal::Decimal;

    #[test]
    fn test_stable_and_input_sensitive() {
        let one = Decimal::ONE;
        let delivery = Delivery::new(vec![Parcel::new(one, one, one, one)], false);
        let a = fingerprint(&delivery).unwrap();
        assert_eq!(a, fingerprint(&delivery.clone()).unwrap());
        assert!(a.starts_with("sha256:"));
        assert_eq!(a.len(), "sha256:".len() + 16);

        let speedy = Delivery {
            speedy_shipping: true,
            ..delivery
        };
        assert_ne!(a, fingerprint(&speedy).unwrap());
    }
}
