//! Mock data generation
//!
//! Records are regenerated on every call. With a seed configured, every call
//! starts from the same RNG state and returns identical data.

mod profile;
mod trades;
mod traders;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::{Trade, Trader, TraderProfile};

const HANDLE_PREFIXES: &[&str] = &[
    "@trader", "@crypto", "@nft", "@web3", "@defi", "@sol", "@whale", "@alpha", "@based",
    "@degen",
];

const BASE58_ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Generates leaderboard, profile and trade records
#[derive(Debug, Clone, Default)]
pub struct MockDataService {
    seed: Option<u64>,
}

impl MockDataService {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn traders(&self, count: usize) -> Vec<Trader> {
        traders::generate(&mut self.rng(), count)
    }

    /// Random profile carrying the requested address
    pub fn profile(&self, address: &str) -> TraderProfile {
        let mut profile = profile::generate(&mut self.rng());
        profile.address = address.to_string();
        profile
    }

    pub fn trades(&self, count: usize) -> Vec<Trade> {
        trades::generate(&mut self.rng(), count)
    }
}

/// Round to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn hex_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let digits: String = (0..40)
        .map(|_| char::from_digit(rng.gen_range(0..16), 16).unwrap_or('0'))
        .collect();
    format!("0x{}", digits)
}

fn base58_address<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| BASE58_ALPHABET[rng.gen_range(0..BASE58_ALPHABET.len())] as char)
        .collect()
}

fn handle<R: Rng + ?Sized>(rng: &mut R) -> String {
    let prefix = HANDLE_PREFIXES.choose(rng).copied().unwrap_or("@trader");
    format!("{}{}", prefix, rng.gen_range(0..9999))
}

fn avatar_url(style: &str, seed: impl std::fmt::Display) -> String {
    format!("https://api.dicebear.com/7.x/{}/svg?seed={}", style, seed)
}

/// `won` in 50..=249 plus 50..=199 losses
fn trade_stats<R: Rng + ?Sized>(rng: &mut R) -> super::types::TradeStats {
    let won = rng.gen_range(50..250);
    let total = won + rng.gen_range(50..200);
    super::types::TradeStats { won, total }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_service_is_deterministic() {
        let service = MockDataService::new(Some(7));
        assert_eq!(service.traders(5), service.traders(5));
        assert_eq!(service.trades(5), service.trades(5));
    }

    #[test]
    fn test_unseeded_service_varies() {
        let service = MockDataService::new(None);
        let a = service.traders(10);
        let b = service.traders(10);
        let addresses_a: Vec<_> = a.iter().map(|t| &t.address).collect();
        let addresses_b: Vec<_> = b.iter().map(|t| &t.address).collect();
        assert_ne!(addresses_a, addresses_b);
    }

    #[test]
    fn test_profile_echoes_address() {
        let service = MockDataService::new(None);
        for address in ["0xdeadbeef", "So11111111111111111111111111111111111111112", "x"] {
            assert_eq!(service.profile(address).address, address);
        }
    }

    #[test]
    fn test_counts_are_honoured() {
        let service = MockDataService::new(Some(1));
        assert_eq!(service.traders(30).len(), 30);
        assert_eq!(service.trades(12).len(), 12);
        assert!(service.traders(0).is_empty());
    }

    #[test]
    fn test_hex_address_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        let address = hex_address(&mut rng);
        assert_eq!(address.len(), 42);
        assert!(address.starts_with("0x"));
        assert!(address[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(-0.005_1), -0.01);
        assert_eq!(round2(15.0), 15.0);
    }
}
