//! Chain registry: identifiers, version bytes, and address prefixes.
//!
//! Every chain parameter is carried as plain data and passed explicitly
//! into the encoders; there is no shared mutable configuration, so
//! derivations for different chains can run concurrently.

pub mod address;

/// A supported chain identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Chain {
    /// Bitcoin: bech32 segwit addresses, WIF version 0x80.
    Btc,
    /// FLO: legacy Base58Check addresses, versions 0x23/0xa3.
    Flo,
    /// Avalanche C-Chain: EVM keccak addresses, raw hex key export.
    Avax,
}

/// Base58Check version bytes for a chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VersionBytes {
    /// Version byte prepended to the public key hash in legacy addresses.
    pub public: u8,
    /// Version byte prepended to the private key in WIF export.
    pub private: u8,
}

/// BTC version bytes (legacy address 0x00, WIF 0x80).
pub const BTC_VERSIONS: VersionBytes = VersionBytes {
    public: 0x00,
    private: 0x80,
};

/// FLO version bytes (legacy address 0x23, WIF 0xa3).
pub const FLO_VERSIONS: VersionBytes = VersionBytes {
    public: 0x23,
    private: 0xa3,
};

/// Human-readable prefix for BTC bech32 addresses.
pub const BTC_HRP: &str = "bc";

impl Chain {
    /// All registered chains, in result order.
    pub const ALL: [Chain; 3] = [Chain::Btc, Chain::Flo, Chain::Avax];

    /// The Base58Check version bytes for this chain.
    ///
    /// # Returns
    /// `Some(VersionBytes)` for Base58Check chains, `None` for EVM-style
    /// chains whose addresses are hash-derived and carry no version byte.
    pub fn versions(&self) -> Option<VersionBytes> {
        match self {
            Chain::Btc => Some(BTC_VERSIONS),
            Chain::Flo => Some(FLO_VERSIONS),
            Chain::Avax => None,
        }
    }

    /// The chain's ticker symbol.
    pub fn ticker(&self) -> &'static str {
        match self {
            Chain::Btc => "BTC",
            Chain::Flo => "FLO",
            Chain::Avax => "AVAX",
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ticker())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_table() {
        assert_eq!(Chain::Btc.versions(), Some(VersionBytes { public: 0x00, private: 0x80 }));
        assert_eq!(Chain::Flo.versions(), Some(VersionBytes { public: 0x23, private: 0xa3 }));
        assert_eq!(Chain::Avax.versions(), None);
    }

    #[test]
    fn test_result_order() {
        assert_eq!(Chain::ALL, [Chain::Btc, Chain::Flo, Chain::Avax]);
    }

    #[test]
    fn test_tickers() {
        let tickers: Vec<&str> = Chain::ALL.iter().map(|c| c.ticker()).collect();
        assert_eq!(tickers, ["BTC", "FLO", "AVAX"]);
        assert_eq!(Chain::Flo.to_string(), "FLO");
    }
}
