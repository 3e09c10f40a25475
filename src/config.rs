use std::net::{Ipv4Addr, SocketAddr};

use crate::parser::Grammar;
use crate::protocol::DEFAULT_MAX_UPLOAD_BYTES;

/// Upload server settings.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub address: SocketAddr,
    /// Largest accepted request body, in bytes.
    pub max_upload_bytes: usize,
    /// Option-line grammar applied to extracted text.
    pub grammar: Grammar,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: SocketAddr::from((Ipv4Addr::LOCALHOST, 3000)),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            grammar: Grammar::Positional,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::DEFAULT_ADDRESS;

    #[test]
    fn test_default_address_matches_cli_default() {
        let default = ServerConfig::default();
        assert_eq!(default.address, DEFAULT_ADDRESS.parse::<SocketAddr>().unwrap());
        assert_eq!(default.grammar, Grammar::Positional);
    }
}
