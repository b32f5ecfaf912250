//! Configuration types for the state core

use std::time::Duration;

use crate::{Result, StateError};

/// Zone index of the main zone.
pub const DEFAULT_ACTIVE_ZONE: usize = 0;

/// Configuration for a [`ReceiverState`](crate::ReceiverState)
#[derive(Debug, Clone)]
pub struct StateConfig {
    /// Zone this session controls; fixed for the lifetime of the state
    /// Default: 0 (main zone)
    pub active_zone: usize,

    /// Size of the slices the raw receiver information payload is logged in
    /// Default: 512 characters
    pub payload_log_chunk: usize,

    /// Settings for the default artwork decoder
    pub decoder: DecoderConfig,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            active_zone: DEFAULT_ACTIVE_ZONE,
            payload_log_chunk: 512,
            decoder: DecoderConfig::default(),
        }
    }
}

impl StateConfig {
    /// Create a new StateConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration and return any issues
    pub fn validate(&self) -> Result<()> {
        if self.payload_log_chunk == 0 {
            return Err(StateError::InvalidConfig(
                "Payload log chunk must be greater than 0".to_string(),
            ));
        }

        self.decoder.validate()
    }

    pub fn with_active_zone(mut self, zone: usize) -> Self {
        self.active_zone = zone;
        self
    }

    pub fn with_payload_log_chunk(mut self, chunk: usize) -> Self {
        self.payload_log_chunk = chunk;
        self
    }

    pub fn with_decoder(mut self, decoder: DecoderConfig) -> Self {
        self.decoder = decoder;
        self
    }
}

/// Configuration for [`RawArtworkDecoder`](crate::artwork::RawArtworkDecoder)
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    /// Timeout for fetching artwork by URL
    /// Default: 5 seconds
    pub fetch_timeout: Duration,

    /// Largest accepted artwork body
    /// Default: 4 MiB
    pub max_artwork_bytes: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(5),
            max_artwork_bytes: 4 * 1024 * 1024,
        }
    }
}

impl DecoderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.fetch_timeout == Duration::ZERO {
            return Err(StateError::InvalidConfig(
                "Artwork fetch timeout must be greater than 0".to_string(),
            ));
        }

        if self.max_artwork_bytes == 0 {
            return Err(StateError::InvalidConfig(
                "Max artwork bytes must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn with_max_artwork_bytes(mut self, max: usize) -> Self {
        self.max_artwork_bytes = max;
        self
    }
}
