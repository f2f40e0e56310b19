//! Catalog-bound entry point to the codec.

use rand::Rng;
use smbios_catalog::Catalog;

use crate::decode;
use crate::derive::{self, Derivatives};
use crate::encode::{self, GenerationRequest};
use crate::error::{MlbError, SerialError};
use crate::mlb::{self, DEFAULT_MLB_ATTEMPTS};
use crate::serial::{Decoded, Serial};

/// Decodes, generates and derives serials against one catalog.
#[derive(Debug, Clone, Copy)]
pub struct Codec<'a> {
    catalog: &'a Catalog,
    mlb_attempts: u32,
}

impl<'a> Codec<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            mlb_attempts: DEFAULT_MLB_ATTEMPTS,
        }
    }

    /// Sets how many board serial candidates are drawn before giving up.
    #[must_use]
    pub fn with_mlb_attempts(mut self, attempts: u32) -> Self {
        self.mlb_attempts = attempts;
        self
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn mlb_attempts(&self) -> u32 {
        self.mlb_attempts
    }

    pub fn decode(&self, input: &str) -> Result<Decoded, SerialError> {
        decode::decode(self.catalog, input)
    }

    pub fn generate<R>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> Result<Decoded, SerialError>
    where
        R: Rng + ?Sized,
    {
        encode::generate(self.catalog, request, rng)
    }

    pub fn mlb<R>(&self, serial: &Serial, rng: &mut R) -> Result<String, MlbError>
    where
        R: Rng + ?Sized,
    {
        mlb::generate_mlb(self.catalog, serial, self.mlb_attempts, rng)
    }

    pub fn derivatives<'s>(&self, serial: &'s Serial) -> Derivatives<'s> {
        derive::derivatives(serial)
    }
}

impl Codec<'static> {
    /// A codec over the shipped catalog.
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl Default for Codec<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}
