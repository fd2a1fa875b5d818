//! Signed access and refresh tokens.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use jiff::{SignedDuration, Timestamp};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::{Error as JwtError, ErrorKind as JwtErrorKind},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::auth::actor::ActorKind;

/// Shortest signing secret accepted, in bytes.
pub const MIN_SECRET_LENGTH: usize = 32;

/// Which half of a token pair a token is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Claims carried by every token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Actor record identifier.
    pub sub: Uuid,

    pub kind: ActorKind,

    pub typ: TokenType,

    pub iat: i64,

    pub exp: i64,
}

/// Token lifetimes and signing secret.
pub struct TokenSettings {
    pub secret: Zeroizing<String>,
    pub access_ttl: SignedDuration,
    pub refresh_ttl: SignedDuration,
}

impl Debug for TokenSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("TokenSettings")
            .field("secret", &"<redacted>")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

/// A freshly issued access/refresh pair.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,

    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

impl Debug for TokenPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("TokenPair")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token signing secret must be at least {MIN_SECRET_LENGTH} bytes")]
    WeakSecret,

    #[error("token lifetimes must be positive")]
    InvalidLifetime,

    #[error("token is malformed")]
    Malformed,

    #[error("token has expired")]
    Expired,

    #[error("failed to sign token")]
    Signing(#[source] JwtError),
}

/// Issues and validates HS256 tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    access_ttl: SignedDuration,
    refresh_ttl: SignedDuration,
}

impl Debug for TokenIssuer {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("TokenIssuer")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer {
    /// Build an issuer from settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the secret is too short or a lifetime is not positive.
    pub fn new(settings: &TokenSettings) -> Result<Self, TokenError> {
        if settings.secret.len() < MIN_SECRET_LENGTH {
            return Err(TokenError::WeakSecret);
        }

        if !settings.access_ttl.is_positive() || !settings.refresh_ttl.is_positive() {
            return Err(TokenError::InvalidLifetime);
        }

        let mut validation = Validation::new(Algorithm::HS256);

        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);

        Ok(Self {
            encoding: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding: DecodingKey::from_secret(settings.secret.as_bytes()),
            validation,
            access_ttl: settings.access_ttl,
            refresh_ttl: settings.refresh_ttl,
        })
    }

    /// Issue an access/refresh pair for an actor.
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails.
    pub fn issue_pair(&self, subject: Uuid, kind: ActorKind) -> Result<TokenPair, TokenError> {
        let now = Timestamp::now();

        Ok(TokenPair {
            access_token: self.issue_at(subject, kind, TokenType::Access, now)?,
            refresh_token: self.issue_at(subject, kind, TokenType::Refresh, now)?,
            expires_in: self.access_ttl.as_secs(),
        })
    }

    pub(crate) fn issue_at(
        &self,
        subject: Uuid,
        kind: ActorKind,
        typ: TokenType,
        issued_at: Timestamp,
    ) -> Result<String, TokenError> {
        let ttl = match typ {
            TokenType::Access => self.access_ttl,
            TokenType::Refresh => self.refresh_ttl,
        };

        let iat = issued_at.as_second();

        let claims = Claims {
            sub: subject,
            kind,
            typ,
            iat,
            exp: iat.saturating_add(ttl.as_secs()),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(TokenError::Signing)
    }

    /// Verify signature, expiry and token type.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Expired`] for expired tokens and
    /// [`TokenError::Malformed`] for anything else that fails validation.
    pub fn decode(&self, token: &str, expected: TokenType) -> Result<Claims, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|error| match error.kind() {
                JwtErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })?
            .claims;

        if claims.typ != expected {
            return Err(TokenError::Malformed);
        }

        Ok(claims)
    }
}
