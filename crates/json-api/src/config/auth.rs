//! Auth Config

use clap::Args;
use jiff::SignedDuration;
use zeroize::Zeroizing;

use tenantry_app::auth::TokenSettings;

/// Token signing and lifetime settings.
#[derive(Args)]
pub struct AuthConfig {
    /// HS256 signing secret, at least 32 bytes
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Access token lifetime in seconds
    #[arg(long, env = "ACCESS_TOKEN_TTL_SECONDS", default_value_t = 900_i64)]
    pub access_token_ttl_seconds: i64,

    /// Refresh token lifetime in seconds
    #[arg(long, env = "REFRESH_TOKEN_TTL_SECONDS", default_value_t = 86_400_i64)]
    pub refresh_token_ttl_seconds: i64,

    /// Administrator role required to manage other administrators; any
    /// administrator may when unset
    #[arg(long, env = "ADMIN_MANAGEMENT_ROLE")]
    pub management_role: Option<String>,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("access_token_ttl_seconds", &self.access_token_ttl_seconds)
            .field("refresh_token_ttl_seconds", &self.refresh_token_ttl_seconds)
            .field("management_role", &self.management_role)
            .finish_non_exhaustive()
    }
}

impl AuthConfig {
    #[must_use]
    pub fn token_settings(&self) -> TokenSettings {
        TokenSettings {
            secret: Zeroizing::new(self.jwt_secret.clone()),
            access_ttl: SignedDuration::from_secs(self.access_token_ttl_seconds),
            refresh_ttl: SignedDuration::from_secs(self.refresh_token_ttl_seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        auth: AuthConfig,
    }

    #[test]
    fn lifetimes_default_to_fifteen_minutes_and_one_day() -> testresult::TestResult {
        let harness = Harness::try_parse_from(["test", "--jwt-secret", "s"])?;
        let settings = harness.auth.token_settings();

        assert_eq!(settings.access_ttl, SignedDuration::from_mins(15));
        assert_eq!(settings.refresh_ttl, SignedDuration::from_hours(24));
        assert_eq!(harness.auth.management_role, None);

        Ok(())
    }
}
