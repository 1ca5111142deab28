use super::{types::Config, ConfigError};
use crate::catalogue::Catalogue;

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - The catalogue can be built (see `Catalogue::new`)
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    Catalogue::new(config.catalogue.clone())
        .map_err(|e| ConfigError::ValidationError(format!("catalogue: {}", e)))?;

    Ok(())
}
