//! Tests for the validated global configuration.

use super::*;

/// Ensures the defaults pass the same validation as user supplied values.
#[test]
fn default_config_is_valid() {
    let cfg = GlobalConfig::default();
    assert_eq!(
        GlobalConfig::new(cfg.ring_segments, cfg.ring_scale, cfg.particle_size),
        Ok(cfg)
    );
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// assert!(GlobalConfig::new(0, 0.35, 0.1).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0, 0.35, 0.1).unwrap_err(),
        ConfigError::InvalidRingSegments(0)
    );
    assert_eq!(
        GlobalConfig::new(20, -1.0, 0.1).unwrap_err(),
        ConfigError::InvalidRingScale(-1.0)
    );
    assert_eq!(
        GlobalConfig::new(20, 0.35, 0.0).unwrap_err(),
        ConfigError::InvalidParticleSize(0.0)
    );
}

#[test]
fn non_finite_scale_is_rejected() {
    assert!(matches!(
        GlobalConfig::new(20, f32::NAN, 0.1),
        Err(ConfigError::InvalidRingScale(_))
    ));
    assert!(GlobalConfig::new(20, 0.35, f32::INFINITY).is_err());
}

#[test]
fn error_messages_name_the_field() {
    let err = ConfigError::InvalidRingSegments(0);
    assert!(err.to_string().contains("ring_segments"));
    let err = ConfigError::InvalidParticleSize(-2.0);
    assert!(err.to_string().contains("particle_size"));
}
