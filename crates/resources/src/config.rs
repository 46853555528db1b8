//! Bottle path configuration loaded from a text file.
//!
//! The file is a flat list of whitespace-delimited tokens: the bottle count,
//! the fragment count `F`, then `F` lines of `x z tangent_x tangent_z`
//! describing the control points of the closed-loop path. Only the X and Z
//! components are stored in the file; Y is always zero.
//!
//! Loading is all-or-nothing: a missing file or any missing/malformed token
//! is an error, and no partially-populated table is ever returned.

use std::fmt::Display;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use glam::Vec3;
use tracing::info;

use crate::error::{ResourceError, ResourceResult};

/// Immutable control-point table for the bottle path.
///
/// Loaded once at startup and shared read-only (via `Arc`) by every
/// spline-animated node.
#[derive(Debug, Clone)]
pub struct PathConfig {
    bottles: usize,
    fragments: usize,
    points: Vec<Vec3>,
    tangents: Vec<Vec3>,
}

impl PathConfig {
    /// Load the configuration from a text file.
    pub fn load(path: impl AsRef<Path>) -> ResourceResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ResourceError::ConfigOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = text.parse().map_err(|message| ResourceError::ConfigParse {
            path: path.to_path_buf(),
            message,
        })?;

        info!(
            "Loaded path configuration '{}': {} bottles, {} fragments",
            path.display(),
            config.bottles,
            config.fragments
        );
        Ok(config)
    }

    /// Number of bottles to place on the path.
    pub fn bottles(&self) -> usize {
        self.bottles
    }

    /// Number of path segments (equals the number of control points).
    pub fn fragments(&self) -> usize {
        self.fragments
    }

    /// Control points of the closed loop, one per fragment.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Tangent vectors, one per control point.
    pub fn tangents(&self) -> &[Vec3] {
        &self.tangents
    }
}

impl FromStr for PathConfig {
    type Err = String;

    /// Parse the raw token stream; [`PathConfig::load`] attaches the file
    /// path to errors.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut tokens = text.split_whitespace();

        let bottles = next_field(&mut tokens, "bottle count")?;
        let fragments: usize = next_field(&mut tokens, "fragment count")?;
        // the closed-loop wrap needs a positive modulus
        if fragments == 0 {
            return Err("fragment count must be positive".to_string());
        }

        let mut points = Vec::with_capacity(fragments);
        let mut tangents = Vec::with_capacity(fragments);
        for i in 0..fragments {
            let x: f32 = next_field(&mut tokens, format_args!("point {i} x"))?;
            let z: f32 = next_field(&mut tokens, format_args!("point {i} z"))?;
            let tx: f32 = next_field(&mut tokens, format_args!("point {i} tangent x"))?;
            let tz: f32 = next_field(&mut tokens, format_args!("point {i} tangent z"))?;
            points.push(Vec3::new(x, 0.0, z));
            tangents.push(Vec3::new(tx, 0.0, tz));
        }

        Ok(Self {
            bottles,
            fragments,
            points,
            tangents,
        })
    }
}

fn next_field<T: FromStr>(tokens: &mut SplitWhitespace, what: impl Display) -> Result<T, String> {
    let token = tokens.next().ok_or_else(|| format!("missing {what}"))?;
    token
        .parse()
        .map_err(|_| format!("invalid {what}: '{token}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed() {
        let config = "3 2\n1.0 2.0 3.0 4.0\n-5.0 6.5 0.0 -7.0\n"
            .parse::<PathConfig>()
            .expect("well-formed config should parse");

        assert_eq!(config.bottles(), 3);
        assert_eq!(config.fragments(), 2);
        assert_eq!(config.points()[0], Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(config.tangents()[0], Vec3::new(3.0, 0.0, 4.0));
        assert_eq!(config.points()[1], Vec3::new(-5.0, 0.0, 6.5));
        assert_eq!(config.tangents()[1], Vec3::new(0.0, 0.0, -7.0));
    }

    #[test]
    fn test_parse_ignores_line_structure() {
        // tokens may be separated by any whitespace, not just newlines
        let config = "1 1 0 0 0 0"
            .parse::<PathConfig>()
            .expect("single-line config should parse");
        assert_eq!(config.fragments(), 1);
    }

    #[test]
    fn test_truncated_input_is_rejected() {
        let err = "2 2\n1.0 2.0 3.0 4.0\n5.0".parse::<PathConfig>().unwrap_err();
        assert!(err.contains("point 1 z"), "unexpected message: {err}");
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let err = "2 2\n1.0 abc 3.0 4.0\n0 0 0 0".parse::<PathConfig>().unwrap_err();
        assert!(err.contains("point 0 z"), "unexpected message: {err}");
        assert!(err.contains("abc"), "unexpected message: {err}");
    }

    #[test]
    fn test_missing_header_is_rejected() {
        let err = "".parse::<PathConfig>().unwrap_err();
        assert!(err.contains("bottle count"), "unexpected message: {err}");
    }

    #[test]
    fn test_zero_fragments_is_rejected() {
        let err = "3 0".parse::<PathConfig>().unwrap_err();
        assert!(err.contains("positive"), "unexpected message: {err}");
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = PathConfig::load("/nonexistent/path.txt").unwrap_err();
        assert!(matches!(err, ResourceError::ConfigOpen { .. }));
    }
}
