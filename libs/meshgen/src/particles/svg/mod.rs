//! SVG path point sampler.
//!
//! Understands the small subset of the path mini-language that vector editors
//! emit for simple outlines, tokenized on whitespace:
//!
//! | Command | Operands            | Effect                                   |
//! |---------|---------------------|------------------------------------------|
//! | `M`     | `x,y`               | absolute move                            |
//! | `m` `l` | `x,y`               | relative move / line                     |
//! | `c`     | `x1,y1 x2,y2 x,y`   | relative curve, only the end point kept  |
//!
//! A command letter stays active for every coordinate token that follows it.
//! Path `(x, y)` lands on the generator's `(x, -y, 0)` since SVG's y axis
//! points down.

use log::{debug, warn};

use crate::core::vec::Vec3;
use crate::error::PathError;

/// Everything recorded while walking a path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathSamples {
    /// Every visited position, in path order.
    pub points: Vec<Vec3>,
    /// Component-wise minimum over `points`.
    pub min: Vec3,
    /// Component-wise maximum over `points`.
    pub max: Vec3,
    /// Sum of `points`, for the centroid.
    pub sum: Vec3,
    /// Why parsing stopped early, if it did.
    pub stopped: Option<PathError>,
}

impl PathSamples {
    fn record(&mut self, point: Vec3) {
        if self.points.is_empty() {
            self.min = point;
            self.max = point;
        } else {
            self.min = self.min.min(point);
            self.max = self.max.max(point);
        }
        self.sum += point;
        self.points.push(point);
    }

    /// Mean of the recorded points, `None` when nothing was recorded.
    pub fn centroid(&self) -> Option<Vec3> {
        if self.points.is_empty() {
            None
        } else {
            Some(self.sum / self.points.len() as f32)
        }
    }

    /// Length of the bounding box diagonal.
    pub fn extent(&self) -> f32 {
        self.min.distance(self.max)
    }

    /// Moves the centroid onto `origin` and scales uniformly so the bounding
    /// box diagonal becomes `width`.
    ///
    /// A path without extent (a single point, or all points equal) collapses
    /// onto `origin`.
    pub fn fit(self, width: f32, origin: Vec3) -> Vec<Vec3> {
        let Some(centroid) = self.centroid() else {
            return Vec::new();
        };

        let extent = self.extent();
        let scale = if extent > f32::EPSILON {
            width / extent
        } else {
            warn!("svg path has no extent, collapsing {} points", self.points.len());
            0.0
        };

        self.points
            .into_iter()
            .map(|point| origin + (point - centroid) * scale)
            .collect()
    }
}

/// Walks `path` and records every visited position.
///
/// Parsing stops at the first token it cannot interpret; the points gathered
/// up to that token are kept and the reason lands in
/// [`PathSamples::stopped`].
///
/// # Examples
/// ```
/// use meshgen::particles::parse_path;
/// use meshgen::{PathError, Vec3};
///
/// let samples = parse_path("M 1,1 l 2,0 q 5,5");
/// assert_eq!(samples.points, vec![Vec3::new(1.0, -1.0, 0.0), Vec3::new(3.0, -1.0, 0.0)]);
/// assert_eq!(samples.stopped, Some(PathError::UnknownCommand("q".into())));
/// ```
pub fn parse_path(path: &str) -> PathSamples {
    let tokens: Vec<&str> = path.split_whitespace().collect();
    let mut samples = PathSamples::default();
    let mut command = None;
    let mut position = Vec3::ZERO;
    let mut index = 0;

    while index < tokens.len() {
        if let Some(letter) = command_letter(tokens[index]) {
            command = Some(letter);
            index += 1;
            continue;
        }

        match step(command, &tokens, index, position) {
            Ok((next, consumed)) => {
                position = next;
                samples.record(position);
                index += consumed;
            }
            Err(err) => {
                warn!("svg path parsing aborted: {err}");
                samples.stopped = Some(err);
                break;
            }
        }
    }

    samples
}

/// Samples the vertices of `path`, centred on `origin` and scaled so their
/// bounding box diagonal is `width`.
///
/// Malformed input is not an error: parsing stops, the problem is logged and
/// the points read so far are returned. Empty input yields no points.
///
/// # Examples
/// ```
/// use meshgen::{point_svg, Vec3};
///
/// let points = point_svg("M 0,0 l 10,0 l 0,10 l -10,0", 1.0, Vec3::ZERO);
/// assert_eq!(points.len(), 4);
/// assert!((points[0].distance(points[2]) - 1.0).abs() < 1e-5);
/// ```
pub fn point_svg(path: &str, width: f32, origin: Vec3) -> Vec<Vec3> {
    let samples = parse_path(path);
    let points = samples.fit(width, origin);
    debug!("svg path -> {} points", points.len());
    points
}

/// Single-character tokens are command letters.
fn command_letter(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Some(letter),
        _ => None,
    }
}

/// Applies the active command to the operand at `index`, returning the new
/// position and the number of tokens consumed.
fn step(
    command: Option<char>,
    tokens: &[&str],
    index: usize,
    position: Vec3,
) -> Result<(Vec3, usize), PathError> {
    let token = tokens[index];
    match command {
        Some('M') => Ok((parse_pair(token)?, 1)),
        Some('m' | 'l') => Ok((position + parse_pair(token)?, 1)),
        Some('c') => {
            let end = index + 2;
            let end_token = tokens
                .get(end)
                .ok_or(PathError::MissingOperand { command: 'c', index: end })?;
            Ok((position + parse_pair(end_token)?, 3))
        }
        Some(other) => Err(PathError::UnknownCommand(other.to_string())),
        None => Err(PathError::NoCommand(token.to_string())),
    }
}

/// Parses an `x,y` token into generator space.
fn parse_pair(token: &str) -> Result<Vec3, PathError> {
    let invalid = || PathError::InvalidNumber(token.to_string());
    let (x, y) = token.split_once(',').ok_or_else(invalid)?;
    let x: f32 = x.trim().parse().map_err(|_| invalid())?;
    let y: f32 = y.trim().parse().map_err(|_| invalid())?;
    Ok(Vec3::new(x, -y, 0.0))
}
