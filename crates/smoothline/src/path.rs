//! Vector path output.
//!
//! A path is a sequence of drawing commands for backends that natively draw
//! cubic Beziers. Gaps in a series become separate sub-paths.

use crate::curve::{CubicBezier, DEFAULT_LENGTH_SAMPLES};
use crate::error::{CurveError, CurveResult};
use glam::Vec2;

/// A command in a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move to a new position without drawing, starting a sub-path.
    MoveTo(Vec2),
    /// Draw a line to a position.
    LineTo(Vec2),
    /// Draw a cubic Bezier curve.
    CubicTo {
        /// First control point
        control1: Vec2,
        /// Second control point
        control2: Vec2,
        /// End point
        to: Vec2,
    },
    /// Close the current sub-path by drawing a line to the start.
    Close,
}

/// A 2D path consisting of drawing commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a path from a list of commands.
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Get the commands in this path.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Get the number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Number of sub-paths (one per `MoveTo`).
    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, PathCommand::MoveTo(_)))
            .count()
    }

    /// Get the bounding box of the path.
    ///
    /// Control points are included, so the box is conservative.
    /// Returns (min, max) corners.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        if self.commands.is_empty() {
            return None;
        }

        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(to) | PathCommand::LineTo(to) => {
                    min = min.min(*to);
                    max = max.max(*to);
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    min = min.min(*control1).min(*control2).min(*to);
                    max = max.max(*control1).max(*control2).max(*to);
                }
                PathCommand::Close => {}
            }
        }

        if min.is_finite() && max.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }

    /// Iterator over the cubic segments of the path.
    pub fn cubic_curves(&self) -> impl Iterator<Item = CubicBezier> + '_ {
        let mut current = Vec2::ZERO;
        self.commands.iter().filter_map(move |cmd| match cmd {
            PathCommand::MoveTo(to) | PathCommand::LineTo(to) => {
                current = *to;
                None
            }
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => {
                let curve = CubicBezier::new(current, *control1, *control2, *to);
                current = *to;
                Some(curve)
            }
            PathCommand::Close => None,
        })
    }

    /// Flatten into one polyline per sub-path.
    ///
    /// Each cubic is sampled with `samples_per_curve` points; closed sub-paths
    /// end with their start point. At least two samples are required.
    pub fn flatten(&self, samples_per_curve: usize) -> CurveResult<Vec<Vec<Vec2>>> {
        if samples_per_curve < 2 {
            return Err(CurveError::InvalidSampleCount(samples_per_curve));
        }

        let mut polylines: Vec<Vec<Vec2>> = Vec::new();
        let mut current = Vec2::ZERO;
        let mut subpath_start = Vec2::ZERO;

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(to) => {
                    polylines.push(vec![*to]);
                    current = *to;
                    subpath_start = *to;
                }
                PathCommand::LineTo(to) => {
                    active(&mut polylines, current).push(*to);
                    current = *to;
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    let curve = CubicBezier::new(current, *control1, *control2, *to);
                    let samples = curve.sample(samples_per_curve);
                    active(&mut polylines, current).extend(samples.into_iter().skip(1));
                    current = *to;
                }
                PathCommand::Close => {
                    if current != subpath_start {
                        active(&mut polylines, current).push(subpath_start);
                    }
                    current = subpath_start;
                }
            }
        }

        Ok(polylines)
    }

    /// Approximate total drawn length, including closing lines.
    pub fn length(&self) -> f32 {
        let mut length = 0.0;
        let mut current = Vec2::ZERO;
        let mut subpath_start = Vec2::ZERO;

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(to) => {
                    current = *to;
                    subpath_start = *to;
                }
                PathCommand::LineTo(to) => {
                    length += current.distance(*to);
                    current = *to;
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    length += CubicBezier::new(current, *control1, *control2, *to)
                        .arc_length(DEFAULT_LENGTH_SAMPLES);
                    current = *to;
                }
                PathCommand::Close => {
                    length += current.distance(subpath_start);
                    current = subpath_start;
                }
            }
        }

        length
    }
}

/// Polyline being extended; a drawing command without a preceding `MoveTo`
/// starts one at `current`.
fn active(polylines: &mut Vec<Vec<Vec2>>, current: Vec2) -> &mut Vec<Vec2> {
    if polylines.is_empty() {
        polylines.push(vec![current]);
    }
    let last = polylines.len() - 1;
    &mut polylines[last]
}

/// Builder for constructing paths.
#[derive(Debug, Default)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
    current_pos: Vec2,
    subpath_start: Vec2,
}

impl PathBuilder {
    /// Create a new path builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to a new position without drawing.
    pub fn move_to(&mut self, to: Vec2) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(to));
        self.current_pos = to;
        self.subpath_start = to;
        self
    }

    /// Draw a line to a position.
    pub fn line_to(&mut self, to: Vec2) -> &mut Self {
        self.commands.push(PathCommand::LineTo(to));
        self.current_pos = to;
        self
    }

    /// Draw a cubic Bezier curve.
    pub fn cubic_to(&mut self, control1: Vec2, control2: Vec2, to: Vec2) -> &mut Self {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to,
        });
        self.current_pos = to;
        self
    }

    /// Close the current sub-path.
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self.current_pos = self.subpath_start;
        self
    }

    /// Get the current position.
    pub fn current_pos(&self) -> Vec2 {
        self.current_pos
    }

    /// Build the path.
    pub fn build(self) -> Path {
        Path {
            commands: self.commands,
        }
    }
}
