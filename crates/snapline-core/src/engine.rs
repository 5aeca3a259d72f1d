//! Center alignment detection.

use crate::axis::Axis;
use crate::error::{SnapError, SnapLineResult};
use crate::object::CanvasObject;

/// Distance between two centers, in canvas units, under which they snap.
pub const DEFAULT_TOLERANCE: f64 = 20.0;

/// Snap outcome for a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SnapOutcome {
    #[default]
    NoSnap,
    Snap {
        /// Center of the candidate the moving object aligned with.
        coordinate: f64,
        /// Stored coordinate that puts the moving object's center there.
        leading: f64,
    },
}

impl SnapOutcome {
    pub fn is_snap(&self) -> bool {
        matches!(self, SnapOutcome::Snap { .. })
    }

    /// The aligned center coordinate, if any.
    pub fn coordinate(&self) -> Option<f64> {
        match *self {
            SnapOutcome::Snap { coordinate, .. } => Some(coordinate),
            SnapOutcome::NoSnap => None,
        }
    }

    /// The corrected stored coordinate, if any.
    pub fn leading(&self) -> Option<f64> {
        match *self {
            SnapOutcome::Snap { leading, .. } => Some(leading),
            SnapOutcome::NoSnap => None,
        }
    }
}

/// Result of one snap computation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SnapResult {
    pub horizontal: SnapOutcome,
    pub vertical: SnapOutcome,
}

impl SnapResult {
    pub fn outcome(&self, axis: Axis) -> SnapOutcome {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    fn outcome_mut(&mut self, axis: Axis) -> &mut SnapOutcome {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    /// Check if any axis snapped.
    pub fn is_snapped(&self) -> bool {
        self.horizontal.is_snap() || self.vertical.is_snap()
    }

    /// Write the corrected coordinates into `obj`, leaving unsnapped axes alone.
    pub fn apply_to(&self, obj: &mut CanvasObject) {
        for axis in Axis::ALL {
            if let Some(leading) = self.outcome(axis).leading() {
                obj.set_position_on(axis, leading);
            }
        }
    }
}

/// How to choose between several candidates within tolerance on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// The last matching candidate in enumeration order wins.
    #[default]
    LastMatch,
    /// The candidate with the smallest center delta wins; ties go to the later one.
    Nearest,
}

/// Detects center alignment between a moving object and candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentEngine {
    tolerance: f64,
    policy: MatchPolicy,
}

impl Default for AlignmentEngine {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            policy: MatchPolicy::LastMatch,
        }
    }
}

impl AlignmentEngine {
    /// Create an engine with a custom tolerance.
    pub fn new(tolerance: f64) -> SnapLineResult<Self> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(SnapError::InvalidTolerance(tolerance));
        }
        Ok(Self {
            tolerance,
            ..Self::default()
        })
    }

    /// Set the match policy.
    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Compare the centers of `moving` against every candidate, per axis.
    ///
    /// The moving object itself is skipped if it appears among the
    /// candidates. Every candidate is compared against the moving object's
    /// current center, so corrections found earlier in the same call never
    /// shift later comparisons. `moving` is not modified; use
    /// [`SnapResult::apply_to`] to move it.
    pub fn compute_snap<'a, I>(
        &self,
        moving: &CanvasObject,
        candidates: I,
    ) -> SnapLineResult<SnapResult>
    where
        I: IntoIterator<Item = &'a CanvasObject>,
    {
        moving.validate()?;
        let moving_centers = Axis::ALL.map(|axis| moving.center(axis));

        let mut result = SnapResult::default();
        let mut best_delta = [f64::INFINITY; 2];

        for candidate in candidates {
            if candidate.id() == moving.id() {
                continue;
            }
            candidate.validate()?;

            for axis in Axis::ALL {
                let center = candidate.center(axis);
                let delta = (moving_centers[axis.index()] - center).abs();
                if delta >= self.tolerance {
                    continue;
                }
                if self.policy == MatchPolicy::Nearest && delta > best_delta[axis.index()] {
                    continue;
                }
                best_delta[axis.index()] = delta;
                *result.outcome_mut(axis) = SnapOutcome::Snap {
                    coordinate: center,
                    leading: moving.leading_for(axis, center),
                };
            }
        }

        log::trace!(
            "snap for {}: horizontal {:?}, vertical {:?}",
            moving.id(),
            result.horizontal,
            result.vertical
        );
        Ok(result)
    }
}
