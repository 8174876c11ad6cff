// ============================================================================
// Mix Request
// Typed, validated form of a solve request
// ============================================================================

use super::component::{Component, MixMode, MixTarget};
use super::errors::{MixError, MixResult};
use crate::numeric::Rational;

/// Minimum number of components accepted by a complex request
pub const MIN_COMPLEX_COMPONENTS: usize = 3;

/// A validated solve request
///
/// Constructed only through [`MixRequest::simple`] and
/// [`MixRequest::complex`], which enforce `S > 0`, the component count and
/// positive priorities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MixRequest {
    /// Classic two-component alligation
    Simple {
        first: Component,
        second: Component,
        target: MixTarget,
    },

    /// Three or more components resolved by `mode`
    Complex {
        components: Vec<Component>,
        target: MixTarget,
        mode: MixMode,
    },
}

impl MixRequest {
    /// Two implicit components `a1`, `a2`, target intensity `m`, total `S`.
    pub fn simple(
        a1: Rational,
        a2: Rational,
        desired_intensity: Rational,
        total_amount: Rational,
    ) -> MixResult<Self> {
        Ok(MixRequest::Simple {
            first: Component::new(Component::default_name(0), a1),
            second: Component::new(Component::default_name(1), a2),
            target: MixTarget::new(desired_intensity, total_amount)?,
        })
    }

    /// N >= 3 named components. Blank names are replaced by defaults.
    pub fn complex(
        components: Vec<Component>,
        desired_intensity: Rational,
        total_amount: Rational,
        mode: MixMode,
    ) -> MixResult<Self> {
        if components.len() < MIN_COMPLEX_COMPONENTS {
            return Err(MixError::validation(format!(
                "at least {} components are required, got {}",
                MIN_COMPLEX_COMPONENTS,
                components.len()
            )));
        }

        let target = MixTarget::new(desired_intensity, total_amount)?;

        let components = components
            .into_iter()
            .enumerate()
            .map(|(index, mut component)| {
                if component.priority == Some(0) {
                    return Err(MixError::validation(format!(
                        "priority of component {} must be a positive integer",
                        index + 1
                    )));
                }
                if component.name.trim().is_empty() {
                    component.name = Component::default_name(index);
                }
                Ok(component)
            })
            .collect::<MixResult<Vec<_>>>()?;

        Ok(MixRequest::Complex {
            components,
            target,
            mode,
        })
    }

    pub fn target(&self) -> &MixTarget {
        match self {
            MixRequest::Simple { target, .. } | MixRequest::Complex { target, .. } => target,
        }
    }

    pub fn component_count(&self) -> usize {
        match self {
            MixRequest::Simple { .. } => 2,
            MixRequest::Complex { components, .. } => components.len(),
        }
    }

    /// Short name for logs and events
    pub fn kind(&self) -> &'static str {
        match self {
            MixRequest::Simple { .. } => "simple",
            MixRequest::Complex {
                mode: MixMode::Standard,
                ..
            } => "complex/standard",
            MixRequest::Complex {
                mode: MixMode::Priority,
                ..
            } => "complex/priority",
        }
    }
}
