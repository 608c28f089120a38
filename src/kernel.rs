//! kernel.rs
//! Closed set of decay kernels over a normalized distance `u = d / bandwidth`.
//!
//! Every kernel is a row in a static table: its accepted names, declared support
//! and closed-form profile. Resolution by name happens once per operation; the
//! hot loops only see a plain `fn(f64) -> f64`.

use crate::error::{check_bandwidth, GraphError, GraphResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use std::fmt;
use std::str::FromStr;

/// Where a kernel can be non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Support {
    /// Strictly positive for every `u >= 0` (modulo floating point underflow).
    Unbounded,
    /// Non-zero on `[0, 1)` only. `u == 1` is outside the support.
    Unit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Kernel {
    #[default]
    Gaussian,
    Bisquare,
    Triangular,
    Epanechnikov,
    Cosine,
    Uniform,
    Exponential,
}

struct KernelEntry {
    kernel: Kernel,
    names: &'static [&'static str],
    support: Support,
    profile: fn(f64) -> f64,
}

// Indexed by `Kernel as usize`.
static KERNELS: [KernelEntry; 7] = [
    KernelEntry { kernel: Kernel::Gaussian, names: &["gaussian"], support: Support::Unbounded, profile: gaussian },
    KernelEntry { kernel: Kernel::Bisquare, names: &["bisquare"], support: Support::Unit, profile: bisquare },
    KernelEntry { kernel: Kernel::Triangular, names: &["triangular"], support: Support::Unit, profile: triangular },
    KernelEntry {
        kernel: Kernel::Epanechnikov,
        names: &["epanechnikov", "parabolic"],
        support: Support::Unit,
        profile: epanechnikov,
    },
    KernelEntry { kernel: Kernel::Cosine, names: &["cosine"], support: Support::Unit, profile: cosine },
    KernelEntry { kernel: Kernel::Uniform, names: &["uniform", "boxcar"], support: Support::Unit, profile: uniform },
    KernelEntry { kernel: Kernel::Exponential, names: &["exponential"], support: Support::Unbounded, profile: exponential },
];

fn gaussian(u: f64) -> f64 {
    (-0.5 * u * u).exp() / (2.0 * PI).sqrt()
}

fn bisquare(u: f64) -> f64 {
    let t = 1.0 - u * u;
    (15.0 / 16.0) * t * t
}

fn triangular(u: f64) -> f64 {
    1.0 - u
}

fn epanechnikov(u: f64) -> f64 {
    0.75 * (1.0 - u * u)
}

fn cosine(u: f64) -> f64 {
    FRAC_PI_4 * (FRAC_PI_2 * u).cos()
}

fn uniform(_u: f64) -> f64 {
    0.5
}

fn exponential(u: f64) -> f64 {
    (-u).exp()
}

impl Kernel {
    /// All kernels, in table order.
    pub const ALL: [Kernel; 7] = [
        Kernel::Gaussian,
        Kernel::Bisquare,
        Kernel::Triangular,
        Kernel::Epanechnikov,
        Kernel::Cosine,
        Kernel::Uniform,
        Kernel::Exponential,
    ];

    #[inline(always)]
    fn entry(self) -> &'static KernelEntry {
        &KERNELS[self as usize]
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        self.entry().names[0]
    }

    pub fn support(self) -> Support {
        self.entry().support
    }

    /// Weight at a normalized distance `u` that already has the bandwidth applied.
    pub fn evaluate(self, u: f64) -> GraphResult<f64> {
        if !u.is_finite() || u < 0.0 {
            return Err(GraphError::InvalidParameter(format!(
                "normalized distance must be finite and >= 0, got {}",
                u
            )));
        }
        Ok(self.profile(u))
    }

    /// Weight of a raw distance `d` under `bandwidth`.
    pub fn weight(self, distance: f64, bandwidth: f64) -> GraphResult<f64> {
        check_bandwidth(bandwidth)?;
        if !distance.is_finite() || distance < 0.0 {
            return Err(GraphError::InvalidParameter(format!(
                "distance must be finite and >= 0, got {}",
                distance
            )));
        }
        Ok(self.profile(distance / bandwidth))
    }

    /// Unchecked evaluation for validated, non-negative `u`.
    #[inline(always)]
    pub(crate) fn profile(self, u: f64) -> f64 {
        let entry = self.entry();
        match entry.support {
            Support::Unit if u >= 1.0 => 0.0,
            _ => (entry.profile)(u),
        }
    }
}

impl FromStr for Kernel {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        KERNELS
            .iter()
            .find(|entry| entry.names.iter().any(|n| n.eq_ignore_ascii_case(name)))
            .map(|entry| entry.kernel)
            .ok_or_else(|| GraphError::UnknownKernel(s.to_string()))
    }
}

impl TryFrom<String> for Kernel {
    type Error = GraphError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Kernel> for &'static str {
    fn from(kernel: Kernel) -> Self {
        kernel.name()
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Anything an operation can turn into a [`Kernel`]: the enum itself or its name.
pub trait ResolveKernel {
    fn resolve(&self) -> GraphResult<Kernel>;
}

impl ResolveKernel for Kernel {
    fn resolve(&self) -> GraphResult<Kernel> {
        Ok(*self)
    }
}

impl ResolveKernel for str {
    fn resolve(&self) -> GraphResult<Kernel> {
        self.parse()
    }
}

impl ResolveKernel for String {
    fn resolve(&self) -> GraphResult<Kernel> {
        self.parse()
    }
}

impl<T: ResolveKernel + ?Sized> ResolveKernel for &T {
    fn resolve(&self) -> GraphResult<Kernel> {
        (**self).resolve()
    }
}

/// Evaluates the kernel called `kernel_name` at normalized distance `u`.
pub fn evaluate(kernel_name: &str, u: f64) -> GraphResult<f64> {
    kernel_name.parse::<Kernel>()?.evaluate(u)
}
