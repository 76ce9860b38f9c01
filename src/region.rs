use crate::check::Tolerance;

/// Metadata for a bracketed compute region.
///
/// Names the region, the scalar it declares as its output and the tolerance
/// that scalar is validated with. External tooling may instrument or
/// approximate the region as a unit. The kernels never consult it; the
/// harness only takes default tolerances from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub name: &'static str,
    pub output: &'static str,
    pub tolerance: Tolerance,
}

impl Region {
    pub const fn new(name: &'static str, output: &'static str, tolerance: Tolerance) -> Self {
        Self {
            name,
            output,
            tolerance,
        }
    }
}

/// Renders the begin / output / end marker triple, one per line.
impl core::fmt::Display for Region {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "begin {}", self.name)?;
        writeln!(f, "output {} {}", self.output, self.tolerance)?;
        write!(f, "end {}", self.name)
    }
}
