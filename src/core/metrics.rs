use crate::core::{ComplexityLevel, FunctionMetric};

/// Number of functions in each complexity band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplexityDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

impl ComplexityDistribution {
    pub fn from_functions(functions: &[FunctionMetric]) -> Self {
        functions
            .iter()
            .fold(Self::default(), |mut dist, f| {
                match f.complexity_level() {
                    ComplexityLevel::Low => dist.low += 1,
                    ComplexityLevel::Medium => dist.medium += 1,
                    ComplexityLevel::High => dist.high += 1,
                    ComplexityLevel::Critical => dist.critical += 1,
                }
                dist
            })
    }

    pub fn count(&self, level: ComplexityLevel) -> usize {
        match level {
            ComplexityLevel::Low => self.low,
            ComplexityLevel::Medium => self.medium,
            ComplexityLevel::High => self.high,
            ComplexityLevel::Critical => self.critical,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high + self.critical
    }
}

/// Critical functions (CCN > 15), skipping any whose path contains one of
/// `excludes` (case-insensitive), highest CCN first.
pub fn critical_functions<'a>(
    functions: &'a [FunctionMetric],
    excludes: &[String],
) -> Vec<&'a FunctionMetric> {
    let excludes: Vec<String> = excludes.iter().map(|e| e.to_lowercase()).collect();
    let mut critical: Vec<&FunctionMetric> = functions
        .iter()
        .filter(|f| f.complexity_level() == ComplexityLevel::Critical)
        .filter(|f| {
            let path = f.file_path.to_lowercase();
            !excludes.iter().any(|e| !e.is_empty() && path.contains(e.as_str()))
        })
        .collect();
    critical.sort_by(|a, b| b.ccn.cmp(&a.ccn));
    critical
}
