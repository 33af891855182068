//! Highlight computation - which samples fall inside the brush

use tracing::trace;

use super::extent::Extent;
use super::samples::SampleSet;

/// Per-sample highlight flags for one extent
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    flags: Vec<bool>,
    count: usize,
}

impl Selection {
    /// Mark each sample selected iff `lo <= value <= hi`.
    pub fn highlight(extent: Extent, samples: &SampleSet) -> Self {
        let flags: Vec<bool> = samples.values().map(|v| extent.contains(v)).collect();
        let count = flags.iter().filter(|&&f| f).count();
        trace!(%extent, selected = count, total = flags.len(), "Highlight recomputed");
        Self { flags, count }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    /// Number of selected samples
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    /// Values of the selected samples, in sample order
    pub fn selected_values<'a>(&'a self, samples: &'a SampleSet) -> impl Iterator<Item = f64> + 'a {
        samples
            .values()
            .zip(self.flags.iter())
            .filter_map(|(v, &f)| f.then_some(v))
    }
}
