//! Shared growth loop
//!
//! Every engine variant runs the same control loop over a flat sample
//! buffer. What differs between variants is captured by [`SampleSource`]:
//! how a region is created, how a sample is folded into it and how far a
//! sample is from it. The neighborhood comes from the configured
//! [`ConnectivityType`].

use super::progress::{ListenerId, ProgressListeners};
use super::queue::CandidateQueue;
use super::region::{RegionStats, RunningMean};
use crate::connectivity::{ConnectivityType, Neighborhood};
use crate::error::{RegionError, RegionResult};
use seedgrow_core::{Extent, LabelImage, Mask, UNASSIGNED};

/// Fraction of the progress range reported during seeding
const SEEDING_SHARE: f64 = 0.1;

/// Pixel data a region growing engine can segment
pub trait SampleSource {
    /// Running statistics kept per region
    type Region: RunningMean;

    /// Neighborhood used when none is configured
    const DEFAULT_CONNECTIVITY: ConnectivityType;

    /// Extent of the sample buffer
    fn extent(&self) -> Extent;

    /// Statistics of a region with no pixels yet
    fn new_region(&self) -> Self::Region;

    /// Fold the sample at `index` into `region`
    fn admit(&self, region: &mut Self::Region, index: usize);

    /// Dissimilarity of the sample at `index` to `region`'s current mean
    fn difference(&self, region: &Self::Region, index: usize) -> f64;
}

/// Region growing configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SrgOptions {
    /// Neighborhood; `None` selects the engine's default
    pub connectivity: Option<ConnectivityType>,
    /// Number of animation snapshots to capture (0 = none)
    pub animation_frames: usize,
}

impl SrgOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set connectivity type
    pub fn with_connectivity(mut self, connectivity: ConnectivityType) -> Self {
        self.connectivity = Some(connectivity);
        self
    }

    /// Set number of animation frames
    pub fn with_animation_frames(mut self, frames: usize) -> Self {
        self.animation_frames = frames;
        self
    }

    fn resolve_connectivity<S: SampleSource>(
        &self,
        extent: Extent,
    ) -> RegionResult<ConnectivityType> {
        let connectivity = self.connectivity.unwrap_or(S::DEFAULT_CONNECTIVITY);
        let planar_source = S::DEFAULT_CONNECTIVITY.is_planar();
        if connectivity.is_planar() != planar_source {
            return Err(RegionError::InvalidParameters(format!(
                "{connectivity:?} connectivity cannot be used on a {} buffer of extent {extent}",
                if planar_source { "planar" } else { "volumetric" }
            )));
        }
        Ok(connectivity)
    }
}

/// Lifecycle of an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    /// Inputs not validated yet
    #[default]
    Uninitialized,
    /// Inputs validated, regions being seeded
    Seeded,
    /// Frontier being drained
    Growing,
    /// Segmentation complete, results available
    Done,
}

/// Result of a completed segmentation
#[derive(Debug, Clone, PartialEq)]
pub struct SrgOutput {
    /// Final label buffer; 0 marks samples no region reached
    pub labels: LabelImage,
    /// Animation snapshots in admission order
    pub frames: Vec<LabelImage>,
    /// Per-region statistics, sorted by label
    pub regions: Vec<RegionStats>,
    /// Total admissions, seeds included
    pub admissions: usize,
}

/// Validated inputs and mutable state of one run
struct Growth<'a, S: SampleSource> {
    samples: &'a S,
    seeds: &'a LabelImage,
    mask: Option<&'a Mask>,
    extent: Extent,
    neighborhood: Neighborhood,
    labels: Vec<u32>,
    queued: Vec<bool>,
    queue: CandidateQueue,
    region_labels: Vec<u32>,
    regions: Vec<S::Region>,
    scratch: Vec<usize>,
    admissions: usize,
    frame_limit: usize,
    frame_interval: usize,
    next_frame_at: usize,
    frames: Vec<Vec<u32>>,
}

impl<'a, S: SampleSource> Growth<'a, S> {
    /// Validate inputs; nothing is allocated for the output before this passes
    fn new(
        samples: &'a S,
        seeds: &'a LabelImage,
        mask: Option<&'a Mask>,
        options: &SrgOptions,
    ) -> RegionResult<Self> {
        let extent = samples.extent();
        extent.ensure_matches(seeds.extent())?;
        if let Some(mask) = mask {
            extent.ensure_matches(mask.extent())?;
        }
        let connectivity = options.resolve_connectivity::<S>(extent)?;

        let region_labels = seeds.labels();
        if region_labels.is_empty() {
            return Err(RegionError::NoSeeds);
        }
        if let Some(mask) = mask {
            let excluded = seeds
                .data()
                .iter()
                .enumerate()
                .find(|&(i, &l)| l != UNASSIGNED && !mask.is_included(i));
            if let Some((i, _)) = excluded {
                let (x, y, z) = extent.coordinates(i);
                return Err(RegionError::InvalidSeed { x, y, z });
            }
        }

        let len = extent.len();
        let frame_limit = options.animation_frames;
        let frame_interval = len.checked_div(frame_limit).map_or(0, |i| i.max(1));

        tracing::debug!(
            "region growing: extent={}, regions={}, connectivity={:?}, frames={}",
            extent,
            region_labels.len(),
            connectivity,
            frame_limit
        );

        let regions = region_labels.iter().map(|_| samples.new_region()).collect();
        Ok(Self {
            samples,
            seeds,
            mask,
            extent,
            neighborhood: Neighborhood::new(extent, connectivity),
            labels: vec![UNASSIGNED; len],
            queued: vec![false; len],
            queue: CandidateQueue::new(),
            region_labels,
            regions,
            scratch: Vec::with_capacity(connectivity.neighbor_count()),
            admissions: 0,
            frame_limit,
            frame_interval,
            next_frame_at: frame_interval,
            frames: Vec::with_capacity(frame_limit),
        })
    }

    fn slot_of(&self, label: u32) -> Option<usize> {
        self.region_labels.binary_search(&label).ok()
    }

    #[inline]
    fn is_included(&self, index: usize) -> bool {
        self.mask.is_none_or(|m| m.is_included(index))
    }

    fn admit(&mut self, index: usize, slot: usize) {
        self.samples.admit(&mut self.regions[slot], index);
        self.labels[index] = self.region_labels[slot];
        self.admissions += 1;
    }

    /// Queue every free neighbor of `index` for region `slot`
    fn expand(&mut self, index: usize, slot: usize) {
        let mut neighbors = std::mem::take(&mut self.scratch);
        self.neighborhood.neighbors_into(index, &mut neighbors);
        for &n in &neighbors {
            if self.labels[n] != UNASSIGNED || self.queued[n] || !self.is_included(n) {
                continue;
            }
            self.queued[n] = true;
            let diff = self.samples.difference(&self.regions[slot], n);
            self.queue.push(n, slot, diff);
        }
        self.scratch = neighbors;
    }

    /// Label and admit all seeds, then queue their neighbors
    fn seed(&mut self, listeners: &mut ProgressListeners) {
        let row_len = self.extent.width as usize;
        let rows = self.extent.len() / row_len;
        let seeds: &'a LabelImage = self.seeds;
        let seeds = seeds.data();

        for (row, chunk) in seeds.chunks(row_len).enumerate() {
            for (x, &label) in chunk.iter().enumerate() {
                if let Some(slot) = self.slot_of(label) {
                    self.admit(row * row_len + x, slot);
                }
            }
            listeners.notify(
                SEEDING_SHARE * (row + 1) as f64 / rows as f64,
                Some("Seeding regions"),
            );
        }

        // Thresholds already reached by the seeds alone
        self.capture_frames();

        for (index, &label) in seeds.iter().enumerate() {
            if let Some(slot) = self.slot_of(label) {
                self.expand(index, slot);
            }
        }
    }

    /// Drain the frontier
    fn grow(&mut self, listeners: &mut ProgressListeners) {
        let total = self.extent.len() as f64;
        while let Some(candidate) = self.queue.pop_best() {
            if self.labels[candidate.index] != UNASSIGNED {
                tracing::trace!("skipping already labeled sample {}", candidate.index);
                continue;
            }
            debug_assert!(self.is_included(candidate.index));

            self.admit(candidate.index, candidate.region);
            if self.capture_frames() > 0 {
                listeners.notify(
                    SEEDING_SHARE + (1.0 - SEEDING_SHARE) * self.admissions as f64 / total,
                    Some("Growing regions"),
                );
            }
            self.expand(candidate.index, candidate.region);
        }
    }

    /// Append one snapshot per threshold the admission count has reached
    ///
    /// Returns the number of snapshots appended.
    fn capture_frames(&mut self) -> usize {
        let mut captured = 0;
        while self.frames.len() < self.frame_limit && self.admissions >= self.next_frame_at {
            self.frames.push(self.labels.clone());
            self.next_frame_at += self.frame_interval;
            captured += 1;
        }
        captured
    }

    fn finish(self) -> RegionResult<SrgOutput> {
        let Extent {
            width,
            height,
            depth,
        } = self.extent;

        let regions = self
            .region_labels
            .iter()
            .zip(&self.regions)
            .map(|(&label, region)| RegionStats::summarize(label, region))
            .collect();
        let frames = self
            .frames
            .into_iter()
            .map(|f| LabelImage::from_data(width, height, depth, f))
            .collect::<seedgrow_core::Result<Vec<_>>>()?;
        let labels = LabelImage::from_data(width, height, depth, self.labels)?;

        tracing::debug!(
            "region growing done: admissions={}, frames={}, unassigned={}",
            self.admissions,
            frames.len(),
            labels.count_unassigned()
        );

        Ok(SrgOutput {
            labels,
            frames,
            regions,
            admissions: self.admissions,
        })
    }
}

/// Run a complete segmentation, tracking the lifecycle in `state`
pub(crate) fn execute<S: SampleSource>(
    samples: &S,
    seeds: &LabelImage,
    mask: Option<&Mask>,
    options: &SrgOptions,
    listeners: &mut ProgressListeners,
    state: &mut EngineState,
) -> RegionResult<SrgOutput> {
    *state = EngineState::Uninitialized;
    let mut growth = Growth::new(samples, seeds, mask, options)?;
    *state = EngineState::Seeded;
    growth.seed(listeners);
    *state = EngineState::Growing;
    growth.grow(listeners);
    let output = growth.finish()?;
    listeners.notify(1.0, Some("Done"));
    *state = EngineState::Done;
    Ok(output)
}

/// Seeded region growing engine
///
/// Holds the inputs, configuration, listeners and results of one
/// segmentation. Use the aliases [`SeededRegionGrowing`](super::SeededRegionGrowing),
/// [`VectorRegionGrowing`](super::VectorRegionGrowing) and
/// [`VolumeRegionGrowing`](super::VolumeRegionGrowing).
///
/// Changing any input discards previous results and returns the engine to
/// [`EngineState::Uninitialized`].
#[derive(Debug)]
pub struct RegionGrowing<S: SampleSource> {
    image: Option<S>,
    seeds: Option<LabelImage>,
    mask: Option<Mask>,
    options: SrgOptions,
    listeners: ProgressListeners,
    state: EngineState,
    output: Option<SrgOutput>,
}

impl<S: SampleSource> Default for RegionGrowing<S> {
    fn default() -> Self {
        Self::with_options(SrgOptions::default())
    }
}

impl<S: SampleSource> RegionGrowing<S> {
    /// Create an engine with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the given options
    pub fn with_options(options: SrgOptions) -> Self {
        Self {
            image: None,
            seeds: None,
            mask: None,
            options,
            listeners: ProgressListeners::new(),
            state: EngineState::Uninitialized,
            output: None,
        }
    }

    fn invalidate(&mut self) {
        self.state = EngineState::Uninitialized;
        self.output = None;
    }

    /// Set the image to segment
    pub fn set_image(&mut self, image: S) {
        self.image = Some(image);
        self.invalidate();
    }

    /// Set the seed labels; nonzero values mark seeds of that region
    pub fn set_seeds(&mut self, seeds: LabelImage) {
        self.seeds = Some(seeds);
        self.invalidate();
    }

    /// Restrict growth to pixels where `mask` is true
    pub fn set_mask(&mut self, mask: Mask) {
        self.mask = Some(mask);
        self.invalidate();
    }

    /// Remove the mask; every pixel becomes eligible again
    pub fn clear_mask(&mut self) {
        self.mask = None;
        self.invalidate();
    }

    /// Set the number of animation snapshots (0 disables capture)
    pub fn set_number_of_animation_frames(&mut self, frames: usize) {
        self.options.animation_frames = frames;
        self.invalidate();
    }

    /// Set the neighborhood used to expand regions
    pub fn set_connectivity(&mut self, connectivity: ConnectivityType) {
        self.options.connectivity = Some(connectivity);
        self.invalidate();
    }

    /// Image set with [`set_image`](Self::set_image)
    pub fn image(&self) -> Option<&S> {
        self.image.as_ref()
    }

    /// Current configuration
    pub fn options(&self) -> &SrgOptions {
        &self.options
    }

    /// Lifecycle state after the last setter or run
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Register a progress listener
    pub fn add_progress_listener<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(f64, Option<&str>) + Send + 'static,
    {
        self.listeners.add(callback)
    }

    /// Unregister a progress listener
    pub fn remove_progress_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Run the segmentation to completion
    ///
    /// # Errors
    ///
    /// Fails before touching any result if the image or seeds are missing,
    /// extents differ, the connectivity does not fit the image, there is no
    /// seed, or a seed lies outside the mask.
    pub fn run(&mut self) -> RegionResult<()> {
        self.output = None;
        let image = self
            .image
            .as_ref()
            .ok_or(RegionError::MissingInput("image"))?;
        let seeds = self
            .seeds
            .as_ref()
            .ok_or(RegionError::MissingInput("seeds"))?;
        let output = execute(
            image,
            seeds,
            self.mask.as_ref(),
            &self.options,
            &mut self.listeners,
            &mut self.state,
        )?;
        self.output = Some(output);
        Ok(())
    }

    /// Final labels, available once [`run`](Self::run) succeeded
    pub fn region_markers(&self) -> Option<&LabelImage> {
        self.output.as_ref().map(|o| &o.labels)
    }

    /// Animation snapshots; empty when capture was disabled or before a run
    pub fn animation_frames(&self) -> &[LabelImage] {
        match &self.output {
            Some(output) => &output.frames,
            None => &[],
        }
    }

    /// Per-region statistics of the last run, sorted by label
    pub fn region_stats(&self) -> &[RegionStats] {
        match &self.output {
            Some(output) => &output.regions,
            None => &[],
        }
    }

    /// Take the results out of the engine
    pub fn into_output(self) -> Option<SrgOutput> {
        self.output
    }
}
