//! Per-frame phase discipline
//!
//! The [`FrameCoordinator`] owns the render list and walks each frame
//! through its phases in a fixed order: update (ticks), collect
//! (producers append), submit (forward pass drains), reset (exactly
//! once). The list is passed explicitly down the call chain; there is no
//! process-wide render state.
//!
//! Within a frame the list has a single writer (the collect phase) and
//! then a single reader (the submit phase); the phases never interleave,
//! so no locking is required.

use crate::config::RenderConfig;
use crate::render::api::RenderBackend;
use crate::render::forward::{submit_forward, FrameSubmission};
use crate::render::lighting::LightQuery;
use crate::render::material::MaterialContext;
use crate::render::render_list::RenderList;
use crate::scene::tickable::{TickScheduler, Tickable};
use crate::scene::DrawProducer;

/// Drives the update/collect/submit/reset cycle
pub struct FrameCoordinator {
    list: RenderList,
    scheduler: TickScheduler,
    frame: u64,
}

impl FrameCoordinator {
    /// Create a coordinator sized from the configuration
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            list: RenderList::with_capacity(config.list_capacity),
            scheduler: TickScheduler::new(config.tick_rate_hz),
            frame: 0,
        }
    }

    /// Update phase: advance every tickable by one frame
    ///
    /// Run before [`FrameCoordinator::render`] so collect-time world
    /// state is current.
    pub fn update(&mut self, delta: f32, tickables: &mut [&mut dyn Tickable]) {
        self.scheduler.advance(delta, tickables);
    }

    /// Collect, submit, and reset: the rest of the frame
    ///
    /// Producers append in slice order; a full list drops the remaining
    /// draws with a warning rather than failing the frame. The list is
    /// reset exactly once, after submission.
    pub fn render(
        &mut self,
        producers: &[&dyn DrawProducer],
        lights: &dyn LightQuery,
        backend: &mut dyn RenderBackend,
    ) -> FrameSubmission {
        debug_assert!(
            self.list.is_empty(),
            "render list not reset before frame {}",
            self.frame
        );

        // Collect phase: single writer
        {
            let mut ctx = MaterialContext {
                backend: &mut *backend,
                lights,
            };
            for producer in producers {
                if let Err(e) = producer.enqueue(&mut self.list, &mut ctx) {
                    log::warn!("frame {}: dropped draw: {e}", self.frame);
                }
            }
        }

        // Submit phase: single reader
        let stats = submit_forward(&self.list, backend);

        // Frame boundary: the one reset
        self.list.reset();
        self.frame += 1;
        stats
    }

    /// Number of completed frames
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// The coordinator's render list capacity
    pub fn list_capacity(&self) -> usize {
        self.list.capacity()
    }
}
