//! Exhibit main loop
//!
//! Polls the two inputs and, on rising edges:
//! - advance: move to the next catalog item, show its image, play its call
//! - replay: play the current item's call again
//!
//! Every action blocks until finished and is followed by the settle delay.
//! The display swap always completes before the call starts.

use crate::audio::AudioSequencer;
use crate::catalog::{Catalog, CatalogItem};
use crate::config::{ConfigError, ExhibitConfig, MissingAssetPolicy, Timing};
use crate::display::DisplaySwapper;
use crate::input::{Edges, InputDebouncer};
use crate::traits::{Delay, DisplayError, ImageDisplay, Signal, SignalInput, ToneOutput};

use super::state::{Event, Phase, PlaybackState};

/// The exhibit controller
///
/// Owns every piece of cross-iteration state: catalog position, input
/// edge state and the displayed image.
pub struct Exhibit<I, D: ImageDisplay, T, S> {
    catalog: Catalog,
    timing: Timing,
    missing_asset: MissingAssetPolicy,
    inputs: I,
    delay: S,
    display: DisplaySwapper<D>,
    audio: AudioSequencer<T>,
    debouncer: InputDebouncer,
    playback: PlaybackState,
    phase: Phase,
    display_error: Option<DisplayError>,
}

impl<I, D, T, S> Exhibit<I, D, T, S>
where
    I: SignalInput,
    D: ImageDisplay,
    T: ToneOutput,
    S: Delay,
{
    /// Create a controller from a configuration and its drivers
    ///
    /// Nothing is displayed until [`Exhibit::start`].
    pub fn new(
        config: ExhibitConfig,
        inputs: I,
        display: D,
        tone: T,
        delay: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            catalog: config.catalog,
            timing: config.timing,
            missing_asset: config.missing_asset,
            inputs,
            delay,
            display: DisplaySwapper::new(display, config.canvas),
            audio: AudioSequencer::new(tone),
            debouncer: InputDebouncer::new(),
            playback: PlaybackState::new(),
            phase: Phase::Idle,
            display_error: None,
        })
    }

    /// Announce the first item
    pub fn start(&mut self) {
        info!("exhibit starting with {} items", self.catalog.len());
        self.playback.reset();
        self.phase = self.phase.transition(Event::Startup);
        self.announce();
        self.phase = self.phase.transition(Event::ActionComplete);
    }

    /// Run one poll of the inputs and act on any rising edges
    ///
    /// Returns the edges that were acted on.
    pub fn tick(&mut self) -> Edges {
        let advance = self.inputs.read_level(Signal::Advance);
        let replay = self.inputs.read_level(Signal::Replay);
        let edges = self.debouncer.poll(advance, replay);

        if edges.advance {
            self.phase = self.phase.transition(Event::AdvanceEdge);
            let index = self.playback.advance(&self.catalog);
            debug!("advance to item {}", index);
            self.announce();
            self.settle();
        }

        if edges.replay {
            self.phase = self.phase.transition(Event::ReplayEdge);
            self.replay();
            self.settle();
        }

        self.delay.delay_ms(self.timing.poll_interval_ms);
        edges
    }

    /// Announce the first item, then poll forever
    pub fn run(&mut self) -> ! {
        self.start();
        loop {
            self.tick();
        }
    }

    /// Show the current item and play its call
    fn announce(&mut self) {
        let index = self.playback.current();
        let item = self.catalog.item_at(index);
        info!("announce {}: {=str}", index, item.name());

        match self.display.show(item.image()) {
            Ok(_) => self.display_error = None,
            Err(e) => {
                warn!("image {=str} unavailable: {}", item.image(), e);
                self.display_error = Some(e);
                if self.missing_asset == MissingAssetPolicy::Skip {
                    return;
                }
            }
        }

        self.audio.play(item.signature(), &mut self.delay);
    }

    /// Play the current item's call without touching the display
    fn replay(&mut self) {
        let item = self.catalog.item_at(self.playback.current());
        debug!("replay {=str}", item.name());
        self.audio.play(item.signature(), &mut self.delay);
    }

    /// Hold after an action, then go back to idle
    fn settle(&mut self) {
        if self.timing.settle_ms > 0 {
            self.delay.delay_ms(self.timing.settle_ms);
        }
        self.phase = self.phase.transition(Event::ActionComplete);
    }

    /// Index of the current catalog item
    pub fn current_index(&self) -> usize {
        self.playback.current()
    }

    /// The current catalog item
    pub fn current_item(&self) -> &CatalogItem {
        self.catalog.item_at(self.playback.current())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// The display swapper
    pub fn display(&self) -> &DisplaySwapper<D> {
        &self.display
    }

    /// The audio sequencer
    pub fn audio(&self) -> &AudioSequencer<T> {
        &self.audio
    }

    /// Error from the most recent announce's display swap
    pub fn display_error(&self) -> Option<DisplayError> {
        self.display_error
    }
}
