//! Recording mock drivers shared by the unit tests
//!
//! Every driver call lands in one [`Log`] so tests can check the relative
//! order of display, tone and delay operations.

use core::cell::{Cell, Ref, RefCell};

use heapless::{String, Vec};

use crate::traits::{
    Delay, DisplayError, ImageDisplay, ImageResource, RenderNode, Signal, SignalInput,
    ToneOutput,
};

pub type Name = String<48>;

const LOG_CAPACITY: usize = 1024;

fn name(s: &str) -> Name {
    let mut n = Name::new();
    n.push_str(s).expect("image name too long for mock");
    n
}

/// A recorded driver call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Open(Name),
    Attach { image: Name, node: RenderNode },
    Detach(RenderNode),
    Release(Name),
    Reclaim,
    Tone(u16, u16),
    Sleep(u32),
}

impl Op {
    pub fn open(image: &str) -> Self {
        Op::Open(name(image))
    }

    pub fn release(image: &str) -> Self {
        Op::Release(name(image))
    }

    pub fn is_tone(&self) -> bool {
        matches!(self, Op::Tone(..))
    }
}

#[derive(Default)]
pub struct Log {
    ops: RefCell<Vec<Op, LOG_CAPACITY>>,
}

impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, op: Op) {
        self.ops.borrow_mut().push(op).expect("mock log full");
    }

    pub fn ops(&self) -> Ref<'_, Vec<Op, LOG_CAPACITY>> {
        self.ops.borrow()
    }

    pub fn clear(&self) {
        self.ops.borrow_mut().clear();
    }

    /// Index of the first op matching `pred`
    pub fn position(&self, pred: impl Fn(&Op) -> bool) -> Option<usize> {
        self.ops().iter().position(pred)
    }

    pub fn tones(&self) -> Vec<(u16, u16), LOG_CAPACITY> {
        self.ops()
            .iter()
            .filter_map(|op| match op {
                Op::Tone(f, d) => Some((*f, *d)),
                _ => None,
            })
            .collect()
    }

    pub fn opened(&self) -> Vec<Name, 32> {
        self.ops()
            .iter()
            .filter_map(|op| match op {
                Op::Open(n) => Some(n.clone()),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug)]
pub struct MockImage {
    pub image: Name,
    width: u16,
    height: u16,
}

impl ImageResource for MockImage {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }
}

pub struct MockDisplay<'a> {
    log: &'a Log,
    /// Images that fail to open
    missing: &'static [&'static str],
    size: (u16, u16),
    /// Resources currently open
    pub open: usize,
    /// Most resources ever open at once
    pub max_open: usize,
    /// Image currently attached to the scene
    pub attached: Option<Name>,
}

impl<'a> MockDisplay<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self {
            log,
            missing: &[],
            size: (200, 160),
            open: 0,
            max_open: 0,
            attached: None,
        }
    }

    pub fn with_missing(mut self, missing: &'static [&'static str]) -> Self {
        self.missing = missing;
        self
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.size = (width, height);
        self
    }
}

impl ImageDisplay for MockDisplay<'_> {
    type Resource = MockImage;

    fn open(&mut self, image: &str) -> Result<MockImage, DisplayError> {
        self.log.push(Op::open(image));
        if self.missing.contains(&image) {
            return Err(DisplayError::AssetUnavailable);
        }
        self.open += 1;
        self.max_open = self.max_open.max(self.open);
        Ok(MockImage {
            image: name(image),
            width: self.size.0,
            height: self.size.1,
        })
    }

    fn attach(&mut self, resource: &MockImage, node: &RenderNode) {
        assert!(self.attached.is_none(), "two render nodes attached");
        self.attached = Some(resource.image.clone());
        self.log.push(Op::Attach {
            image: resource.image.clone(),
            node: *node,
        });
    }

    fn detach(&mut self, node: &RenderNode) {
        self.attached = None;
        self.log.push(Op::Detach(*node));
    }

    fn release(&mut self, resource: MockImage) {
        self.open -= 1;
        self.log.push(Op::Release(resource.image));
    }

    fn reclaim(&mut self) {
        self.log.push(Op::Reclaim);
    }
}

pub struct MockTone<'a> {
    log: &'a Log,
}

impl<'a> MockTone<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self { log }
    }
}

impl ToneOutput for MockTone<'_> {
    fn play_tone(&mut self, frequency_hz: u16, duration_ms: u16) {
        self.log.push(Op::Tone(frequency_hz, duration_ms));
    }
}

pub struct MockDelay<'a> {
    log: &'a Log,
}

impl<'a> MockDelay<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self { log }
    }
}

impl Delay for MockDelay<'_> {
    fn delay_ms(&mut self, ms: u32) {
        self.log.push(Op::Sleep(ms));
    }
}

/// Input levels shared with the test body as (advance, replay)
pub struct MockInputs<'a> {
    levels: &'a Cell<(bool, bool)>,
}

impl<'a> MockInputs<'a> {
    pub fn new(levels: &'a Cell<(bool, bool)>) -> Self {
        Self { levels }
    }
}

impl SignalInput for MockInputs<'_> {
    fn read_level(&mut self, signal: Signal) -> bool {
        let (advance, replay) = self.levels.get();
        match signal {
            Signal::Advance => advance,
            Signal::Replay => replay,
        }
    }
}
