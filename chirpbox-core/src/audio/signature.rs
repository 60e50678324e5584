//! Bird call signatures
//!
//! Each catalog item is identified audibly by a fixed, deterministic
//! sequence of tones. Signatures are static tables; playing one never
//! depends on time, randomness or device state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single tone followed by a silent gap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneEvent {
    /// Tone frequency in Hz
    pub frequency_hz: u16,
    /// Tone duration in ms
    pub duration_ms: u16,
    /// Silence after the tone in ms
    pub gap_ms: u16,
}

impl ToneEvent {
    pub const fn new(frequency_hz: u16, duration_ms: u16, gap_ms: u16) -> Self {
        Self {
            frequency_hz,
            duration_ms,
            gap_ms,
        }
    }

    /// Time taken by the tone and its gap
    pub const fn span_ms(&self) -> u32 {
        self.duration_ms as u32 + self.gap_ms as u32
    }
}

/// A run of tones played `repeat` times back to back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phrase {
    pub events: &'static [ToneEvent],
    pub repeat: u8,
}

impl Phrase {
    pub const fn once(events: &'static [ToneEvent]) -> Self {
        Self { events, repeat: 1 }
    }

    pub const fn repeated(events: &'static [ToneEvent], repeat: u8) -> Self {
        Self { events, repeat }
    }
}

/// An ordered, finite sequence of tone events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    phrases: &'static [Phrase],
}

impl Signature {
    pub const fn new(phrases: &'static [Phrase]) -> Self {
        Self { phrases }
    }

    /// Iterate over every tone event in playback order
    pub fn events(&self) -> impl Iterator<Item = ToneEvent> + 'static {
        let phrases: &'static [Phrase] = self.phrases;
        phrases.iter().flat_map(|phrase| {
            (0..phrase.repeat).flat_map(move |_| phrase.events.iter().copied())
        })
    }

    /// Number of tone events
    pub fn len(&self) -> usize {
        self.phrases
            .iter()
            .map(|p| p.events.len() * p.repeat as usize)
            .sum()
    }

    /// Check if the signature has no tones
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total playback time including gaps
    pub fn duration_ms(&self) -> u32 {
        self.events().map(|e| e.span_ms()).sum()
    }
}

/// Signature identifiers
///
/// This is the closed set of calls a catalog entry may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SignatureId {
    Towhee,
    Chickadee,
    Flicker,
    Jay,
    Robin,
}

impl SignatureId {
    /// Every signature, in catalog order of the built-in exhibit
    pub const ALL: [SignatureId; 5] = [
        SignatureId::Towhee,
        SignatureId::Chickadee,
        SignatureId::Flicker,
        SignatureId::Jay,
        SignatureId::Robin,
    ];

    /// Symbolic name used in configuration files
    pub const fn name(self) -> &'static str {
        match self {
            SignatureId::Towhee => "towhee",
            SignatureId::Chickadee => "chickadee",
            SignatureId::Flicker => "flicker",
            SignatureId::Jay => "jay",
            SignatureId::Robin => "robin",
        }
    }

    /// Resolve a symbolic name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }

    /// The tone table for this identifier
    pub fn signature(self) -> &'static Signature {
        match self {
            SignatureId::Towhee => &TOWHEE,
            SignatureId::Chickadee => &CHICKADEE,
            SignatureId::Flicker => &FLICKER,
            SignatureId::Jay => &JAY,
            SignatureId::Robin => &ROBIN,
        }
    }
}

// Spotted towhee: two lead notes then a fast trill
static TOWHEE_LEAD: [ToneEvent; 2] = [ToneEvent::new(880, 80, 30), ToneEvent::new(988, 80, 50)];
static TOWHEE_TRILL: [ToneEvent; 1] = [ToneEvent::new(1320, 30, 10)];
static TOWHEE_PHRASES: [Phrase; 2] = [
    Phrase::once(&TOWHEE_LEAD),
    Phrase::repeated(&TOWHEE_TRILL, 7),
];
static TOWHEE: Signature = Signature::new(&TOWHEE_PHRASES);

// Chickadee: "fee-bee" then "dee-dee" chatter
static CHICKADEE_LEAD: [ToneEvent; 2] = [
    ToneEvent::new(1047, 120, 50),
    ToneEvent::new(784, 160, 80),
];
static CHICKADEE_CHATTER: [ToneEvent; 1] = [ToneEvent::new(1568, 20, 15)];
static CHICKADEE_PHRASES: [Phrase; 2] = [
    Phrase::once(&CHICKADEE_LEAD),
    Phrase::repeated(&CHICKADEE_CHATTER, 5),
];
static CHICKADEE: Signature = Signature::new(&CHICKADEE_PHRASES);

// Flicker: single "clee-urr" downslur, no gaps
static FLICKER_CALL: [ToneEvent; 2] = [ToneEvent::new(1700, 80, 0), ToneEvent::new(950, 80, 0)];
static FLICKER_PHRASES: [Phrase; 1] = [Phrase::once(&FLICKER_CALL)];
static FLICKER: Signature = Signature::new(&FLICKER_PHRASES);

// Steller's jay: "SKRAA" sweep then "kak", three times.
// The pause after each burst is folded into the burst's last gap.
static JAY_CALL: [ToneEvent; 12] = [
    ToneEvent::new(1300, 25, 4),
    ToneEvent::new(1550, 25, 4),
    ToneEvent::new(1850, 25, 4),
    ToneEvent::new(2200, 25, 4),
    ToneEvent::new(2500, 25, 4),
    ToneEvent::new(2300, 25, 4),
    ToneEvent::new(2100, 25, 4),
    ToneEvent::new(1900, 25, 4),
    ToneEvent::new(1700, 25, 64),
    ToneEvent::new(2000, 18, 3),
    ToneEvent::new(1800, 18, 3),
    ToneEvent::new(1600, 18, 183),
];
static JAY_PHRASES: [Phrase; 1] = [Phrase::repeated(&JAY_CALL, 3)];
static JAY: Signature = Signature::new(&JAY_PHRASES);

// Robin: four-note carol
static ROBIN_CAROL: [ToneEvent; 4] = [
    ToneEvent::new(784, 120, 50),
    ToneEvent::new(880, 120, 50),
    ToneEvent::new(988, 120, 50),
    ToneEvent::new(880, 120, 50),
];
static ROBIN_PHRASES: [Phrase; 1] = [Phrase::once(&ROBIN_CAROL)];
static ROBIN: Signature = Signature::new(&ROBIN_PHRASES);
