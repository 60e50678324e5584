//! Built-in exhibit catalog

use crate::audio::SignatureId;
use crate::catalog::CatalogEntry;

/// Pacific Northwest backyard birds
pub const BIRDS: [CatalogEntry<'static>; 5] = [
    CatalogEntry {
        name: "Spotted Towhee",
        image: "/images/towhee.bmp",
        signature: SignatureId::Towhee,
    },
    CatalogEntry {
        name: "Black-capped Chickadee",
        image: "/images/chickadee.bmp",
        signature: SignatureId::Chickadee,
    },
    CatalogEntry {
        name: "Northern Flicker",
        image: "/images/flicker.bmp",
        signature: SignatureId::Flicker,
    },
    CatalogEntry {
        name: "Steller's Jay",
        image: "/images/jay.bmp",
        signature: SignatureId::Jay,
    },
    CatalogEntry {
        name: "American Robin",
        image: "/images/robin.bmp",
        signature: SignatureId::Robin,
    },
];
