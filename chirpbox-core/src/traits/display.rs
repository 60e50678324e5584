//! Image display driver trait
//!
//! The display driver owns the bus, the panel and the bitmap decoder. The
//! core only ever asks it to open one image at a time and to place it on
//! screen.

/// Errors that can occur with the image display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Image resource is missing, unreadable or not decodable
    AssetUnavailable,
}

/// An open, decoded image resource
///
/// Holding a value of this type means the file/stream handle and decoder
/// state are live. They are given back with [`ImageDisplay::release`].
pub trait ImageResource {
    /// Image width in pixels
    fn width(&self) -> u16;

    /// Image height in pixels
    fn height(&self) -> u16;
}

/// Placement of an image on the canvas
///
/// `x`/`y` are the top-left corner in canvas pixels and may be negative
/// when the image is larger than the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderNode {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

/// Trait for the image display
///
/// The constrained target cannot hold two decoded images at once, so
/// callers must detach and release the current resource before opening the
/// next one. [`crate::display::DisplaySwapper`] enforces that ordering.
pub trait ImageDisplay {
    /// Decoded image resource type
    type Resource: ImageResource;

    /// Open and decode the image at `image`
    ///
    /// Returns [`DisplayError::AssetUnavailable`] if the asset is missing or
    /// corrupt.
    fn open(&mut self, image: &str) -> Result<Self::Resource, DisplayError>;

    /// Attach a render node for `resource` to the visible scene
    fn attach(&mut self, resource: &Self::Resource, node: &RenderNode);

    /// Detach a render node from the visible scene
    fn detach(&mut self, node: &RenderNode);

    /// Close the resource and drop its decoder state
    fn release(&mut self, resource: Self::Resource);

    /// Reclaim memory freed by a release before the next open
    ///
    /// Called between release and open. Most drivers have nothing to do.
    fn reclaim(&mut self) {}
}
