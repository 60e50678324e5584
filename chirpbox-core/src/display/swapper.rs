//! Single-image display swapper
//!
//! Owns the one image that is on screen. Swapping to a new image always
//! detaches and releases the current one before the next is opened, so at
//! most one decoded image is ever held by the driver.

use crate::config::Canvas;
use crate::traits::{DisplayError, ImageDisplay, ImageResource, RenderNode};

/// The image currently on screen
struct Shown<R> {
    resource: R,
    node: RenderNode,
}

/// Owner of the displayed image resource
pub struct DisplaySwapper<D: ImageDisplay> {
    driver: D,
    canvas: Canvas,
    current: Option<Shown<D::Resource>>,
}

impl<D: ImageDisplay> DisplaySwapper<D> {
    /// Create a swapper with nothing displayed
    pub fn new(driver: D, canvas: Canvas) -> Self {
        Self {
            driver,
            canvas,
            current: None,
        }
    }

    /// Replace the displayed image with the one at `image`
    ///
    /// The previous image is released first. If `image` cannot be opened
    /// the screen is left blank and `AssetUnavailable` is returned; the
    /// previous image is not restored.
    pub fn show(&mut self, image: &str) -> Result<RenderNode, DisplayError> {
        self.clear();
        self.driver.reclaim();

        let resource = self.driver.open(image)?;
        let node = self.canvas.center(resource.width(), resource.height());
        self.driver.attach(&resource, &node);
        debug!("showing image at ({}, {})", node.x, node.y);

        self.current = Some(Shown { resource, node });
        Ok(node)
    }

    /// Detach and release the displayed image, if any
    pub fn clear(&mut self) {
        if let Some(Shown { resource, node }) = self.current.take() {
            self.driver.detach(&node);
            self.driver.release(resource);
            trace!("released displayed image");
        }
    }

    /// Render node of the displayed image
    pub fn current(&self) -> Option<RenderNode> {
        self.current.as_ref().map(|shown| shown.node)
    }

    /// Check if an image is displayed
    pub fn is_showing(&self) -> bool {
        self.current.is_some()
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Get access to the underlying driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Release the displayed image and return the driver
    pub fn into_driver(mut self) -> D {
        self.clear();
        self.driver
    }
}

impl Canvas {
    /// Render node that centers a `width` x `height` image
    ///
    /// Offsets use floor division, so odd margins put the extra pixel on
    /// the right/bottom and oversized images get negative offsets.
    pub fn center(&self, width: u16, height: u16) -> RenderNode {
        let x = (i32::from(self.width) - i32::from(width)).div_euclid(2);
        let y = (i32::from(self.height) - i32::from(height)).div_euclid(2);
        RenderNode {
            x,
            y,
            width,
            height,
        }
    }
}
