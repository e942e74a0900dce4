//! Visual slot of a body: what the host has (or has not yet) decoded for it.
//!
//! Decoding happens in the host. The core only tracks readiness and, for
//! sprites, an optional alpha channel used to refine hit-testing.

use crate::domain::scene::SceneError;

/// Per-pixel opacity lookup provided by a decoded visual.
///
/// Coordinates are in the visual's own pixel space. Out-of-range pixels
/// return `None`.
pub trait OpacitySampler {
    fn dimensions(&self) -> (u32, u32);

    fn alpha_at(&self, px: u32, py: u32) -> Option<u8>;
}

/// Alpha channel uploaded by the host (row-major, one byte per pixel)
#[derive(Clone, Debug)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    alpha: Vec<u8>,
}

impl AlphaMask {
    pub fn new(width: u32, height: u32, alpha: Vec<u8>) -> Result<Self, SceneError> {
        let expected = (width as usize) * (height as usize);
        if width == 0 || height == 0 || alpha.len() != expected {
            return Err(SceneError::AlphaMaskSize {
                width,
                height,
                len: alpha.len(),
            });
        }
        Ok(Self { width, height, alpha })
    }

    /// Build a mask from tightly packed RGBA bytes, keeping only alpha
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self, SceneError> {
        if rgba.len() % 4 != 0 {
            return Err(SceneError::AlphaMaskSize {
                width,
                height,
                len: rgba.len(),
            });
        }
        let alpha = rgba.chunks_exact(4).map(|px| px[3]).collect();
        Self::new(width, height, alpha)
    }
}

impl OpacitySampler for AlphaMask {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn alpha_at(&self, px: u32, py: u32) -> Option<u8> {
        if px >= self.width || py >= self.height {
            return None;
        }
        self.alpha
            .get((py as usize) * (self.width as usize) + (px as usize))
            .copied()
    }
}

#[derive(Clone, Debug, Default)]
pub enum VisualSlot {
    /// No asset; drawn as a fallback shape
    #[default]
    None,
    /// Asset requested but not decoded yet; simulated, not drawn
    Pending { path: String },
    Ready {
        path: Option<String>,
        width: u32,
        height: u32,
        mask: Option<AlphaMask>,
    },
}

impl VisualSlot {
    pub fn pending(path: impl Into<String>) -> Self {
        VisualSlot::Pending { path: path.into() }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, VisualSlot::Pending { .. })
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, VisualSlot::Ready { .. })
    }

    pub fn path(&self) -> Option<&str> {
        match self {
            VisualSlot::None => None,
            VisualSlot::Pending { path } => Some(path),
            VisualSlot::Ready { path, .. } => path.as_deref(),
        }
    }

    /// Opacity sampler, only when a decoded visual carries a mask
    pub fn sampler(&self) -> Option<&dyn OpacitySampler> {
        match self {
            VisualSlot::Ready { mask: Some(mask), .. } => Some(mask),
            _ => None,
        }
    }

    pub(crate) fn mark_ready(&mut self, width: u32, height: u32) {
        let path = self.path().map(str::to_owned);
        let mask = match std::mem::take(self) {
            VisualSlot::Ready { mask, .. } => mask,
            _ => None,
        };
        *self = VisualSlot::Ready { path, width, height, mask };
    }

    pub(crate) fn attach_mask(&mut self, mask: AlphaMask) {
        if let VisualSlot::Ready { mask: slot, .. } = self {
            *slot = Some(mask);
            return;
        }
        let (width, height) = mask.dimensions();
        let path = self.path().map(str::to_owned);
        *self = VisualSlot::Ready {
            path,
            width,
            height,
            mask: Some(mask),
        };
    }
}
