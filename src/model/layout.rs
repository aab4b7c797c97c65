//! Carousel geometry
//!
//! Everything here is in layout units (the carousel's own coordinate
//! space); the view converts to terminal columns when rendering.

/// Geometry inputs for one layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub item_count: usize,
    /// Gap between adjacent cards
    pub spacing: f32,
    /// Width of the neighbouring cards left visible at each edge
    pub edge_reveal: f32,
    pub viewport_width: f32,
}

/// Derived card geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutResult {
    pub card_width: f32,
    pub container_offset_x: f32,
}

impl CarouselConfig {
    /// Width of a single card, never negative
    pub fn card_width(&self) -> f32 {
        (self.viewport_width - 2.0 * self.edge_reveal - 2.0 * self.spacing).max(0.0)
    }

    /// Sum of the gaps between cards
    pub fn total_spacing(&self) -> f32 {
        self.item_count.saturating_sub(1) as f32 * self.spacing
    }

    /// Width of the whole card row
    pub fn total_content_width(&self) -> f32 {
        self.card_width() * self.item_count as f32 + self.total_spacing()
    }

    /// Distance the row moves per page
    pub fn per_card_advance(&self) -> f32 {
        self.card_width() + self.spacing
    }
}

/// Compute card width and container offset.
///
/// The offset is derived from scratch on every call, so repeated calls with
/// the same inputs always agree.
pub fn compute_layout(
    config: &CarouselConfig,
    active_index: usize,
    drag_displacement: f32,
) -> LayoutResult {
    let card_width = config.card_width();
    let centering_offset = (config.total_content_width() - config.viewport_width) / 2.0;
    let base_offset_x = centering_offset - config.per_card_advance() * active_index as f32;

    LayoutResult {
        card_width,
        container_offset_x: base_offset_x + drag_displacement,
    }
}

/// Left edge of card `index` in viewport coordinates.
///
/// The row is centred in the viewport, shifted by the container offset, and
/// inset by `edge_reveal + spacing` so the active card sits in the middle
/// with a sliver of each neighbour showing.
pub fn card_x(config: &CarouselConfig, layout: &LayoutResult, index: usize) -> f32 {
    let row_left = (config.viewport_width - config.total_content_width()) / 2.0;
    let leading_inset = config.edge_reveal + config.spacing;
    row_left + layout.container_offset_x + leading_inset + config.per_card_advance() * index as f32
}
