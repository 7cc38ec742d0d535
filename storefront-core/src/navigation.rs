//! Slide navigation and tab indicator placement.
use crate::config::IndicatorConfig;
use serde::{Deserialize, Serialize};

/// One full-screen panel of the page, shown while its tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Slide {
    #[default]
    Home,
    Products,
    Cart,
    Wishlist,
    Track,
}

impl Slide {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Products,
        Self::Cart,
        Self::Wishlist,
        Self::Track,
    ];

    /// 1-based position used by tab buttons and "go to" controls.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Home => 1,
            Self::Products => 2,
            Self::Cart => 3,
            Self::Wishlist => 4,
            Self::Track => 5,
        }
    }

    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::Home),
            2 => Some(Self::Products),
            3 => Some(Self::Cart),
            4 => Some(Self::Wishlist),
            5 => Some(Self::Track),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::Products => "nav.products",
            Self::Cart => "nav.cart",
            Self::Wishlist => "nav.wishlist",
            Self::Track => "nav.track",
        }
    }

    #[must_use]
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::Home => "slide-home",
            Self::Products => "slide-products",
            Self::Cart => "slide-cart",
            Self::Wishlist => "slide-wishlist",
            Self::Track => "slide-track",
        }
    }
}

/// Horizontal extent of an element, as read from its bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutBox {
    pub left: f64,
    pub width: f64,
}

/// Position of the indicator relative to the tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorBox {
    pub left: f64,
    pub width: f64,
}

impl IndicatorBox {
    #[must_use]
    pub fn style(&self) -> String {
        format!("left:{}px;width:{}px", self.left, self.width)
    }
}

/// Place the indicator under `button`, inset on both sides and never narrower
/// than the configured minimum.
#[must_use]
pub fn indicator_geometry(
    tabs: LayoutBox,
    button: LayoutBox,
    cfg: &IndicatorConfig,
) -> IndicatorBox {
    IndicatorBox {
        left: button.left - tabs.left + cfg.inset_px,
        width: (button.width - 2.0 * cfg.inset_px).max(cfg.min_width_px),
    }
}

/// Tracks which slide is visible. Exactly one slide is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlideNavigator {
    active: Slide,
}

impl SlideNavigator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: Slide::Home,
        }
    }

    #[must_use]
    pub const fn active(&self) -> Slide {
        self.active
    }

    pub fn select(&mut self, slide: Slide) {
        self.active = slide;
    }

    /// Activate the slide at `index`. Unknown indices leave the current slide
    /// active and return `false`.
    pub fn select_index(&mut self, index: u8) -> bool {
        match Slide::from_index(index) {
            Some(slide) => {
                self.active = slide;
                true
            }
            None => false,
        }
    }
}
