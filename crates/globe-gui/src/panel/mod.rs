//! The console panels.
//!
//! Each panel is a pure function of its props; the two target lists also own
//! their search text. Outward events are panel-specific messages that the
//! host maps into [`Message`](crate::message::Message).
//!
//! | Panel | Emits |
//! |-------|-------|
//! | [`LocationList`] | `Select(City)` |
//! | [`SystemList`] | `Select(id)` |
//! | [`system_nav`] | [`NavMessage`] |
//! | [`info_panel`] | nothing |

pub mod info_panel;
pub mod location_list;
pub mod system_list;
pub mod system_nav;

pub use info_panel::InfoSubject;
pub use location_list::{LocationList, LocationListAction, LocationListMessage, LocationListProps};
pub use system_list::{SystemList, SystemListAction, SystemListMessage, SystemListProps};
pub use system_nav::{NavMessage, SystemNavProps, TargetLink};

use iced::widget::{column, container, scrollable, text};
use iced::{Element, Length, Padding, Theme};

use crate::config::DEFAULT_BREAKPOINT;
use crate::theme::{
    LIST_MAX_HEIGHT, LIST_PANEL_WIDTH, SPACING_MD, SPACING_SM, SPACING_XS, container_panel,
};

/// Current window width and the responsive breakpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub breakpoint: f32,
}

impl Viewport {
    pub fn new(width: f32, breakpoint: f32) -> Self {
        Self { width, breakpoint }
    }

    /// Whether the viewport is narrower than the breakpoint.
    pub fn is_mobile(&self) -> bool {
        self.width < self.breakpoint
    }

    /// Whether a panel is shown.
    ///
    /// Panels are hidden on narrow viewports unless `force_visible` is set.
    pub fn shows_panel(&self, force_visible: bool) -> bool {
        force_visible || !self.is_mobile()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, DEFAULT_BREAKPOINT)
    }
}

/// Title, search box and scrolling rows shared by the two target lists.
fn list_frame<'a, M: Clone + 'a>(
    title: &'static str,
    search: Element<'a, M>,
    rows: Vec<Element<'a, M>>,
) -> Element<'a, M> {
    let header = text(title).size(10).style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().primary.base.color),
    });

    let list = scrollable(
        column(rows)
            .spacing(SPACING_XS)
            .padding(Padding::ZERO.right(SPACING_SM)),
    );

    container(column![header, search, container(list).max_height(LIST_MAX_HEIGHT)].spacing(SPACING_SM))
        .width(Length::Fixed(LIST_PANEL_WIDTH))
        .padding(SPACING_MD)
        .style(container_panel)
        .into()
}
