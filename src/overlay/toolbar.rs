// SPDX-License-Identifier: MPL-2.0
//! Toolbar slot: a typed passthrough for host-injected controls.
//!
//! Exported independently of [`MediaControls`](super::MediaControls) and
//! composed explicitly by the host (typically stacked above the overlay),
//! so the slot works with the host's own message type. The host decides
//! whether to render it at all, usually by checking
//! [`MediaControls::is_visible`](super::MediaControls::is_visible), and
//! passes the overlay opacity through for a matching fade.

use crate::design_tokens::spacing;
use crate::styles;
use iced::widget::container;
use iced::{Element, Length};

/// Renders the given content unchanged inside the styled toolbar row.
pub fn view<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    opacity: f32,
) -> Element<'a, Message> {
    container(content.into())
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(styles::overlay::toolbar(opacity))
        .into()
}
