//! Image embeds sent to the invoker's DMs after a clock command.

use crate::core::clock::ClockEvent;
use poise::serenity_prelude as serenity;

/// Link attached to every clock embed title
pub const EMBED_URL: &str = "https://vitalitysouth.com/";

/// Look of the embed for one clock event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockEmbed {
    /// Embed title
    pub title: &'static str,
    /// Side bar colour as RGB
    pub colour: u32,
    /// Large image shown in the embed
    pub image_url: &'static str,
}

impl ClockEmbed {
    /// Green clock-in card or red clock-out card.
    #[must_use]
    pub const fn for_event(event: ClockEvent) -> Self {
        match event {
            ClockEvent::In => Self {
                title: "Clock-In",
                colour: 0x0057_F287,
                image_url: "https://pics.craiyon.com/2023-11-07/4db06060d78340a29c18a0436d9eaa56.webp",
            },
            ClockEvent::Out => Self {
                title: "Clock-Out",
                colour: 0x00ED_4245,
                image_url: "https://cdn.dribbble.com/users/760079/screenshots/6979564/clockingout_4x.png",
            },
        }
    }

    /// Builds the serenity embed.
    #[must_use]
    pub fn build(self) -> serenity::CreateEmbed {
        serenity::CreateEmbed::new()
            .title(self.title)
            .url(EMBED_URL)
            .colour(self.colour)
            .image(self.image_url)
    }
}
