use render::ImageLoader;

mod commands;
mod discord_bot;

pub use discord_bot::DiscordBot;

/// Data shared between all commands.
pub struct Data {
    pub image_loader: ImageLoader,
}

pub type Error = anyhow::Error;
pub type Context<'a> = poise::Context<'a, Data, Error>;
