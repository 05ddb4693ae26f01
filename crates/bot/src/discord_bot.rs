use std::sync::Arc;

use anyhow::Context as _;
use poise::serenity_prelude as serenity;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

use render::ImageLoader;
use utility::{config::Config, here};

use crate::{commands, Data, Error};

pub struct DiscordBot;

impl DiscordBot {
    #[instrument(skip(config))]
    pub async fn start(config: Arc<Config>) -> anyhow::Result<JoinHandle<()>> {
        let setup_config = Arc::clone(&config);

        let framework = poise::Framework::builder()
            .options(poise::FrameworkOptions {
                commands: commands::get_commands(),
                on_error: |error| Box::pin(on_error(error)),
                ..Default::default()
            })
            .setup(move |ctx, ready, framework| {
                Box::pin(async move {
                    match setup_config.test_guild {
                        Some(guild) => {
                            poise::builtins::register_in_guild(
                                ctx,
                                &framework.options().commands,
                                serenity::GuildId::new(guild),
                            )
                            .await?;
                        }
                        None => {
                            poise::builtins::register_globally(ctx, &framework.options().commands)
                                .await?;
                        }
                    }

                    info!(user = %ready.user.name, "Connected to Discord.");

                    Ok(Data {
                        image_loader: ImageLoader::new()?,
                    })
                })
            })
            .build();

        let mut client = serenity::ClientBuilder::new(
            &config.discord_token,
            serenity::GatewayIntents::non_privileged(),
        )
        .framework(framework)
        .await
        .context(here!())?;

        let task = tokio::spawn(async move {
            if let Err(e) = client.start().await {
                error!("{:?}", e);
            }

            info!(task = "Discord bot", "Shutting down.");
        });

        Ok(task)
    }
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(command = %ctx.command().qualified_name, "{:?}", error);

            let _ = ctx
                .send(
                    poise::CreateReply::default()
                        .content("Something went wrong, please try again later!")
                        .ephemeral(true),
                )
                .await;
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {:?}", e);
            }
        }
    }
}
