use rand::Rng;
use render::{
    flags,
    pipeline::{self, RenderMode, CANVAS_SIZE},
    FitMode,
};

use super::{
    prelude::*,
    util::{
        attachment_file_name, choose_flag_source, resolve_avatar_url, title_case, FlagSource,
        UserError,
    },
};

#[poise::command(slash_command, category = "Pride")]
/// Attaches a pride flag to your avatar
pub(crate) async fn pride(
    ctx: Context<'_>,
    #[description = "The flag to attach"] flag: Option<String>,
    #[description = "The image to use as a flag instead of the flag option"] image: Option<
        serenity::Attachment,
    >,
    #[description = "The image to use as the avatar"] avatar: Option<serenity::Attachment>,
    #[description = "Whether to mask the flag over the avatar"] mask: Option<bool>,
    #[description = "Whether to blend the flag and blur the lines"] blend: Option<bool>,
) -> Result<(), Error> {
    ctx.defer().await?;

    let mode = if mask.unwrap_or(false) {
        RenderMode::Mask
    } else {
        RenderMode::Overlay
    };
    let blend = blend.unwrap_or(false);

    let avatar_url = match resolve_avatar_url(
        avatar.as_ref().map(|attachment| attachment.url.as_str()),
        ctx.author().avatar_url(),
    ) {
        Ok(url) => url,
        Err(e) => return send_user_error(ctx, &e).await,
    };

    // Reject conflicting options and unknown flag names before fetching
    // anything.
    let flag_source = match choose_flag_source(
        flag.as_deref(),
        image.as_ref().map(|attachment| attachment.url.as_str()),
    ) {
        Ok(source) => source,
        Err(e) => return send_user_error(ctx, &e).await,
    };

    let loader = &ctx.data().image_loader;

    let (avatar_image, flag_image, flag_name) = match &flag_source {
        FlagSource::Named(name) => {
            let flag_image = flags::resolve(name)
                .ok_or_else(|| anyhow!("No source image for known flag `{}`!", name))
                .context(here!())?;

            let avatar_image = loader.load(&avatar_url).await.context(here!())?;

            (avatar_image, flag_image, Some(*name))
        }
        FlagSource::Custom(url) => {
            // Neither fetch depends on the other.
            let (avatar_image, custom_flag) =
                tokio::try_join!(loader.load(&avatar_url), loader.load(url)).context(here!())?;

            (
                avatar_image,
                custom_flag.resize(CANVAS_SIZE, CANVAS_SIZE, FitMode::Fill),
                None,
            )
        }
    };

    let rendered = pipeline::render(flag_image, avatar_image, mode, blend);
    let buffer = pipeline::encode_png(rendered).context(here!())?;

    let file_name = attachment_file_name(&ctx.author().name);

    let title = match flag_name {
        Some(name) => format!("Pride With {} Flag", title_case(name)),
        None => "Pride".to_owned(),
    };

    let embed = serenity::CreateEmbed::new()
        .title(title)
        .description("Here you go!")
        .image(format!("attachment://{file_name}"))
        .colour(serenity::Colour::new(
            rand::thread_rng().gen_range(0..=0x00FF_FFFF),
        ));

    ctx.send(
        poise::CreateReply::default()
            .embed(embed)
            .attachment(serenity::CreateAttachment::bytes(buffer, file_name)),
    )
    .await
    .context(here!())?;

    Ok(())
}

async fn send_user_error(ctx: Context<'_>, error: &UserError) -> Result<(), Error> {
    debug!(?error, "Rejected user input.");

    ctx.send(
        poise::CreateReply::default()
            .content(error.message())
            .ephemeral(true),
    )
    .await
    .context(here!())?;

    Ok(())
}
