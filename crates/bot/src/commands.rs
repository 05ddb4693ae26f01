mod prelude;

mod pride;
pub(crate) mod util;

pub(crate) fn get_commands() -> Vec<poise::Command<crate::Data, crate::Error>> {
    vec![pride::pride()]
}
