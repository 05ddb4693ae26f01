use utility::regex;

/// Errors caused by the caller rather than the system. These are reported as
/// ephemeral replies and end the command without output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UserError {
    FlagAndImageConflict,
    UnknownFlag(String),
    MissingAvatar,
}

impl UserError {
    pub(crate) fn message(&self) -> &'static str {
        match self {
            Self::FlagAndImageConflict => "You can only use one of the flag or image options!",
            Self::UnknownFlag(_) => "Invalid flag!",
            Self::MissingAvatar => "You must provide an avatar or have a valid avatar",
        }
    }
}

/// Where the flag canvas comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FlagSource {
    /// A flag from the static table, by canonical name.
    Named(&'static str),
    /// A user-supplied image, fill-fitted to the canvas by the caller.
    Custom(String),
}

/// Decide the flag source from the two mutually exclusive options. With
/// neither given, the rainbow flag is used. An unknown flag name is rejected
/// here, before any image is fetched.
pub(crate) fn choose_flag_source(
    flag: Option<&str>,
    image_url: Option<&str>,
) -> Result<FlagSource, UserError> {
    match (flag, image_url) {
        (Some(_), Some(_)) => Err(UserError::FlagAndImageConflict),
        (Some(name), None) => render::flags::canonical_name(name)
            .map(FlagSource::Named)
            .ok_or_else(|| UserError::UnknownFlag(name.to_owned())),
        (None, Some(url)) => Ok(FlagSource::Custom(url.to_owned())),
        (None, None) => Ok(FlagSource::Named("lgbt")),
    }
}

/// The avatar to fetch: an explicit attachment wins, otherwise the caller's
/// own avatar. A caller with neither is a user error, and no rendering
/// happens.
pub(crate) fn resolve_avatar_url(
    attachment_url: Option<&str>,
    user_avatar_url: Option<String>,
) -> Result<String, UserError> {
    attachment_url
        .map(str::to_owned)
        .or(user_avatar_url)
        .ok_or(UserError::MissingAvatar)
}

/// `<sanitized-username>-pride.png`; lowercased, non-alphanumerics stripped,
/// falling back to "avatar" when nothing survives.
pub(crate) fn attachment_file_name(username: &str) -> String {
    let lowered = username.to_lowercase();
    let stem = regex!("[^a-zA-Z0-9]").replace_all(&lowered, "");
    let stem = if stem.is_empty() { "avatar" } else { stem.as_ref() };

    format!("{stem}-pride.png")
}

pub(crate) fn title_case(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_and_image_together_are_rejected() {
        assert_eq!(
            choose_flag_source(Some("trans"), Some("https://example.com/flag.png")),
            Err(UserError::FlagAndImageConflict)
        );
    }

    #[test]
    fn unknown_flag_is_rejected_before_any_fetch() {
        assert_eq!(
            choose_flag_source(Some("not-a-real-flag"), None),
            Err(UserError::UnknownFlag("not-a-real-flag".to_owned()))
        );
    }

    #[test]
    fn named_flags_are_canonicalized() {
        assert_eq!(
            choose_flag_source(Some("TRANSGENDER"), None),
            Ok(FlagSource::Named("trans"))
        );
    }

    #[test]
    fn custom_image_is_passed_through() {
        assert_eq!(
            choose_flag_source(None, Some("https://example.com/flag.png")),
            Ok(FlagSource::Custom("https://example.com/flag.png".to_owned()))
        );
    }

    #[test]
    fn missing_both_options_defaults_to_the_rainbow_flag() {
        assert_eq!(choose_flag_source(None, None), Ok(FlagSource::Named("lgbt")));
    }

    #[test]
    fn no_attachment_and_no_user_avatar_is_rejected() {
        assert_eq!(
            resolve_avatar_url(None, None),
            Err(UserError::MissingAvatar)
        );
    }

    #[test]
    fn avatar_attachment_takes_precedence_over_the_user_avatar() {
        assert_eq!(
            resolve_avatar_url(
                Some("https://example.com/attached.png"),
                Some("https://cdn.example.com/user.png".to_owned()),
            ),
            Ok("https://example.com/attached.png".to_owned())
        );
    }

    #[test]
    fn user_avatar_is_used_when_no_attachment_is_given() {
        assert_eq!(
            resolve_avatar_url(None, Some("https://cdn.example.com/user.png".to_owned())),
            Ok("https://cdn.example.com/user.png".to_owned())
        );
    }

    #[test]
    fn file_names_are_sanitized() {
        assert_eq!(attachment_file_name("SomeUser"), "someuser-pride.png");
        assert_eq!(attachment_file_name("emi lia_42!"), "emilia42-pride.png");
        assert_eq!(attachment_file_name("日本語"), "avatar-pride.png");
        assert_eq!(attachment_file_name(""), "avatar-pride.png");
    }

    #[test]
    fn titles_are_capitalized_per_word() {
        assert_eq!(title_case("trans"), "Trans");
        assert_eq!(title_case("genderfluid"), "Genderfluid");
        assert_eq!(title_case("some-flag name"), "Some Flag Name");
    }
}
