use crate::model::{ChannelInfo, Language, MatchRecord};

const RBFA_BASE_URL: &str = "https://www.rbfa.be";
const ORGANISER_LOGO_PATH: &str = "assets/img/icons/organisers";

/// Public rbfa.be page of a match in the given language.
pub(crate) fn match_url(language: &Language, match_id: &str) -> String {
    format!(
        "{RBFA_BASE_URL}/{}/{}/{match_id}",
        language.code(),
        language.url_keyword()
    )
}

/// Logo of an organiser channel; codes are case-insensitive upstream.
pub(crate) fn channel_logo_url(channel: &str) -> String {
    format!(
        "{RBFA_BASE_URL}/{ORGANISER_LOGO_PATH}/Logo{}.svg",
        channel.to_uppercase()
    )
}

pub(crate) fn channel_info(record: &MatchRecord) -> Option<ChannelInfo> {
    record.channel.as_ref().map(|channel| ChannelInfo {
        channel: channel.clone(),
        channel_logo_url: channel_logo_url(channel),
    })
}
